//! Token Ledger Pallet
//!
//! Single-asset account book with a hard supply cap and a fixed granularity. Holders move
//! balances themselves or through operators: accounts they authorized explicitly, default
//! operators fixed at genesis, and official operators curated by the owner. On top of that sits
//! an access-control overlay of per-account freezes and a ledger-wide pause.
//!
//! Every movement follows the same order: all checks, then storage effects, then events, and
//! only then the sender/recipient notification hooks.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod adapters;
pub mod types;
pub use adapters::{CapabilityResolver, CodeInspect, TokenHooks};
pub use types::{Ownership, SendMode};

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

const LOG_TARGET: &str = "runtime::token-ledger";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  /// Make `who` report code through the runtime's `CodeInspect`.
  fn mark_contract(who: &AccountId);
}

#[cfg(feature = "runtime-benchmarks")]
impl<AccountId> BenchmarkHelper<AccountId> for () {
  fn mark_contract(_who: &AccountId) {}
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use crate::adapters::{CapabilityResolver, CodeInspect, TokenHooks};
  use crate::types::{Ownership, SendMode};
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::storage::with_storage_layer,
    sp_runtime::traits::{AtLeast32BitUnsigned, Bounded, MaybeSerializeDeserialize, One, Zero},
  };
  use frame::prelude::*;
  use primitives::{
    Capability, Guarded,
    params::{DEFAULT_GRANULARITY, DEFAULT_SUPPLY_CAP},
  };

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Balance type
    type Balance: Parameter
      + Member
      + AtLeast32BitUnsigned
      + Default
      + Copy
      + MaxEncodedLen
      + MaybeSerializeDeserialize;

    /// Account standing for "nobody": source of mints, sink of burns, never a valid recipient
    #[pallet::constant]
    type NullAccount: Get<Self::AccountId>;

    /// Capability registry used to discover sender/recipient hook implementers
    type CapabilityResolver: CapabilityResolver<Self::AccountId>;

    /// Sender/recipient notification hooks
    type TokenHooks: TokenHooks<Self::AccountId, Self::Balance>;

    /// Reports whether an account carries code
    type CodeInspector: CodeInspect<Self::AccountId>;

    /// Maximum length of holder/operator data attached to a movement
    #[pallet::constant]
    type MaxDataLength: Get<u32>;

    /// Maximum number of legs in one batch call
    #[pallet::constant]
    type MaxBatchSize: Get<u32>;

    /// Maximum number of default operators set at genesis
    #[pallet::constant]
    type MaxDefaultOperators: Get<u32>;

    /// Maximum length of the token name and symbol
    #[pallet::constant]
    type MaxMetadataLength: Get<u32>;

    /// Decimal places advertised to ERC20-style clients
    #[pallet::constant]
    type Decimals: Get<u8>;

    /// Weight information
    type WeightInfo: WeightInfo;

    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  pub type DataOf<T> = BoundedVec<u8, <T as Config>::MaxDataLength>;
  pub type RecipientsOf<T> =
    BoundedVec<<T as frame_system::Config>::AccountId, <T as Config>::MaxBatchSize>;
  pub type AmountsOf<T> = BoundedVec<<T as Config>::Balance, <T as Config>::MaxBatchSize>;
  pub type MetadataOf<T> = BoundedVec<u8, <T as Config>::MaxMetadataLength>;

  #[pallet::storage]
  #[pallet::getter(fn name)]
  pub type Name<T: Config> = StorageValue<_, MetadataOf<T>, ValueQuery>;

  #[pallet::storage]
  #[pallet::getter(fn symbol)]
  pub type Symbol<T: Config> = StorageValue<_, MetadataOf<T>, ValueQuery>;

  /// Smallest indivisible amount. Fixed at genesis, never zero.
  #[pallet::storage]
  #[pallet::getter(fn granularity)]
  pub type Granularity<T: Config> = StorageValue<_, T::Balance, ValueQuery>;

  /// Upper bound on total supply. Fixed at genesis.
  #[pallet::storage]
  #[pallet::getter(fn supply_cap)]
  pub type SupplyCap<T: Config> = StorageValue<_, T::Balance, ValueQuery>;

  /// Sum of all balances.
  #[pallet::storage]
  #[pallet::getter(fn total_supply)]
  pub type TotalSupply<T: Config> = StorageValue<_, T::Balance, ValueQuery>;

  #[pallet::storage]
  #[pallet::getter(fn balance_of)]
  pub type Balances<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, T::Balance, ValueQuery>;

  /// ERC20 allowances: (holder, spender) -> remaining amount.
  #[pallet::storage]
  #[pallet::getter(fn allowance)]
  pub type Allowances<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    Blake2_128Concat,
    T::AccountId,
    T::Balance,
    ValueQuery,
  >;

  /// Operators explicitly authorized by a holder: (holder, operator).
  #[pallet::storage]
  pub type AuthorizedOperators<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    Blake2_128Concat,
    T::AccountId,
    (),
    OptionQuery,
  >;

  /// Operators every holder starts out trusting.
  #[pallet::storage]
  #[pallet::getter(fn default_operators)]
  pub type DefaultOperators<T: Config> =
    StorageValue<_, BoundedVec<T::AccountId, T::MaxDefaultOperators>, ValueQuery>;

  /// Default operators a holder opted out of: (holder, operator).
  #[pallet::storage]
  pub type RevokedDefaultOperators<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    Blake2_128Concat,
    T::AccountId,
    (),
    OptionQuery,
  >;

  #[pallet::storage]
  pub type OfficialOperators<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

  /// Holders that stopped accepting official operators. Absence means accepting.
  #[pallet::storage]
  pub type RejectsOfficialOperators<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

  #[pallet::storage]
  pub type Frozen<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

  #[pallet::storage]
  #[pallet::getter(fn is_paused)]
  pub type Paused<T: Config> = StorageValue<_, bool, ValueQuery>;

  #[pallet::storage]
  pub type Owner<T: Config> = StorageValue<_, Ownership<T::AccountId>, ValueQuery>;

  #[pallet::genesis_config]
  pub struct GenesisConfig<T: Config> {
    pub owner: Option<T::AccountId>,
    pub name: Vec<u8>,
    pub symbol: Vec<u8>,
    pub granularity: T::Balance,
    pub supply_cap: T::Balance,
    pub default_operators: Vec<T::AccountId>,
  }

  impl<T: Config> Default for GenesisConfig<T> {
    fn default() -> Self {
      Self {
        owner: None,
        name: Vec::new(),
        symbol: Vec::new(),
        granularity: T::Balance::try_from(DEFAULT_GRANULARITY).unwrap_or_else(|_| One::one()),
        supply_cap: T::Balance::try_from(DEFAULT_SUPPLY_CAP)
          .unwrap_or_else(|_| T::Balance::max_value()),
        default_operators: Vec::new(),
      }
    }
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      assert!(!self.granularity.is_zero(), "granularity must be nonzero");
      let name: MetadataOf<T> = self
        .name
        .clone()
        .try_into()
        .expect("name exceeds MaxMetadataLength");
      let symbol: MetadataOf<T> = self
        .symbol
        .clone()
        .try_into()
        .expect("symbol exceeds MaxMetadataLength");
      let default_operators: BoundedVec<T::AccountId, T::MaxDefaultOperators> = self
        .default_operators
        .clone()
        .try_into()
        .expect("too many default operators");

      Name::<T>::put(name);
      Symbol::<T>::put(symbol);
      Granularity::<T>::put(self.granularity);
      SupplyCap::<T>::put(self.supply_cap);
      DefaultOperators::<T>::put(default_operators);
      if let Some(owner) = &self.owner {
        Owner::<T>::put(Ownership::new(owner.clone()));
      }
    }
  }

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// New units were created.
    Minted {
      operator: T::AccountId,
      to: T::AccountId,
      amount: T::Balance,
      operator_data: DataOf<T>,
    },
    /// Units moved between holders.
    Sent {
      operator: T::AccountId,
      from: T::AccountId,
      to: T::AccountId,
      amount: T::Balance,
      holder_data: DataOf<T>,
      operator_data: DataOf<T>,
    },
    /// Units were destroyed.
    Burned {
      operator: T::AccountId,
      from: T::AccountId,
      amount: T::Balance,
      holder_data: DataOf<T>,
      operator_data: DataOf<T>,
    },
    /// ERC20-style movement record; mints come from and burns go to the null account.
    Transfer {
      from: T::AccountId,
      to: T::AccountId,
      amount: T::Balance,
    },
    Approval {
      owner: T::AccountId,
      spender: T::AccountId,
      amount: T::Balance,
    },
    AuthorizedOperator {
      operator: T::AccountId,
      holder: T::AccountId,
    },
    RevokedOperator {
      operator: T::AccountId,
      holder: T::AccountId,
    },
    OfficialOperatorAdded {
      operator: T::AccountId,
    },
    OfficialOperatorRemoved {
      operator: T::AccountId,
    },
    OfficialOperatorsAcceptedByUser {
      holder: T::AccountId,
    },
    OfficialOperatorsRejectedByUser {
      holder: T::AccountId,
    },
    AccountFrozen {
      who: T::AccountId,
    },
    AccountUnfrozen {
      who: T::AccountId,
    },
    Paused,
    Unpaused,
    /// A successor was proposed; it takes over once it claims.
    OwnershipTransferProposed {
      current_owner: T::AccountId,
      proposed_owner: T::AccountId,
    },
    OwnershipTransferred {
      previous_owner: T::AccountId,
      new_owner: T::AccountId,
    },
    OwnershipRenounced {
      previous_owner: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Caller is not an operator for the holder.
    NotAuthorizedOperator,
    /// Caller is not the owner.
    NotOwner,
    /// Caller is not the proposed owner.
    NotPendingOwner,
    /// Official operators must carry code.
    NotAContract,
    /// The ledger is paused.
    Paused,
    /// A party to the call is frozen.
    AccountFrozen,
    /// Minting would exceed the supply cap.
    CapExceeded,
    /// Amount is not a multiple of the granularity.
    InvalidGranularity,
    InsufficientBalance,
    InsufficientAllowance,
    /// Recipient is the null account.
    InvalidRecipient,
    /// Recipient carries code but registered no recipient hook.
    RecipientCannotReceive,
    /// Attached data exceeds `MaxDataLength`.
    DataTooLong,
    AlreadyAuthorized,
    NotAuthorized,
    /// Official operators cannot be revoked while the holder accepts them.
    OfficialOperatorNotRevocable,
    CannotAuthorizeSelf,
    CannotRevokeSelf,
    AlreadyOfficialOperator,
    NotOfficialOperator,
    /// The holder is already in the requested state.
    NoChange,
    AlreadyPaused,
    NotPaused,
    AlreadyFrozen,
    NotFrozen,
    /// Recipient and amount lists differ in length.
    LengthMismatch,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Create `amount` rounded down to the granularity and credit it to `to`.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::mint())]
    pub fn mint(
      origin: OriginFor<T>,
      to: T::AccountId,
      amount: T::Balance,
      operator_data: DataOf<T>,
    ) -> DispatchResult {
      let who = Self::ensure_owner(origin)?;
      Self::do_mint(&who, &to, amount, &operator_data)
    }

    /// ERC20-compatible transfer.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::transfer())]
    pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: T::Balance) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let empty = DataOf::<T>::default();
      Self::do_send(&who, &who, &to, amount, &empty, &empty, SendMode::Transfer)
    }

    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::send())]
    pub fn send(
      origin: OriginFor<T>,
      to: T::AccountId,
      amount: T::Balance,
      data: DataOf<T>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_send(
        &who,
        &who,
        &to,
        amount,
        &data,
        &DataOf::<T>::default(),
        SendMode::Send,
      )
    }

    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::operator_send())]
    pub fn operator_send(
      origin: OriginFor<T>,
      holder: T::AccountId,
      to: T::AccountId,
      amount: T::Balance,
      holder_data: DataOf<T>,
      operator_data: DataOf<T>,
    ) -> DispatchResult {
      let operator = ensure_signed(origin)?;
      Self::ensure_operator(&operator, &holder)?;
      Self::do_send(
        &operator,
        &holder,
        &to,
        amount,
        &holder_data,
        &operator_data,
        SendMode::Send,
      )
    }

    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::burn())]
    pub fn burn(origin: OriginFor<T>, amount: T::Balance, data: DataOf<T>) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_burn(&who, &who, amount, &data, &DataOf::<T>::default())
    }

    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::operator_burn())]
    pub fn operator_burn(
      origin: OriginFor<T>,
      holder: T::AccountId,
      amount: T::Balance,
      holder_data: DataOf<T>,
      operator_data: DataOf<T>,
    ) -> DispatchResult {
      let operator = ensure_signed(origin)?;
      Self::ensure_operator(&operator, &holder)?;
      Self::do_burn(&operator, &holder, amount, &holder_data, &operator_data)
    }

    /// Set (not increase) the amount `spender` may move on the caller's behalf.
    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::approve())]
    pub fn approve(
      origin: OriginFor<T>,
      spender: T::AccountId,
      amount: T::Balance,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_approve(&who, &who, spender, amount)
    }

    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::transfer_from())]
    pub fn transfer_from(
      origin: OriginFor<T>,
      holder: T::AccountId,
      to: T::AccountId,
      amount: T::Balance,
    ) -> DispatchResult {
      let spender = ensure_signed(origin)?;
      Self::ensure_not_paused()?;
      let allowed = Allowances::<T>::get(&holder, &spender);
      ensure!(allowed >= amount, Error::<T>::InsufficientAllowance);
      Allowances::<T>::insert(&holder, &spender, allowed.guarded_sub(amount)?);

      let empty = DataOf::<T>::default();
      Self::do_send(
        &spender,
        &holder,
        &to,
        amount,
        &empty,
        &empty,
        SendMode::Transfer,
      )
    }

    #[pallet::call_index(8)]
    #[pallet::weight(T::WeightInfo::authorize_operator())]
    pub fn authorize_operator(origin: OriginFor<T>, operator: T::AccountId) -> DispatchResult {
      let holder = ensure_signed(origin)?;
      ensure!(operator != holder, Error::<T>::CannotAuthorizeSelf);

      if Self::is_default_operator(&operator) {
        ensure!(
          RevokedDefaultOperators::<T>::contains_key(&holder, &operator),
          Error::<T>::AlreadyAuthorized
        );
        RevokedDefaultOperators::<T>::remove(&holder, &operator);
      } else {
        ensure!(
          !AuthorizedOperators::<T>::contains_key(&holder, &operator),
          Error::<T>::AlreadyAuthorized
        );
        AuthorizedOperators::<T>::insert(&holder, &operator, ());
      }

      Self::deposit_event(Event::AuthorizedOperator { operator, holder });
      Ok(())
    }

    #[pallet::call_index(9)]
    #[pallet::weight(T::WeightInfo::revoke_operator())]
    pub fn revoke_operator(origin: OriginFor<T>, operator: T::AccountId) -> DispatchResult {
      let holder = ensure_signed(origin)?;
      ensure!(operator != holder, Error::<T>::CannotRevokeSelf);
      ensure!(
        !(Self::is_official_operator(&operator) && Self::is_accepting_official_operators(&holder)),
        Error::<T>::OfficialOperatorNotRevocable
      );

      if Self::is_default_operator(&operator) {
        ensure!(
          !RevokedDefaultOperators::<T>::contains_key(&holder, &operator),
          Error::<T>::NotAuthorized
        );
        RevokedDefaultOperators::<T>::insert(&holder, &operator, ());
      } else {
        ensure!(
          AuthorizedOperators::<T>::contains_key(&holder, &operator),
          Error::<T>::NotAuthorized
        );
        AuthorizedOperators::<T>::remove(&holder, &operator);
      }

      Self::deposit_event(Event::RevokedOperator { operator, holder });
      Ok(())
    }

    #[pallet::call_index(10)]
    #[pallet::weight(T::WeightInfo::add_official_operator())]
    pub fn add_official_operator(origin: OriginFor<T>, operator: T::AccountId) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(
        T::CodeInspector::has_code(&operator),
        Error::<T>::NotAContract
      );
      ensure!(
        !Self::is_official_operator(&operator),
        Error::<T>::AlreadyOfficialOperator
      );

      OfficialOperators::<T>::insert(&operator, ());
      log::debug!(target: LOG_TARGET, "official operator added: {:?}", operator);
      Self::deposit_event(Event::OfficialOperatorAdded { operator });
      Ok(())
    }

    #[pallet::call_index(11)]
    #[pallet::weight(T::WeightInfo::remove_official_operator())]
    pub fn remove_official_operator(
      origin: OriginFor<T>,
      operator: T::AccountId,
    ) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(
        T::CodeInspector::has_code(&operator),
        Error::<T>::NotAContract
      );
      ensure!(
        Self::is_official_operator(&operator),
        Error::<T>::NotOfficialOperator
      );

      OfficialOperators::<T>::remove(&operator);
      log::debug!(target: LOG_TARGET, "official operator removed: {:?}", operator);
      Self::deposit_event(Event::OfficialOperatorRemoved { operator });
      Ok(())
    }

    #[pallet::call_index(12)]
    #[pallet::weight(T::WeightInfo::accept_all_official_operators())]
    pub fn accept_all_official_operators(origin: OriginFor<T>) -> DispatchResult {
      let holder = ensure_signed(origin)?;
      ensure!(
        !Self::is_accepting_official_operators(&holder),
        Error::<T>::NoChange
      );

      RejectsOfficialOperators::<T>::remove(&holder);
      Self::deposit_event(Event::OfficialOperatorsAcceptedByUser { holder });
      Ok(())
    }

    #[pallet::call_index(13)]
    #[pallet::weight(T::WeightInfo::reject_all_official_operators())]
    pub fn reject_all_official_operators(origin: OriginFor<T>) -> DispatchResult {
      let holder = ensure_signed(origin)?;
      ensure!(
        Self::is_accepting_official_operators(&holder),
        Error::<T>::NoChange
      );

      RejectsOfficialOperators::<T>::insert(&holder, ());
      Self::deposit_event(Event::OfficialOperatorsRejectedByUser { holder });
      Ok(())
    }

    #[pallet::call_index(14)]
    #[pallet::weight(T::WeightInfo::freeze())]
    pub fn freeze(origin: OriginFor<T>, who: T::AccountId) -> DispatchResult {
      Self::ensure_owner(origin)?;
      Self::do_freeze(who)
    }

    #[pallet::call_index(15)]
    #[pallet::weight(T::WeightInfo::unfreeze())]
    pub fn unfreeze(origin: OriginFor<T>, who: T::AccountId) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(Self::is_frozen(&who), Error::<T>::NotFrozen);

      Frozen::<T>::remove(&who);
      log::debug!(target: LOG_TARGET, "account unfrozen: {:?}", who);
      Self::deposit_event(Event::AccountUnfrozen { who });
      Ok(())
    }

    /// Let a holder lock their own account, e.g. after a key compromise.
    #[pallet::call_index(16)]
    #[pallet::weight(T::WeightInfo::freeze_my_account())]
    pub fn freeze_my_account(origin: OriginFor<T>) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_freeze(who)
    }

    /// Owner recovery path: move funds out of a frozen account.
    #[pallet::call_index(17)]
    #[pallet::weight(T::WeightInfo::transfer_from_frozen_account())]
    pub fn transfer_from_frozen_account(
      origin: OriginFor<T>,
      holder: T::AccountId,
      to: T::AccountId,
      amount: T::Balance,
    ) -> DispatchResult {
      let owner = Self::ensure_owner(origin)?;
      let empty = DataOf::<T>::default();
      Self::do_send(
        &owner,
        &holder,
        &to,
        amount,
        &empty,
        &empty,
        SendMode::Recovery,
      )
    }

    #[pallet::call_index(18)]
    #[pallet::weight(T::WeightInfo::pause())]
    pub fn pause(origin: OriginFor<T>) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(!Paused::<T>::get(), Error::<T>::AlreadyPaused);

      Paused::<T>::put(true);
      log::debug!(target: LOG_TARGET, "ledger paused");
      Self::deposit_event(Event::Paused);
      Ok(())
    }

    #[pallet::call_index(19)]
    #[pallet::weight(T::WeightInfo::unpause())]
    pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(Paused::<T>::get(), Error::<T>::NotPaused);

      Paused::<T>::put(false);
      log::debug!(target: LOG_TARGET, "ledger unpaused");
      Self::deposit_event(Event::Unpaused);
      Ok(())
    }

    /// ERC20-mode transfer to several recipients. All legs succeed or none do.
    #[pallet::call_index(20)]
    #[pallet::weight(T::WeightInfo::batch_transfer(recipients.len() as u32))]
    pub fn batch_transfer(
      origin: OriginFor<T>,
      recipients: RecipientsOf<T>,
      amounts: AmountsOf<T>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let empty = DataOf::<T>::default();
      Self::do_batch_send(
        &who,
        &who,
        &recipients,
        &amounts,
        &empty,
        &empty,
        SendMode::Transfer,
      )
    }

    #[pallet::call_index(21)]
    #[pallet::weight(T::WeightInfo::batch_send(recipients.len() as u32))]
    pub fn batch_send(
      origin: OriginFor<T>,
      recipients: RecipientsOf<T>,
      amounts: AmountsOf<T>,
      data: DataOf<T>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_batch_send(
        &who,
        &who,
        &recipients,
        &amounts,
        &data,
        &DataOf::<T>::default(),
        SendMode::Send,
      )
    }

    #[pallet::call_index(22)]
    #[pallet::weight(T::WeightInfo::operator_batch_send(recipients.len() as u32))]
    pub fn operator_batch_send(
      origin: OriginFor<T>,
      holder: T::AccountId,
      recipients: RecipientsOf<T>,
      amounts: AmountsOf<T>,
      holder_data: DataOf<T>,
      operator_data: DataOf<T>,
    ) -> DispatchResult {
      let operator = ensure_signed(origin)?;
      Self::ensure_operator(&operator, &holder)?;
      Self::do_batch_send(
        &operator,
        &holder,
        &recipients,
        &amounts,
        &holder_data,
        &operator_data,
        SendMode::Send,
      )
    }

    /// Propose a new owner. The current owner stays in charge until the proposal is claimed.
    #[pallet::call_index(23)]
    #[pallet::weight(T::WeightInfo::transfer_ownership())]
    pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
      let who = Self::ensure_owner(origin)?;
      ensure!(
        new_owner != T::NullAccount::get(),
        Error::<T>::InvalidRecipient
      );

      Owner::<T>::mutate(|ownership| ownership.pending = Some(new_owner.clone()));
      log::debug!(
        target: LOG_TARGET,
        "ownership transfer proposed: {:?} -> {:?}",
        who,
        new_owner
      );
      Self::deposit_event(Event::OwnershipTransferProposed {
        current_owner: who,
        proposed_owner: new_owner,
      });
      Ok(())
    }

    #[pallet::call_index(24)]
    #[pallet::weight(T::WeightInfo::claim_ownership())]
    pub fn claim_ownership(origin: OriginFor<T>) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let mut ownership = Owner::<T>::get();
      ensure!(ownership.is_pending(&who), Error::<T>::NotPendingOwner);

      let previous = ownership.claim();
      Owner::<T>::put(ownership);
      log::debug!(target: LOG_TARGET, "ownership claimed by {:?}", who);
      if let Some(previous_owner) = previous {
        Self::deposit_event(Event::OwnershipTransferred {
          previous_owner,
          new_owner: who,
        });
      }
      Ok(())
    }

    /// Give up ownership for good. Owner-only calls become unreachable.
    #[pallet::call_index(25)]
    #[pallet::weight(T::WeightInfo::renounce_ownership())]
    pub fn renounce_ownership(origin: OriginFor<T>) -> DispatchResult {
      let who = Self::ensure_owner(origin)?;
      Owner::<T>::mutate(|ownership| ownership.renounce());
      log::debug!(target: LOG_TARGET, "ownership renounced by {:?}", who);
      Self::deposit_event(Event::OwnershipRenounced {
        previous_owner: who,
      });
      Ok(())
    }

    /// Set the amount `spender` may move out of `holder`, acting as the holder's operator.
    #[pallet::call_index(26)]
    #[pallet::weight(T::WeightInfo::operator_approve())]
    pub fn operator_approve(
      origin: OriginFor<T>,
      holder: T::AccountId,
      spender: T::AccountId,
      amount: T::Balance,
    ) -> DispatchResult {
      let operator = ensure_signed(origin)?;
      Self::ensure_operator(&operator, &holder)?;
      Self::do_approve(&operator, &holder, spender, amount)
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn decimals() -> u8 {
      T::Decimals::get()
    }

    pub fn owner() -> Option<T::AccountId> {
      Owner::<T>::get().current
    }

    pub fn pending_owner() -> Option<T::AccountId> {
      Owner::<T>::get().pending
    }

    pub fn is_frozen(who: &T::AccountId) -> bool {
      Frozen::<T>::contains_key(who)
    }

    pub fn is_official_operator(operator: &T::AccountId) -> bool {
      OfficialOperators::<T>::contains_key(operator)
    }

    pub fn is_accepting_official_operators(holder: &T::AccountId) -> bool {
      !RejectsOfficialOperators::<T>::contains_key(holder)
    }

    pub fn is_default_operator(operator: &T::AccountId) -> bool {
      DefaultOperators::<T>::get().contains(operator)
    }

    /// Whether `operator` may move `holder`'s funds.
    pub fn is_operator_for(operator: &T::AccountId, holder: &T::AccountId) -> bool {
      operator == holder
        || AuthorizedOperators::<T>::contains_key(holder, operator)
        || (Self::is_default_operator(operator)
          && !RevokedDefaultOperators::<T>::contains_key(holder, operator))
        || (Self::is_official_operator(operator) && Self::is_accepting_official_operators(holder))
    }

    /// Operator send for callers outside this pallet, e.g. a signature-authorized relay.
    pub fn operator_send_as(
      operator: &T::AccountId,
      holder: &T::AccountId,
      to: &T::AccountId,
      amount: T::Balance,
      holder_data: &[u8],
      operator_data: &[u8],
    ) -> DispatchResult {
      let holder_data: DataOf<T> = holder_data
        .to_vec()
        .try_into()
        .map_err(|_| Error::<T>::DataTooLong)?;
      let operator_data: DataOf<T> = operator_data
        .to_vec()
        .try_into()
        .map_err(|_| Error::<T>::DataTooLong)?;
      Self::ensure_operator(operator, holder)?;
      Self::do_send(
        operator,
        holder,
        to,
        amount,
        &holder_data,
        &operator_data,
        SendMode::Send,
      )
    }

    pub fn do_mint(
      operator: &T::AccountId,
      to: &T::AccountId,
      amount: T::Balance,
      operator_data: &DataOf<T>,
    ) -> DispatchResult {
      // checks
      Self::ensure_not_paused()?;
      let null = T::NullAccount::get();
      ensure!(*to != null, Error::<T>::InvalidRecipient);
      let rounded = amount.round_down_to(Granularity::<T>::get())?;
      let new_supply = TotalSupply::<T>::get()
        .guarded_add(rounded)
        .ok()
        .filter(|supply| *supply <= SupplyCap::<T>::get())
        .ok_or(Error::<T>::CapExceeded)?;
      let recipient_hook = Self::recipient_hook(to, true)?;

      // effects
      TotalSupply::<T>::put(new_supply);
      Self::credit(to, rounded)?;

      Self::deposit_event(Event::Minted {
        operator: operator.clone(),
        to: to.clone(),
        amount: rounded,
        operator_data: operator_data.clone(),
      });
      Self::deposit_event(Event::Transfer {
        from: null.clone(),
        to: to.clone(),
        amount: rounded,
      });

      // interactions
      if let Some(implementer) = recipient_hook {
        T::TokenHooks::tokens_received(
          &implementer,
          operator,
          &null,
          to,
          rounded,
          &[],
          operator_data,
        )?;
      }
      Ok(())
    }

    pub fn do_send(
      operator: &T::AccountId,
      from: &T::AccountId,
      to: &T::AccountId,
      amount: T::Balance,
      holder_data: &DataOf<T>,
      operator_data: &DataOf<T>,
      mode: SendMode,
    ) -> DispatchResult {
      // checks
      Self::ensure_not_paused()?;
      ensure!(*to != T::NullAccount::get(), Error::<T>::InvalidRecipient);
      if mode.checks_sender_freeze() {
        ensure!(!Self::is_frozen(operator), Error::<T>::AccountFrozen);
        ensure!(!Self::is_frozen(from), Error::<T>::AccountFrozen);
      }
      ensure!(!Self::is_frozen(to), Error::<T>::AccountFrozen);
      ensure!(
        amount.divisible_by(Granularity::<T>::get())?,
        Error::<T>::InvalidGranularity
      );
      ensure!(
        Balances::<T>::get(from) >= amount,
        Error::<T>::InsufficientBalance
      );
      let sender_hook = T::CapabilityResolver::resolve(from, Capability::TokensSender);
      let recipient_hook = Self::recipient_hook(to, mode.prevents_locking())?;

      // effects
      Self::debit(from, amount)?;
      Self::credit(to, amount)?;

      Self::deposit_event(Event::Sent {
        operator: operator.clone(),
        from: from.clone(),
        to: to.clone(),
        amount,
        holder_data: holder_data.clone(),
        operator_data: operator_data.clone(),
      });
      Self::deposit_event(Event::Transfer {
        from: from.clone(),
        to: to.clone(),
        amount,
      });

      // interactions
      if let Some(implementer) = sender_hook {
        T::TokenHooks::tokens_to_send(
          &implementer,
          operator,
          from,
          to,
          amount,
          holder_data,
          operator_data,
        )?;
      }
      if let Some(implementer) = recipient_hook {
        T::TokenHooks::tokens_received(
          &implementer,
          operator,
          from,
          to,
          amount,
          holder_data,
          operator_data,
        )?;
      }
      Ok(())
    }

    pub fn do_burn(
      operator: &T::AccountId,
      from: &T::AccountId,
      amount: T::Balance,
      holder_data: &DataOf<T>,
      operator_data: &DataOf<T>,
    ) -> DispatchResult {
      // checks
      Self::ensure_not_paused()?;
      ensure!(!Self::is_frozen(operator), Error::<T>::AccountFrozen);
      ensure!(!Self::is_frozen(from), Error::<T>::AccountFrozen);
      ensure!(
        amount.divisible_by(Granularity::<T>::get())?,
        Error::<T>::InvalidGranularity
      );
      ensure!(
        Balances::<T>::get(from) >= amount,
        Error::<T>::InsufficientBalance
      );
      let sender_hook = T::CapabilityResolver::resolve(from, Capability::TokensSender);

      // effects
      Self::debit(from, amount)?;
      TotalSupply::<T>::try_mutate(|supply| -> DispatchResult {
        *supply = supply.guarded_sub(amount)?;
        Ok(())
      })?;

      let null = T::NullAccount::get();
      Self::deposit_event(Event::Burned {
        operator: operator.clone(),
        from: from.clone(),
        amount,
        holder_data: holder_data.clone(),
        operator_data: operator_data.clone(),
      });
      Self::deposit_event(Event::Transfer {
        from: from.clone(),
        to: null.clone(),
        amount,
      });

      // interactions
      if let Some(implementer) = sender_hook {
        T::TokenHooks::tokens_to_send(
          &implementer,
          operator,
          from,
          &null,
          amount,
          holder_data,
          operator_data,
        )?;
      }
      Ok(())
    }

    /// Run every leg in order inside one storage layer. A failing leg unwinds the earlier ones.
    pub fn do_batch_send(
      operator: &T::AccountId,
      holder: &T::AccountId,
      recipients: &[T::AccountId],
      amounts: &[T::Balance],
      holder_data: &DataOf<T>,
      operator_data: &DataOf<T>,
      mode: SendMode,
    ) -> DispatchResult {
      ensure!(
        recipients.len() == amounts.len(),
        Error::<T>::LengthMismatch
      );
      Self::ensure_not_paused()?;
      if mode.checks_sender_freeze() {
        ensure!(!Self::is_frozen(operator), Error::<T>::AccountFrozen);
        ensure!(!Self::is_frozen(holder), Error::<T>::AccountFrozen);
      }

      with_storage_layer(|| -> DispatchResult {
        for (to, amount) in recipients.iter().zip(amounts.iter()) {
          Self::do_send(
            operator,
            holder,
            to,
            *amount,
            holder_data,
            operator_data,
            mode,
          )?;
        }
        Ok(())
      })
    }

    fn do_approve(
      operator: &T::AccountId,
      holder: &T::AccountId,
      spender: T::AccountId,
      amount: T::Balance,
    ) -> DispatchResult {
      Self::ensure_not_paused()?;
      ensure!(!Self::is_frozen(operator), Error::<T>::AccountFrozen);
      ensure!(!Self::is_frozen(holder), Error::<T>::AccountFrozen);
      ensure!(!Self::is_frozen(&spender), Error::<T>::AccountFrozen);

      Allowances::<T>::insert(holder, &spender, amount);
      Self::deposit_event(Event::Approval {
        owner: holder.clone(),
        spender,
        amount,
      });
      Ok(())
    }

    fn do_freeze(who: T::AccountId) -> DispatchResult {
      ensure!(!Self::is_frozen(&who), Error::<T>::AlreadyFrozen);

      Frozen::<T>::insert(&who, ());
      log::debug!(target: LOG_TARGET, "account frozen: {:?}", who);
      Self::deposit_event(Event::AccountFrozen { who });
      Ok(())
    }

    /// Resolve the recipient hook, rejecting code-bearing recipients without one when locking
    /// must be prevented.
    fn recipient_hook(
      to: &T::AccountId,
      prevent_locking: bool,
    ) -> Result<Option<T::AccountId>, DispatchError> {
      let implementer = T::CapabilityResolver::resolve(to, Capability::TokensRecipient);
      if implementer.is_none() && prevent_locking {
        ensure!(
          !T::CodeInspector::has_code(to),
          Error::<T>::RecipientCannotReceive
        );
      }
      Ok(implementer)
    }

    fn debit(who: &T::AccountId, amount: T::Balance) -> DispatchResult {
      Balances::<T>::try_mutate(who, |balance| -> DispatchResult {
        *balance = balance.guarded_sub(amount)?;
        Ok(())
      })
    }

    fn credit(who: &T::AccountId, amount: T::Balance) -> DispatchResult {
      Balances::<T>::try_mutate(who, |balance| -> DispatchResult {
        *balance = balance.guarded_add(amount)?;
        Ok(())
      })
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
      let who = ensure_signed(origin)?;
      ensure!(Owner::<T>::get().is_owner(&who), Error::<T>::NotOwner);
      Ok(who)
    }

    fn ensure_operator(operator: &T::AccountId, holder: &T::AccountId) -> DispatchResult {
      ensure!(
        Self::is_operator_for(operator, holder),
        Error::<T>::NotAuthorizedOperator
      );
      Ok(())
    }

    fn ensure_not_paused() -> DispatchResult {
      ensure!(!Paused::<T>::get(), Error::<T>::Paused);
      Ok(())
    }
  }
}
