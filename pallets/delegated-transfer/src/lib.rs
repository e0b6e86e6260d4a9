//! Delegated Transfer Pallet
//!
//! Lets anyone (or one designated delegate) submit a ledger transfer that the holder signed
//! off-chain with a secp256k1 key. The pallet account acts as the holder's operator, so the
//! holder must have authorized it on the ledger beforehand. An optional fee is paid from the
//! holder to whoever submits the message.
//!
//! Replay protection is a per-signer nonce that only ever increases.

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

use frame::deps::sp_runtime::DispatchResult;

const LOG_TARGET: &str = "runtime::delegated-transfer";

/// Ledger operations the relay needs.
pub trait OperatorLedger<AccountId, Balance> {
  /// Move `amount` from `holder` to `to` with `operator` acting on the holder's behalf.
  fn operator_send(
    operator: &AccountId,
    holder: &AccountId,
    to: &AccountId,
    amount: Balance,
    holder_data: &[u8],
    operator_data: &[u8],
  ) -> DispatchResult;
}

impl<T: pallet_token_ledger::Config> OperatorLedger<T::AccountId, T::Balance>
  for pallet_token_ledger::Pallet<T>
{
  fn operator_send(
    operator: &T::AccountId,
    holder: &T::AccountId,
    to: &T::AccountId,
    amount: T::Balance,
    holder_data: &[u8],
    operator_data: &[u8],
  ) -> DispatchResult {
    pallet_token_ledger::Pallet::<T>::operator_send_as(
      operator,
      holder,
      to,
      amount,
      holder_data,
      operator_data,
    )
  }
}

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId, Balance> {
  /// Credit `holder` with `amount` and make `operator` one of its operators.
  fn prepare_holder(holder: &AccountId, operator: &AccountId, amount: Balance);
}

#[cfg(feature = "runtime-benchmarks")]
impl<T: pallet_token_ledger::Config> BenchmarkHelper<T::AccountId, T::Balance>
  for pallet_token_ledger::Pallet<T>
{
  fn prepare_holder(holder: &T::AccountId, operator: &T::AccountId, amount: T::Balance) {
    use frame::deps::sp_runtime::traits::Saturating;

    pallet_token_ledger::TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
    pallet_token_ledger::Balances::<T>::mutate(holder, |balance| {
      *balance = balance.saturating_add(amount)
    });
    pallet_token_ledger::AuthorizedOperators::<T>::insert(holder, operator, ());
  }
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, OperatorLedger, WeightInfo};
  use frame::deps::{
    frame_support::PalletId,
    sp_core::ecdsa,
    sp_runtime::traits::{AccountIdConversion, AtLeast32BitUnsigned, IdentifyAccount, Zero},
  };
  use frame::prelude::*;
  use polkadot_sdk::sp_io::{crypto::secp256k1_ecdsa_recover_compressed, hashing::blake2_256};

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Balance type
    type Balance: Parameter + Member + AtLeast32BitUnsigned + Copy + MaxEncodedLen;

    /// Ledger the relay settles against
    type Ledger: OperatorLedger<Self::AccountId, Self::Balance>;

    /// Maps a recovered secp256k1 key to the account that signed
    type Signer: IdentifyAccount<AccountId = Self::AccountId> + From<ecdsa::Public>;

    /// Pallet ID; its account is the relay operator and the message domain
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Account standing for "nobody"; never a valid signer or recipient
    #[pallet::constant]
    type NullAccount: Get<Self::AccountId>;

    /// Maximum length of data forwarded with a transfer
    #[pallet::constant]
    type MaxDataLength: Get<u32>;

    /// Weight information
    type WeightInfo: WeightInfo;

    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId, Self::Balance>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  pub type DataOf<T> = BoundedVec<u8, <T as Config>::MaxDataLength>;

  /// Highest nonce consumed per signer.
  #[pallet::storage]
  #[pallet::getter(fn used_nonce)]
  pub type UsedNonce<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u64, ValueQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A signed transfer was settled.
    TransferPreSigned {
      signer: T::AccountId,
      to: T::AccountId,
      submitter: T::AccountId,
      amount: T::Balance,
      fee: T::Balance,
      nonce: u64,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Signature does not recover to a usable key.
    InvalidSignature,
    /// Recovery id is not one of 0, 1, 27 or 28.
    SignatureComponentOutOfRange,
    /// Nonce is not above the last one used by this signer.
    FreshnessTokenReused,
    /// The message names a different delegate.
    NotDelegate,
    /// Recipient is the null account.
    InvalidRecipient,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Settle a transfer the holder signed off-chain.
    ///
    /// - `delegate`: only this account may submit; `None` lets anyone submit.
    /// - `fee`: paid from the signer to the submitter; zero skips the fee leg.
    /// - `signature`: 65 bytes `r ‖ s ‖ v` over [`Pallet::delegation_digest`].
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::transfer_pre_signed())]
    pub fn transfer_pre_signed(
      origin: OriginFor<T>,
      to: T::AccountId,
      delegate: Option<T::AccountId>,
      amount: T::Balance,
      fee: T::Balance,
      nonce: u64,
      data: DataOf<T>,
      signature: [u8; 65],
    ) -> DispatchResult {
      let submitter = ensure_signed(origin)?;
      let digest = Self::delegation_digest(&to, &delegate, amount, fee, nonce, &data);
      let signer = Self::recover_signer(&signature, &digest)?;

      if let Some(delegate) = &delegate {
        ensure!(*delegate == submitter, Error::<T>::NotDelegate);
      }
      ensure!(
        nonce > UsedNonce::<T>::get(&signer),
        Error::<T>::FreshnessTokenReused
      );
      ensure!(
        to != T::NullAccount::get(),
        Error::<T>::InvalidRecipient
      );

      UsedNonce::<T>::insert(&signer, nonce);
      let relay = Self::account_id();
      T::Ledger::operator_send(&relay, &signer, &to, amount, &data, &[])?;
      if !fee.is_zero() {
        T::Ledger::operator_send(&relay, &signer, &submitter, fee, &[], &[])?;
      }

      log::debug!(
        target: LOG_TARGET,
        "settled signed transfer from {:?} (nonce {}) via {:?}",
        signer,
        nonce,
        submitter
      );
      Self::deposit_event(Event::TransferPreSigned {
        signer,
        to,
        submitter,
        amount,
        fee,
        nonce,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Relay operator account, also used as the message domain.
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Hash a signer must sign to authorize a transfer.
    pub fn delegation_digest(
      to: &T::AccountId,
      delegate: &Option<T::AccountId>,
      amount: T::Balance,
      fee: T::Balance,
      nonce: u64,
      data: &DataOf<T>,
    ) -> [u8; 32] {
      (Self::account_id(), to, delegate, amount, fee, nonce, data).using_encoded(blake2_256)
    }

    fn recover_signer(
      signature: &[u8; 65],
      digest: &[u8; 32],
    ) -> Result<T::AccountId, DispatchError> {
      let mut normalized = *signature;
      normalized[64] = match signature[64] {
        v @ (0 | 1) => v,
        v @ (27 | 28) => v - 27,
        _ => return Err(Error::<T>::SignatureComponentOutOfRange.into()),
      };

      let public = secp256k1_ecdsa_recover_compressed(&normalized, digest)
        .map_err(|_| Error::<T>::InvalidSignature)?;
      let signer = T::Signer::from(ecdsa::Public::from_raw(public)).into_account();
      ensure!(
        signer != T::NullAccount::get(),
        Error::<T>::InvalidSignature
      );
      Ok(signer)
    }
  }
}
