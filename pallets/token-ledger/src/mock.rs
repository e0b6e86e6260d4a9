extern crate alloc;

use crate as pallet_token_ledger;
use core::cell::{Cell, RefCell};
use polkadot_sdk::frame_support::{
  construct_runtime, derive_impl,
  traits::{ConstU8, ConstU32, ConstU64},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError, DispatchResult,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{
  Capability,
  params::{DECIMALS, MAX_BATCH_SIZE, MAX_DATA_LENGTH},
};
use std::collections::{BTreeMap, BTreeSet};

type Block = frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;
pub type Balance = primitives::Balance;

pub const NULL: AccountId = 0;
pub const OWNER: AccountId = 1;
pub const ALICE: AccountId = 2;
pub const BOB: AccountId = 3;
pub const CHARLIE: AccountId = 4;
pub const DAVE: AccountId = 5;
pub const DEFAULT_OPERATOR: AccountId = 10;
pub const OFFICIAL_OPERATOR: AccountId = 20;
/// Code-bearing account that never registers a recipient hook.
pub const VAULT: AccountId = 30;
/// Hook implementer registered on behalf of other accounts.
pub const HOOK: AccountId = 40;

pub const SUPPLY_CAP: Balance = 1_000_000;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    TokenLedger: pallet_token_ledger,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HookKind {
  ToSend,
  Received,
}

/// What a hook saw when it ran.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HookCall {
  pub kind: HookKind,
  pub implementer: AccountId,
  pub operator: AccountId,
  pub from: AccountId,
  pub to: AccountId,
  pub amount: Balance,
  pub from_balance: Balance,
  pub to_balance: Balance,
}

thread_local! {
  static CONTRACTS: RefCell<BTreeSet<AccountId>> = RefCell::new(BTreeSet::from([OFFICIAL_OPERATOR, VAULT, HOOK]));
  static IMPLEMENTERS: RefCell<BTreeMap<(AccountId, Capability), AccountId>> = RefCell::new(BTreeMap::new());
  static HOOK_CALLS: RefCell<Vec<HookCall>> = RefCell::new(Vec::new());
  static REJECT_INCOMING: Cell<bool> = Cell::new(false);
  static REJECT_OUTGOING: Cell<bool> = Cell::new(false);
}

pub fn mark_contract(who: AccountId) {
  CONTRACTS.with(|c| c.borrow_mut().insert(who));
}

pub fn register_hook(account: AccountId, capability: Capability) {
  IMPLEMENTERS.with(|m| m.borrow_mut().insert((account, capability), HOOK));
}

pub fn hook_calls() -> Vec<HookCall> {
  HOOK_CALLS.with(|c| c.borrow().clone())
}

pub fn reject_incoming(reject: bool) {
  REJECT_INCOMING.with(|r| r.set(reject));
}

pub fn reject_outgoing(reject: bool) {
  REJECT_OUTGOING.with(|r| r.set(reject));
}

pub struct MockResolver;
impl pallet_token_ledger::CapabilityResolver<AccountId> for MockResolver {
  fn resolve(account: &AccountId, capability: Capability) -> Option<AccountId> {
    IMPLEMENTERS.with(|m| m.borrow().get(&(*account, capability)).copied())
  }
}

pub struct MockCode;
impl pallet_token_ledger::CodeInspect<AccountId> for MockCode {
  fn has_code(account: &AccountId) -> bool {
    CONTRACTS.with(|c| c.borrow().contains(account))
  }
}

pub struct MockHooks;

impl MockHooks {
  fn record(
    kind: HookKind,
    implementer: &AccountId,
    operator: &AccountId,
    from: &AccountId,
    to: &AccountId,
    amount: Balance,
  ) {
    let call = HookCall {
      kind,
      implementer: *implementer,
      operator: *operator,
      from: *from,
      to: *to,
      amount,
      from_balance: TokenLedger::balance_of(from),
      to_balance: TokenLedger::balance_of(to),
    };
    HOOK_CALLS.with(|c| c.borrow_mut().push(call));
  }
}

impl pallet_token_ledger::TokenHooks<AccountId, Balance> for MockHooks {
  fn tokens_to_send(
    implementer: &AccountId,
    operator: &AccountId,
    from: &AccountId,
    to: &AccountId,
    amount: Balance,
    _holder_data: &[u8],
    _operator_data: &[u8],
  ) -> DispatchResult {
    Self::record(HookKind::ToSend, implementer, operator, from, to, amount);
    if REJECT_OUTGOING.with(|r| r.get()) {
      return Err(DispatchError::Other("sender hook rejected"));
    }
    Ok(())
  }

  fn tokens_received(
    implementer: &AccountId,
    operator: &AccountId,
    from: &AccountId,
    to: &AccountId,
    amount: Balance,
    _holder_data: &[u8],
    _operator_data: &[u8],
  ) -> DispatchResult {
    Self::record(HookKind::Received, implementer, operator, from, to, amount);
    if REJECT_INCOMING.with(|r| r.get()) {
      return Err(DispatchError::Other("recipient hook rejected"));
    }
    Ok(())
  }
}

#[cfg(feature = "runtime-benchmarks")]
pub struct MockBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl pallet_token_ledger::BenchmarkHelper<AccountId> for MockBenchmarkHelper {
  fn mark_contract(who: &AccountId) {
    mark_contract(*who);
  }
}

impl pallet_token_ledger::Config for Test {
  type Balance = Balance;
  type NullAccount = ConstU64<{ NULL }>;
  type CapabilityResolver = MockResolver;
  type TokenHooks = MockHooks;
  type CodeInspector = MockCode;
  type MaxDataLength = ConstU32<{ MAX_DATA_LENGTH }>;
  type MaxBatchSize = ConstU32<{ MAX_BATCH_SIZE }>;
  type MaxDefaultOperators = ConstU32<4>;
  type MaxMetadataLength = ConstU32<32>;
  type Decimals = ConstU8<{ DECIMALS }>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = MockBenchmarkHelper;
}

pub struct ExtBuilder {
  granularity: Balance,
  supply_cap: Balance,
  balances: Vec<(AccountId, Balance)>,
}

impl Default for ExtBuilder {
  fn default() -> Self {
    Self {
      granularity: 1,
      supply_cap: SUPPLY_CAP,
      balances: alloc::vec![],
    }
  }
}

impl ExtBuilder {
  pub fn granularity(mut self, granularity: Balance) -> Self {
    self.granularity = granularity;
    self
  }

  pub fn supply_cap(mut self, supply_cap: Balance) -> Self {
    self.supply_cap = supply_cap;
    self
  }

  /// Balances minted by the owner once the ledger is built.
  pub fn balances(mut self, balances: Vec<(AccountId, Balance)>) -> Self {
    self.balances = balances;
    self
  }

  pub fn build(self) -> polkadot_sdk::sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default()
      .build_storage()
      .unwrap();

    pallet_token_ledger::GenesisConfig::<Test> {
      owner: Some(OWNER),
      name: b"Ledger Token".to_vec(),
      symbol: b"LGT".to_vec(),
      granularity: self.granularity,
      supply_cap: self.supply_cap,
      default_operators: alloc::vec![DEFAULT_OPERATOR],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
    ext.execute_with(|| {
      System::set_block_number(1);
      for (who, amount) in self.balances {
        TokenLedger::mint(RuntimeOrigin::signed(OWNER), who, amount, Default::default()).unwrap();
      }
    });
    ext
  }
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  ExtBuilder::default()
    .balances(alloc::vec![(ALICE, 1_000), (BOB, 500)])
    .build()
}
