use crate as pallet_delegated_transfer;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{ConstU8, ConstU32, ConstU64},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_core::{Pair, ecdsa};
use polkadot_sdk::sp_io::hashing::blake2_256;
use polkadot_sdk::sp_keystore::{KeystoreExt, testing::MemoryKeystore};
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  testing::H256,
  traits::{BlakeTwo256, IdentifyAccount, IdentityLookup},
};
use primitives::{
  pallet_ids::DELEGATED_TRANSFER_PALLET_ID,
  params::{DECIMALS, MAX_BATCH_SIZE, MAX_DATA_LENGTH},
};

type Block = frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;
pub type Balance = primitives::Balance;

pub const NULL: AccountId = 0;
pub const OWNER: AccountId = 1;
pub const BOB: AccountId = 3;
pub const CHARLIE: AccountId = 4;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    TokenLedger: pallet_token_ledger,
    DelegatedTransfer: pallet_delegated_transfer,
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

impl pallet_token_ledger::Config for Test {
  type Balance = Balance;
  type NullAccount = ConstU64<{ NULL }>;
  type CapabilityResolver = ();
  type TokenHooks = ();
  type CodeInspector = ();
  type MaxDataLength = ConstU32<{ MAX_DATA_LENGTH }>;
  type MaxBatchSize = ConstU32<{ MAX_BATCH_SIZE }>;
  type MaxDefaultOperators = ConstU32<4>;
  type MaxMetadataLength = ConstU32<32>;
  type Decimals = ConstU8<{ DECIMALS }>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = ();
}

/// Derives a `u64` account from a compressed secp256k1 key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TestSigner(pub ecdsa::Public);

impl From<ecdsa::Public> for TestSigner {
  fn from(public: ecdsa::Public) -> Self {
    Self(public)
  }
}

impl IdentifyAccount for TestSigner {
  type AccountId = AccountId;

  fn into_account(self) -> AccountId {
    let hash = blake2_256(self.0.as_ref());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash[..8]);
    u64::from_le_bytes(bytes)
  }
}

pub struct DelegatedTransferPalletId;
impl polkadot_sdk::frame_support::traits::Get<PalletId> for DelegatedTransferPalletId {
  fn get() -> PalletId {
    PalletId(*DELEGATED_TRANSFER_PALLET_ID)
  }
}

impl pallet_delegated_transfer::Config for Test {
  type Balance = Balance;
  type Ledger = TokenLedger;
  type Signer = TestSigner;
  type PalletId = DelegatedTransferPalletId;
  type NullAccount = ConstU64<{ NULL }>;
  type MaxDataLength = ConstU32<{ MAX_DATA_LENGTH }>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = TokenLedger;
}

pub fn alice_pair() -> ecdsa::Pair {
  ecdsa::Pair::from_seed(&[7u8; 32])
}

pub fn account_of(pair: &ecdsa::Pair) -> AccountId {
  TestSigner(pair.public()).into_account()
}

/// Ledger with the signer funded and a keystore attached; the relay is not yet an operator.
pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  pallet_token_ledger::GenesisConfig::<Test> {
    owner: Some(OWNER),
    name: b"Ledger Token".to_vec(),
    symbol: b"LGT".to_vec(),
    granularity: 1,
    supply_cap: 1_000_000,
    default_operators: Default::default(),
  }
  .assimilate_storage(&mut t)
  .unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.register_extension(KeystoreExt::new(MemoryKeystore::new()));
  ext.execute_with(|| {
    System::set_block_number(1);
    TokenLedger::mint(
      RuntimeOrigin::signed(OWNER),
      account_of(&alice_pair()),
      1_000,
      Default::default(),
    )
    .unwrap();
  });
  ext
}
