//! Ledger-wide constants.
//!
//! Pallet identifiers and token parameters shared by the pallets and by any runtime wiring them.

/// Balance type alias for consistency across the workspace
pub type Balance = u128;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// Used with `PalletId::into_account_truncating()`; the delegated-transfer account doubles as the
/// domain separator of every signed delegation.
pub mod pallet_ids {
  /// Delegated transfer pallet ID (signature-authorized operator)
  pub const DELEGATED_TRANSFER_PALLET_ID: &[u8; 8] = b"py/dlgtx";
}

/// Token parameters.
pub mod params {
  use super::Balance;

  /// Decimal places advertised on the ERC20-compatible surface.
  pub const DECIMALS: u8 = 18;

  /// One whole token in base units.
  pub const UNIT: Balance = 1_000_000_000_000_000_000;

  /// Default smallest indivisible amount.
  pub const DEFAULT_GRANULARITY: Balance = 1;

  /// Default hard cap on total supply (one billion whole tokens).
  pub const DEFAULT_SUPPLY_CAP: Balance = 1_000_000_000 * UNIT;

  /// Upper bound on user/operator data attached to a movement.
  pub const MAX_DATA_LENGTH: u32 = 1024;

  /// Upper bound on legs in a single batch call.
  pub const MAX_BATCH_SIZE: u32 = 256;
}
