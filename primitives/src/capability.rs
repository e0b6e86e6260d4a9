use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Capabilities an account can register an implementer for.
///
/// The ledger only asks whether an implementer exists for a given account and, if so, where it
/// lives; how the registry stores these mappings is up to the runtime.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum Capability {
  /// Notified before tokens leave the account.
  TokensSender,
  /// Notified after tokens arrive at the account.
  TokensRecipient,
}
