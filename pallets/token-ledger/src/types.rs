use polkadot_sdk::frame_support::pallet_prelude::*;

/// Two-phase ownership record.
///
/// The current owner proposes a successor, which only takes over once it claims. Until then the
/// current owner keeps every privilege. A renounced record has neither owner nor successor and
/// can never be claimed again.
#[derive(Clone, Debug, Decode, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen)]
pub struct Ownership<AccountId> {
  pub current: Option<AccountId>,
  pub pending: Option<AccountId>,
}

impl<AccountId> Default for Ownership<AccountId> {
  fn default() -> Self {
    Self {
      current: None,
      pending: None,
    }
  }
}

impl<AccountId: PartialEq> Ownership<AccountId> {
  pub fn new(owner: AccountId) -> Self {
    Self {
      current: Some(owner),
      pending: None,
    }
  }

  pub fn is_owner(&self, who: &AccountId) -> bool {
    self.current.as_ref() == Some(who)
  }

  pub fn is_pending(&self, who: &AccountId) -> bool {
    self.pending.as_ref() == Some(who)
  }

  /// Promote the pending owner, returning the previous owner.
  pub fn claim(&mut self) -> Option<AccountId> {
    match self.pending.take() {
      Some(next) => self.current.replace(next),
      None => None,
    }
  }

  /// Drop both owner and successor, returning the previous owner.
  pub fn renounce(&mut self) -> Option<AccountId> {
    self.pending = None;
    self.current.take()
  }
}

/// How a balance movement treats the parties involved.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SendMode {
  /// ERC20-compatible movement: recipients without a hook are accepted as-is.
  Transfer,
  /// Operator-aware movement: recipients with code must register a recipient hook.
  Send,
  /// Owner recovery out of a frozen account: holder and operator freeze are not consulted.
  Recovery,
}

impl SendMode {
  pub fn prevents_locking(&self) -> bool {
    matches!(self, SendMode::Send)
  }

  pub fn checks_sender_freeze(&self) -> bool {
    !matches!(self, SendMode::Recovery)
  }
}
