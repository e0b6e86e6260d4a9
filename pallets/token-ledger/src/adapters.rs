//! Collaborator traits for the token ledger
//!
//! The ledger talks to three runtime-provided services: a capability registry telling which
//! account implements a hook on behalf of another, the hooks themselves, and an inspector that
//! reports whether an address carries code. `()` stands for "nothing registered, no code".

use frame::prelude::*;
use primitives::Capability;

/// Capability ("interface implementer") lookup.
pub trait CapabilityResolver<AccountId> {
  /// Account implementing `capability` on behalf of `account`, if any.
  fn resolve(account: &AccountId, capability: Capability) -> Option<AccountId>;
}

impl<AccountId> CapabilityResolver<AccountId> for () {
  fn resolve(_account: &AccountId, _capability: Capability) -> Option<AccountId> {
    None
  }
}

/// Notification hooks invoked after a movement has been fully applied.
///
/// `implementer` is the account returned by the [`CapabilityResolver`]. Any error aborts the
/// whole call, reverting the movement.
pub trait TokenHooks<AccountId, Balance> {
  fn tokens_to_send(
    implementer: &AccountId,
    operator: &AccountId,
    from: &AccountId,
    to: &AccountId,
    amount: Balance,
    holder_data: &[u8],
    operator_data: &[u8],
  ) -> DispatchResult;

  fn tokens_received(
    implementer: &AccountId,
    operator: &AccountId,
    from: &AccountId,
    to: &AccountId,
    amount: Balance,
    holder_data: &[u8],
    operator_data: &[u8],
  ) -> DispatchResult;
}

impl<AccountId, Balance> TokenHooks<AccountId, Balance> for () {
  fn tokens_to_send(
    _implementer: &AccountId,
    _operator: &AccountId,
    _from: &AccountId,
    _to: &AccountId,
    _amount: Balance,
    _holder_data: &[u8],
    _operator_data: &[u8],
  ) -> DispatchResult {
    Ok(())
  }

  fn tokens_received(
    _implementer: &AccountId,
    _operator: &AccountId,
    _from: &AccountId,
    _to: &AccountId,
    _amount: Balance,
    _holder_data: &[u8],
    _operator_data: &[u8],
  ) -> DispatchResult {
    Ok(())
  }
}

/// Code-presence inspection.
pub trait CodeInspect<AccountId> {
  fn has_code(account: &AccountId) -> bool;
}

impl<AccountId> CodeInspect<AccountId> for () {
  fn has_code(_account: &AccountId) -> bool {
    false
  }
}
