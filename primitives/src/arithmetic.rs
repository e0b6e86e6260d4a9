//! Checked arithmetic for ledger amounts.
//!
//! Every balance, supply and allowance mutation is routed through [`Guarded`]. The operations
//! never wrap: each one either yields an exact result or reports the [`ArithmeticError`] that
//! prevented it, which the runtime surfaces as `DispatchError::Arithmetic`.

use core::ops::Rem;
use sp_arithmetic::{
  ArithmeticError,
  traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero},
};

/// Overflow/underflow/division-by-zero aware arithmetic over unsigned amounts.
pub trait Guarded:
  Sized + Copy + Zero + CheckedAdd + CheckedSub + CheckedMul + CheckedDiv + Rem<Output = Self>
{
  fn guarded_add(self, rhs: Self) -> Result<Self, ArithmeticError> {
    self.checked_add(&rhs).ok_or(ArithmeticError::Overflow)
  }

  fn guarded_sub(self, rhs: Self) -> Result<Self, ArithmeticError> {
    self.checked_sub(&rhs).ok_or(ArithmeticError::Underflow)
  }

  fn guarded_mul(self, rhs: Self) -> Result<Self, ArithmeticError> {
    self.checked_mul(&rhs).ok_or(ArithmeticError::Overflow)
  }

  fn guarded_div(self, rhs: Self) -> Result<Self, ArithmeticError> {
    if rhs.is_zero() {
      return Err(ArithmeticError::DivisionByZero);
    }
    self.checked_div(&rhs).ok_or(ArithmeticError::Overflow)
  }

  fn guarded_rem(self, rhs: Self) -> Result<Self, ArithmeticError> {
    if rhs.is_zero() {
      return Err(ArithmeticError::DivisionByZero);
    }
    Ok(self % rhs)
  }

  /// Largest multiple of `unit` not greater than `self`.
  fn round_down_to(self, unit: Self) -> Result<Self, ArithmeticError> {
    self.guarded_sub(self.guarded_rem(unit)?)
  }

  fn divisible_by(self, unit: Self) -> Result<bool, ArithmeticError> {
    Ok(self.guarded_rem(unit)?.is_zero())
  }
}

impl<T> Guarded for T where
  T: Sized + Copy + Zero + CheckedAdd + CheckedSub + CheckedMul + CheckedDiv + Rem<Output = T>
{
}
