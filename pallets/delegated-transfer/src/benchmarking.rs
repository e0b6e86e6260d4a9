#![cfg(feature = "runtime-benchmarks")]

use crate::*;
use frame::deps::{
  sp_core::crypto::KeyTypeId,
  sp_runtime::traits::{IdentifyAccount, Saturating},
};
use frame::prelude::*;
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_system::RawOrigin;
use polkadot_sdk::sp_io::crypto::{ecdsa_generate, ecdsa_sign_prehashed};

const SEED: u32 = 0;
const SIGNER_KEY: KeyTypeId = KeyTypeId(*b"dlgt");

#[benchmarks]
mod benches {
  use super::*;

  // Worst case: a named delegate and both the amount and fee legs.
  #[benchmark]
  fn transfer_pre_signed() -> Result<(), BenchmarkError> {
    let public = ecdsa_generate(SIGNER_KEY, None);
    let signer = T::Signer::from(public).into_account();
    let to: T::AccountId = account("to", 0, SEED);
    let submitter: T::AccountId = whitelisted_caller();
    let amount: T::Balance = 1_000u32.into();
    let fee: T::Balance = 10u32.into();
    T::BenchmarkHelper::prepare_holder(
      &signer,
      &Pallet::<T>::account_id(),
      amount.saturating_add(fee),
    );

    let delegate = Some(submitter.clone());
    let data = DataOf::<T>::default();
    let digest = Pallet::<T>::delegation_digest(&to, &delegate, amount, fee, 1, &data);
    let signature = ecdsa_sign_prehashed(SIGNER_KEY, &public, &digest)
      .ok_or(BenchmarkError::Stop("no keystore to sign with"))?;

    #[extrinsic_call]
    transfer_pre_signed(
      RawOrigin::Signed(submitter),
      to,
      delegate,
      amount,
      fee,
      1,
      data,
      signature.0,
    );

    assert_eq!(UsedNonce::<T>::get(&signer), 1);
    Ok(())
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
