#![cfg(feature = "runtime-benchmarks")]

extern crate alloc;

use crate::*;
use alloc::vec::Vec;
use frame::deps::sp_runtime::traits::{Bounded, Saturating};
use frame::prelude::*;
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_system::RawOrigin;

const SEED: u32 = 0;

fn setup_owner<T: Config>() -> T::AccountId {
  let owner: T::AccountId = account("owner", 0, SEED);
  Owner::<T>::put(Ownership::new(owner.clone()));
  owner
}

fn funded<T: Config>(name: &'static str, amount: u32) -> T::AccountId {
  let who: T::AccountId = account(name, 0, SEED);
  let amount: T::Balance = amount.into();
  TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
  Balances::<T>::insert(&who, amount);
  who
}

fn open_ledger<T: Config>() {
  Granularity::<T>::put(T::Balance::from(1u32));
  SupplyCap::<T>::put(T::Balance::max_value());
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn mint() {
    open_ledger::<T>();
    let owner = setup_owner::<T>();
    let to: T::AccountId = account("to", 0, SEED);

    #[extrinsic_call]
    mint(RawOrigin::Signed(owner), to.clone(), 1_000u32.into(), DataOf::<T>::default());

    assert_eq!(Balances::<T>::get(&to), 1_000u32.into());
  }

  #[benchmark]
  fn transfer() {
    open_ledger::<T>();
    let from = funded::<T>("from", 1_000);
    let to: T::AccountId = account("to", 0, SEED);

    #[extrinsic_call]
    transfer(RawOrigin::Signed(from), to.clone(), 100u32.into());

    assert_eq!(Balances::<T>::get(&to), 100u32.into());
  }

  #[benchmark]
  fn send() {
    open_ledger::<T>();
    let from = funded::<T>("from", 1_000);
    let to: T::AccountId = account("to", 0, SEED);

    #[extrinsic_call]
    send(RawOrigin::Signed(from), to.clone(), 100u32.into(), DataOf::<T>::default());

    assert_eq!(Balances::<T>::get(&to), 100u32.into());
  }

  #[benchmark]
  fn operator_send() {
    open_ledger::<T>();
    let holder = funded::<T>("holder", 1_000);
    let operator: T::AccountId = account("operator", 0, SEED);
    let to: T::AccountId = account("to", 0, SEED);
    AuthorizedOperators::<T>::insert(&holder, &operator, ());

    #[extrinsic_call]
    operator_send(
      RawOrigin::Signed(operator),
      holder,
      to.clone(),
      100u32.into(),
      DataOf::<T>::default(),
      DataOf::<T>::default(),
    );

    assert_eq!(Balances::<T>::get(&to), 100u32.into());
  }

  #[benchmark]
  fn burn() {
    open_ledger::<T>();
    let from = funded::<T>("from", 1_000);

    #[extrinsic_call]
    burn(RawOrigin::Signed(from.clone()), 100u32.into(), DataOf::<T>::default());

    assert_eq!(Balances::<T>::get(&from), 900u32.into());
  }

  #[benchmark]
  fn operator_burn() {
    open_ledger::<T>();
    let holder = funded::<T>("holder", 1_000);
    let operator: T::AccountId = account("operator", 0, SEED);
    AuthorizedOperators::<T>::insert(&holder, &operator, ());

    #[extrinsic_call]
    operator_burn(
      RawOrigin::Signed(operator),
      holder.clone(),
      100u32.into(),
      DataOf::<T>::default(),
      DataOf::<T>::default(),
    );

    assert_eq!(Balances::<T>::get(&holder), 900u32.into());
  }

  #[benchmark]
  fn approve() {
    let holder: T::AccountId = account("holder", 0, SEED);
    let spender: T::AccountId = account("spender", 0, SEED);

    #[extrinsic_call]
    approve(RawOrigin::Signed(holder.clone()), spender.clone(), 100u32.into());

    assert_eq!(Allowances::<T>::get(&holder, &spender), 100u32.into());
  }

  #[benchmark]
  fn transfer_from() {
    open_ledger::<T>();
    let holder = funded::<T>("holder", 1_000);
    let spender: T::AccountId = account("spender", 0, SEED);
    let to: T::AccountId = account("to", 0, SEED);
    Allowances::<T>::insert(&holder, &spender, T::Balance::from(500u32));

    #[extrinsic_call]
    transfer_from(RawOrigin::Signed(spender), holder, to.clone(), 100u32.into());

    assert_eq!(Balances::<T>::get(&to), 100u32.into());
  }

  #[benchmark]
  fn authorize_operator() {
    let holder: T::AccountId = account("holder", 0, SEED);
    let operator: T::AccountId = account("operator", 0, SEED);

    #[extrinsic_call]
    authorize_operator(RawOrigin::Signed(holder.clone()), operator.clone());

    assert!(Pallet::<T>::is_operator_for(&operator, &holder));
  }

  #[benchmark]
  fn revoke_operator() {
    let holder: T::AccountId = account("holder", 0, SEED);
    let operator: T::AccountId = account("operator", 0, SEED);
    AuthorizedOperators::<T>::insert(&holder, &operator, ());

    #[extrinsic_call]
    revoke_operator(RawOrigin::Signed(holder.clone()), operator.clone());

    assert!(!Pallet::<T>::is_operator_for(&operator, &holder));
  }

  #[benchmark]
  fn add_official_operator() {
    let owner = setup_owner::<T>();
    let operator: T::AccountId = account("official", 0, SEED);
    T::BenchmarkHelper::mark_contract(&operator);

    #[extrinsic_call]
    add_official_operator(RawOrigin::Signed(owner), operator.clone());

    assert!(Pallet::<T>::is_official_operator(&operator));
  }

  #[benchmark]
  fn remove_official_operator() {
    let owner = setup_owner::<T>();
    let operator: T::AccountId = account("official", 0, SEED);
    T::BenchmarkHelper::mark_contract(&operator);
    OfficialOperators::<T>::insert(&operator, ());

    #[extrinsic_call]
    remove_official_operator(RawOrigin::Signed(owner), operator.clone());

    assert!(!Pallet::<T>::is_official_operator(&operator));
  }

  #[benchmark]
  fn accept_all_official_operators() {
    let holder: T::AccountId = account("holder", 0, SEED);
    RejectsOfficialOperators::<T>::insert(&holder, ());

    #[extrinsic_call]
    accept_all_official_operators(RawOrigin::Signed(holder.clone()));

    assert!(Pallet::<T>::is_accepting_official_operators(&holder));
  }

  #[benchmark]
  fn reject_all_official_operators() {
    let holder: T::AccountId = account("holder", 0, SEED);

    #[extrinsic_call]
    reject_all_official_operators(RawOrigin::Signed(holder.clone()));

    assert!(!Pallet::<T>::is_accepting_official_operators(&holder));
  }

  #[benchmark]
  fn freeze() {
    let owner = setup_owner::<T>();
    let who: T::AccountId = account("who", 0, SEED);

    #[extrinsic_call]
    freeze(RawOrigin::Signed(owner), who.clone());

    assert!(Pallet::<T>::is_frozen(&who));
  }

  #[benchmark]
  fn unfreeze() {
    let owner = setup_owner::<T>();
    let who: T::AccountId = account("who", 0, SEED);
    Frozen::<T>::insert(&who, ());

    #[extrinsic_call]
    unfreeze(RawOrigin::Signed(owner), who.clone());

    assert!(!Pallet::<T>::is_frozen(&who));
  }

  #[benchmark]
  fn freeze_my_account() {
    let who: T::AccountId = account("who", 0, SEED);

    #[extrinsic_call]
    freeze_my_account(RawOrigin::Signed(who.clone()));

    assert!(Pallet::<T>::is_frozen(&who));
  }

  #[benchmark]
  fn transfer_from_frozen_account() {
    open_ledger::<T>();
    let owner = setup_owner::<T>();
    let holder = funded::<T>("holder", 1_000);
    let to: T::AccountId = account("to", 0, SEED);
    Frozen::<T>::insert(&holder, ());

    #[extrinsic_call]
    transfer_from_frozen_account(RawOrigin::Signed(owner), holder, to.clone(), 100u32.into());

    assert_eq!(Balances::<T>::get(&to), 100u32.into());
  }

  #[benchmark]
  fn pause() {
    let owner = setup_owner::<T>();

    #[extrinsic_call]
    pause(RawOrigin::Signed(owner));

    assert!(Paused::<T>::get());
  }

  #[benchmark]
  fn unpause() {
    let owner = setup_owner::<T>();
    Paused::<T>::put(true);

    #[extrinsic_call]
    unpause(RawOrigin::Signed(owner));

    assert!(!Paused::<T>::get());
  }

  #[benchmark]
  fn batch_transfer(n: Linear<1, { T::MaxBatchSize::get() }>) {
    open_ledger::<T>();
    let from = funded::<T>("from", 1_000_000);
    let to: Vec<T::AccountId> = (0..n).map(|i| account("to", i, SEED)).collect();
    let amounts: Vec<T::Balance> = (0..n).map(|_| 10u32.into()).collect();
    let recipients = RecipientsOf::<T>::truncate_from(to);
    let amounts = AmountsOf::<T>::truncate_from(amounts);

    #[extrinsic_call]
    batch_transfer(RawOrigin::Signed(from), recipients, amounts);
  }

  #[benchmark]
  fn batch_send(n: Linear<1, { T::MaxBatchSize::get() }>) {
    open_ledger::<T>();
    let from = funded::<T>("from", 1_000_000);
    let to: Vec<T::AccountId> = (0..n).map(|i| account("to", i, SEED)).collect();
    let amounts: Vec<T::Balance> = (0..n).map(|_| 10u32.into()).collect();
    let recipients = RecipientsOf::<T>::truncate_from(to);
    let amounts = AmountsOf::<T>::truncate_from(amounts);

    #[extrinsic_call]
    batch_send(
      RawOrigin::Signed(from),
      recipients,
      amounts,
      DataOf::<T>::default(),
    );
  }

  #[benchmark]
  fn operator_batch_send(n: Linear<1, { T::MaxBatchSize::get() }>) {
    open_ledger::<T>();
    let holder = funded::<T>("holder", 1_000_000);
    let operator: T::AccountId = account("operator", 0, SEED);
    AuthorizedOperators::<T>::insert(&holder, &operator, ());
    let to: Vec<T::AccountId> = (0..n).map(|i| account("to", i, SEED)).collect();
    let amounts: Vec<T::Balance> = (0..n).map(|_| 10u32.into()).collect();
    let recipients = RecipientsOf::<T>::truncate_from(to);
    let amounts = AmountsOf::<T>::truncate_from(amounts);

    #[extrinsic_call]
    operator_batch_send(
      RawOrigin::Signed(operator),
      holder,
      recipients,
      amounts,
      DataOf::<T>::default(),
      DataOf::<T>::default(),
    );
  }

  #[benchmark]
  fn transfer_ownership() {
    let owner = setup_owner::<T>();
    let next: T::AccountId = account("next", 0, SEED);

    #[extrinsic_call]
    transfer_ownership(RawOrigin::Signed(owner), next.clone());

    assert_eq!(Pallet::<T>::pending_owner(), Some(next));
  }

  #[benchmark]
  fn claim_ownership() {
    let owner = setup_owner::<T>();
    let next: T::AccountId = account("next", 0, SEED);
    Owner::<T>::put(Ownership {
      current: Some(owner),
      pending: Some(next.clone()),
    });

    #[extrinsic_call]
    claim_ownership(RawOrigin::Signed(next.clone()));

    assert_eq!(Pallet::<T>::owner(), Some(next));
  }

  #[benchmark]
  fn renounce_ownership() {
    let owner = setup_owner::<T>();

    #[extrinsic_call]
    renounce_ownership(RawOrigin::Signed(owner));

    assert_eq!(Pallet::<T>::owner(), None);
  }

  #[benchmark]
  fn operator_approve() {
    let holder: T::AccountId = account("holder", 0, SEED);
    let operator: T::AccountId = account("operator", 0, SEED);
    let spender: T::AccountId = account("spender", 0, SEED);
    AuthorizedOperators::<T>::insert(&holder, &operator, ());

    #[extrinsic_call]
    operator_approve(
      RawOrigin::Signed(operator),
      holder.clone(),
      spender.clone(),
      100u32.into(),
    );

    assert_eq!(Allowances::<T>::get(&holder, &spender), 100u32.into());
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
