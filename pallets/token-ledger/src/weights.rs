#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn mint() -> Weight;
	fn transfer() -> Weight;
	fn send() -> Weight;
	fn operator_send() -> Weight;
	fn burn() -> Weight;
	fn operator_burn() -> Weight;
	fn approve() -> Weight;
	fn transfer_from() -> Weight;
	fn authorize_operator() -> Weight;
	fn revoke_operator() -> Weight;
	fn add_official_operator() -> Weight;
	fn remove_official_operator() -> Weight;
	fn accept_all_official_operators() -> Weight;
	fn reject_all_official_operators() -> Weight;
	fn freeze() -> Weight;
	fn unfreeze() -> Weight;
	fn freeze_my_account() -> Weight;
	fn transfer_from_frozen_account() -> Weight;
	fn pause() -> Weight;
	fn unpause() -> Weight;
	fn batch_transfer(n: u32) -> Weight;
	fn batch_send(n: u32) -> Weight;
	fn operator_batch_send(n: u32) -> Weight;
	fn transfer_ownership() -> Weight;
	fn claim_ownership() -> Weight;
	fn renounce_ownership() -> Weight;
	fn operator_approve() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn mint() -> Weight {
		Weight::from_parts(50_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(5))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn transfer() -> Weight {
		Weight::from_parts(45_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(6))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn send() -> Weight {
		Weight::from_parts(45_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(6))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn operator_send() -> Weight {
		Weight::from_parts(55_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(9))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn burn() -> Weight {
		Weight::from_parts(40_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(5))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn operator_burn() -> Weight {
		Weight::from_parts(50_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(8))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn approve() -> Weight {
		Weight::from_parts(25_000_000, 2500)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn transfer_from() -> Weight {
		Weight::from_parts(55_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(7))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	fn authorize_operator() -> Weight {
		Weight::from_parts(20_000_000, 2500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn revoke_operator() -> Weight {
		Weight::from_parts(20_000_000, 2500)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn add_official_operator() -> Weight {
		Weight::from_parts(20_000_000, 2000)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn remove_official_operator() -> Weight {
		Weight::from_parts(20_000_000, 2000)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn accept_all_official_operators() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn reject_all_official_operators() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn freeze() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn unfreeze() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn freeze_my_account() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn transfer_from_frozen_account() -> Weight {
		Weight::from_parts(50_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(5))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn pause() -> Weight {
		Weight::from_parts(12_000_000, 1000)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn unpause() -> Weight {
		Weight::from_parts(12_000_000, 1000)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn batch_transfer(n: u32) -> Weight {
		Weight::from_parts(20_000_000, 3500)
			.saturating_add(Weight::from_parts(40_000_000, 0).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().reads(6_u64.saturating_mul(n.into())))
			.saturating_add(T::DbWeight::get().writes(2_u64.saturating_mul(n.into())))
	}
	fn batch_send(n: u32) -> Weight {
		Weight::from_parts(20_000_000, 3500)
			.saturating_add(Weight::from_parts(40_000_000, 0).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().reads(6_u64.saturating_mul(n.into())))
			.saturating_add(T::DbWeight::get().writes(2_u64.saturating_mul(n.into())))
	}
	fn operator_batch_send(n: u32) -> Weight {
		Weight::from_parts(25_000_000, 3500)
			.saturating_add(Weight::from_parts(40_000_000, 0).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(6))
			.saturating_add(T::DbWeight::get().reads(6_u64.saturating_mul(n.into())))
			.saturating_add(T::DbWeight::get().writes(2_u64.saturating_mul(n.into())))
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn claim_ownership() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn renounce_ownership() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn operator_approve() -> Weight {
		Weight::from_parts(30_000_000, 3000)
			.saturating_add(T::DbWeight::get().reads(7))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn mint() -> Weight {
		Weight::from_parts(50_000_000, 3500)
	}
	fn transfer() -> Weight {
		Weight::from_parts(45_000_000, 3500)
	}
	fn send() -> Weight {
		Weight::from_parts(45_000_000, 3500)
	}
	fn operator_send() -> Weight {
		Weight::from_parts(55_000_000, 3500)
	}
	fn burn() -> Weight {
		Weight::from_parts(40_000_000, 3500)
	}
	fn operator_burn() -> Weight {
		Weight::from_parts(50_000_000, 3500)
	}
	fn approve() -> Weight {
		Weight::from_parts(25_000_000, 2500)
	}
	fn transfer_from() -> Weight {
		Weight::from_parts(55_000_000, 3500)
	}
	fn authorize_operator() -> Weight {
		Weight::from_parts(20_000_000, 2500)
	}
	fn revoke_operator() -> Weight {
		Weight::from_parts(20_000_000, 2500)
	}
	fn add_official_operator() -> Weight {
		Weight::from_parts(20_000_000, 2000)
	}
	fn remove_official_operator() -> Weight {
		Weight::from_parts(20_000_000, 2000)
	}
	fn accept_all_official_operators() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn reject_all_official_operators() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn freeze() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn unfreeze() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn freeze_my_account() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn transfer_from_frozen_account() -> Weight {
		Weight::from_parts(50_000_000, 3500)
	}
	fn pause() -> Weight {
		Weight::from_parts(12_000_000, 1000)
	}
	fn unpause() -> Weight {
		Weight::from_parts(12_000_000, 1000)
	}
	fn batch_transfer(n: u32) -> Weight {
		Weight::from_parts(20_000_000, 3500)
			.saturating_add(Weight::from_parts(40_000_000, 0).saturating_mul(n.into()))
	}
	fn batch_send(n: u32) -> Weight {
		Weight::from_parts(20_000_000, 3500)
			.saturating_add(Weight::from_parts(40_000_000, 0).saturating_mul(n.into()))
	}
	fn operator_batch_send(n: u32) -> Weight {
		Weight::from_parts(25_000_000, 3500)
			.saturating_add(Weight::from_parts(40_000_000, 0).saturating_mul(n.into()))
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn claim_ownership() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn renounce_ownership() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn operator_approve() -> Weight {
		Weight::from_parts(30_000_000, 3000)
	}
}
