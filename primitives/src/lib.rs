#![cfg_attr(not(feature = "std"), no_std)]

pub mod arithmetic;
pub mod capability;
pub mod ecosystem;

pub use arithmetic::*;
pub use capability::*;
pub use ecosystem::*;
