#![allow(clippy::derive_partial_eq_without_eq)]

mod coin;
mod conversion;
mod error;
mod genesis;
pub mod msg;
mod msg_fee;
mod params;
mod tx;

pub use coin::*;
pub use conversion::*;
pub use error::*;
pub use genesis::*;
pub use msg_fee::*;
pub use params::*;
pub use tx::*;
