pub mod contract;
pub mod cost;
pub mod error;
pub mod execute;
pub mod expand;
pub mod helpers;
pub mod query;
pub mod state;
