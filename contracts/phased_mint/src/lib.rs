#![no_std]

mod contract;
mod errors;
mod events;
pub mod interfaces;
mod phase;
mod reservation;
mod storage;
mod types;

pub use contract::{PhasedMintContract, PhasedMintContractClient};
pub use errors::Error;
pub use interfaces::{MembershipOracleClient, TokenLedgerClient};
pub use types::{SaleConfig, SaleStage, MAX_STEP};
