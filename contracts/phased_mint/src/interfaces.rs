use soroban_sdk::{contractclient, Address, BytesN, Env, Vec};

/// Multi-token ledger the sale mints through. The sale contract must be an
/// authorized minter on it.
#[contractclient(name = "TokenLedgerClient")]
pub trait TokenLedger {
    fn mint(env: Env, to: Address, id: u32, amount: i128);
}

/// Answers whether `account` may mint `id` given `proof`. The proof format
/// belongs to the oracle.
#[contractclient(name = "MembershipOracleClient")]
pub trait MembershipOracle {
    fn verify(env: Env, id: u32, account: Address, proof: Vec<BytesN<32>>) -> bool;
}
