#![allow(dead_code)]

use phased_mint::{PhasedMintContract, PhasedMintContractClient, SaleConfig};
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Events as _},
    token, vec, Address, BytesN, Env, Symbol, TryFromVal, Val, Vec,
};

pub const RESERVATION_PRICE: i128 = 1_000; // 0.0001 of a 7-decimal asset
pub const MAX_TOKEN_ID: u32 = 21;
pub const STARTING_BALANCE: i128 = 1_000_000;

#[contracttype]
pub enum MockKey {
    Balance(Address, u32),
    Allowed(u32, Address),
}

/// Records mints so tests can assert on balances.
#[contract]
pub struct MockTokenLedger;

#[contractimpl]
impl MockTokenLedger {
    pub fn mint(env: Env, to: Address, id: u32, amount: i128) {
        let key = MockKey::Balance(to, id);
        let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        env.storage().persistent().set(&key, &(balance + amount));
    }

    pub fn balance(env: Env, owner: Address, id: u32) -> i128 {
        env.storage()
            .persistent()
            .get(&MockKey::Balance(owner, id))
            .unwrap_or(0)
    }
}

/// Accepts a non-empty proof from any (id, account) pair that was allowed.
#[contract]
pub struct MockMembershipOracle;

#[contractimpl]
impl MockMembershipOracle {
    pub fn allow(env: Env, id: u32, account: Address) {
        env.storage()
            .persistent()
            .set(&MockKey::Allowed(id, account), &true);
    }

    pub fn verify(env: Env, id: u32, account: Address, proof: Vec<BytesN<32>>) -> bool {
        let allowed: bool = env
            .storage()
            .persistent()
            .get(&MockKey::Allowed(id, account))
            .unwrap_or(false);
        allowed && !proof.is_empty()
    }
}

pub struct SaleTest<'a> {
    pub env: &'a Env,
    pub contract_id: Address,
    pub client: PhasedMintContractClient<'a>,
    pub admin: Address,
    pub ledger: MockTokenLedgerClient<'a>,
    pub oracle: MockMembershipOracleClient<'a>,
    pub payment: token::Client<'a>,
    pub payment_admin: token::StellarAssetClient<'a>,
}

impl<'a> SaleTest<'a> {
    /// A funded participant.
    pub fn participant(&self) -> Address {
        let user = Address::generate(self.env);
        self.payment_admin.mint(&user, &STARTING_BALANCE);
        user
    }
}

pub fn sale_config(
    ledger: &Address,
    oracle: &Address,
    payment_token: &Address,
    max_reservations: u32,
) -> SaleConfig {
    SaleConfig {
        token_ledger: ledger.clone(),
        membership_oracle: oracle.clone(),
        payment_token: payment_token.clone(),
        reservation_price: RESERVATION_PRICE,
        max_reservations,
        max_token_id: MAX_TOKEN_ID,
        mint_amount: 1,
    }
}

/// Registers the sale alongside a mock ledger, a mock oracle and a Stellar
/// asset used for reservation payments, then initializes the sale.
pub fn setup_sale(env: &Env, max_reservations: u32) -> SaleTest<'_> {
    env.mock_all_auths();

    let admin = Address::generate(env);

    let ledger_id = env.register_contract(None, MockTokenLedger);
    let oracle_id = env.register_contract(None, MockMembershipOracle);
    let payment_id = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();

    let contract_id = env.register_contract(None, PhasedMintContract);
    let client = PhasedMintContractClient::new(env, &contract_id);
    client.initialize(
        &admin,
        &sale_config(&ledger_id, &oracle_id, &payment_id, max_reservations),
    );

    SaleTest {
        env,
        contract_id,
        client,
        admin,
        ledger: MockTokenLedgerClient::new(env, &ledger_id),
        oracle: MockMembershipOracleClient::new(env, &oracle_id),
        payment: token::Client::new(env, &payment_id),
        payment_admin: token::StellarAssetClient::new(env, &payment_id),
    }
}

pub fn proof(env: &Env) -> Vec<BytesN<32>> {
    vec![env, BytesN::from_array(env, &[0x30; 32])]
}

/// Payload of the most recent `("SALE", action)` event published by `contract`.
pub fn last_sale_event(env: &Env, contract: &Address, action: &str) -> Option<Val> {
    let sale = Symbol::new(env, "SALE");
    let action = Symbol::new(env, action);
    let mut found = None;

    for event in env.events().all().iter() {
        if event.0 != *contract || event.1.len() != 2 {
            continue;
        }
        let namespace = match Symbol::try_from_val(env, &event.1.get(0).unwrap()) {
            Ok(symbol) => symbol,
            Err(_) => continue,
        };
        let kind = match Symbol::try_from_val(env, &event.1.get(1).unwrap()) {
            Ok(symbol) => symbol,
            Err(_) => continue,
        };
        if namespace == sale && kind == action {
            found = Some(event.2);
        }
    }

    found
}
