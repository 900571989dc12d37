use crate::errors::Error;
use crate::events;
use crate::interfaces::{MembershipOracleClient, TokenLedgerClient};
use crate::phase::{require_sale_open, stage_of, validate_step};
use crate::reservation::reserve_slot;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, BytesN, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Phased whitelist reservation and proof-gated mint sale"
);

#[contract]
pub struct PhasedMintContract;

#[contractimpl]
impl PhasedMintContract {
    /// Initialize the sale. The step starts at 0 with no reservations.
    pub fn initialize(env: Env, admin: Address, config: SaleConfig) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if config.reservation_price <= 0
            || config.max_reservations == 0
            || config.max_token_id == 0
            || config.mint_amount <= 0
        {
            return Err(Error::InvalidConfig);
        }

        set_config(&env, &config);
        set_admin(&env, &admin);
        set_step(&env, 0);
        set_reservation_count(&env, 0);

        events::initialized(&env, &admin, config.max_reservations);
        Ok(())
    }

    /// Move the sale to `step`. Any step in 0..=7 is reachable from any other.
    pub fn set_step(env: Env, caller: Address, step: u32) -> Result<(), Error> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        validate_step(step)?;

        let previous = get_step(&env);
        set_step(&env, step);

        events::step_changed(&env, previous, step);
        Ok(())
    }

    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        caller.require_auth();
        require_admin(&env, &caller)?;

        set_admin(&env, &new_admin);
        events::admin_changed(&env, &caller, &new_admin);
        Ok(())
    }

    /// Reserve a whitelist slot for `caller`, paying `payment` in the sale's
    /// payment token. Returns the reservation count after this slot.
    pub fn reserve(env: Env, caller: Address, payment: i128) -> Result<u32, Error> {
        caller.require_auth();
        let config = get_config(&env)?;

        let count = reserve_slot(&env, &config, &caller, payment)?;

        let payment_client = token::Client::new(&env, &config.payment_token);
        payment_client.transfer(&caller, &env.current_contract_address(), &payment);

        events::reserved(&env, &caller, count);
        Ok(count)
    }

    /// Mint `id` to `caller` once the sale is open and the oracle accepts
    /// `proof`.
    pub fn mint(env: Env, caller: Address, id: u32, proof: Vec<BytesN<32>>) -> Result<(), Error> {
        caller.require_auth();
        let config = get_config(&env)?;

        require_sale_open(get_step(&env))?;
        if id == 0 || id > config.max_token_id {
            return Err(Error::NonexistentId);
        }

        let oracle = MembershipOracleClient::new(&env, &config.membership_oracle);
        if !oracle.verify(&id, &caller, &proof) {
            return Err(Error::ProofInvalid);
        }

        let ledger = TokenLedgerClient::new(&env, &config.token_ledger);
        ledger.mint(&caller, &id, &config.mint_amount);

        events::minted(&env, &caller, id, config.mint_amount);
        Ok(())
    }

    /// Send every collected reservation payment to `to`.
    pub fn withdraw(env: Env, caller: Address, to: Address) -> Result<i128, Error> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        let config = get_config(&env)?;

        let payment_client = token::Client::new(&env, &config.payment_token);
        let contract_address = env.current_contract_address();
        let balance = payment_client.balance(&contract_address);
        if balance > 0 {
            payment_client.transfer(&contract_address, &to, &balance);
            events::withdrawn(&env, &to, balance);
        }
        Ok(balance)
    }

    // View functions
    pub fn get_step(env: Env) -> u32 {
        get_step(&env)
    }

    pub fn get_stage(env: Env) -> SaleStage {
        stage_of(get_step(&env))
    }

    pub fn has_reserved(env: Env, account: Address) -> bool {
        is_reserved(&env, &account)
    }

    pub fn reservation_count(env: Env) -> u32 {
        get_reservation_count(&env)
    }

    pub fn max_reservations(env: Env) -> Result<u32, Error> {
        Ok(get_config(&env)?.max_reservations)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        get_admin(&env)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }
}
