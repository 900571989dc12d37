use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_step(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::Step).unwrap_or(0)
}

pub fn set_step(env: &Env, step: u32) {
    env.storage().instance().set(&DataKey::Step, &step);
}

pub fn get_reservation_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ReservationCount)
        .unwrap_or(0)
}

pub fn set_reservation_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::ReservationCount, &count);
}

pub fn is_reserved(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Reservation(account.clone()))
        .unwrap_or(false)
}

pub fn set_reserved(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Reservation(account.clone()), &true);
}

/// Fails with `Unauthorized` unless `caller` is the stored admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    if get_admin(env)? == *caller {
        Ok(())
    } else {
        Err(Error::Unauthorized)
    }
}
