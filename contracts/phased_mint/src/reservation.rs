use crate::errors::Error;
use crate::phase::require_reservation_open;
use crate::storage::*;
use crate::types::SaleConfig;
use soroban_sdk::{Address, Env};

/// Claims a whitelist slot for `account` and returns the new reservation count.
///
/// Guards run in a fixed order (step, payment, duplicate, capacity) so the
/// surfaced error is stable when several preconditions fail at once. Nothing
/// is written unless every guard passes.
pub fn reserve_slot(
    env: &Env,
    config: &SaleConfig,
    account: &Address,
    payment: i128,
) -> Result<u32, Error> {
    require_reservation_open(get_step(env))?;

    if payment < config.reservation_price {
        return Err(Error::InsufficientPayment);
    }
    if is_reserved(env, account) {
        return Err(Error::AlreadyReserved);
    }

    let count = get_reservation_count(env);
    if count >= config.max_reservations {
        return Err(Error::CapacityExceeded);
    }

    let count = count + 1;
    set_reserved(env, account);
    set_reservation_count(env, count);
    Ok(count)
}
