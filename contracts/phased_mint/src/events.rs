use soroban_sdk::{symbol_short, Address, Env, Symbol};

const SALE: Symbol = symbol_short!("SALE");

pub fn initialized(env: &Env, admin: &Address, max_reservations: u32) {
    env.events().publish(
        (SALE, symbol_short!("INIT")),
        (admin.clone(), max_reservations),
    );
}

pub fn step_changed(env: &Env, previous: u32, step: u32) {
    env.events()
        .publish((SALE, symbol_short!("STEP")), (previous, step));
}

pub fn reserved(env: &Env, account: &Address, count: u32) {
    env.events()
        .publish((SALE, symbol_short!("RESERVE")), (account.clone(), count));
}

pub fn minted(env: &Env, to: &Address, id: u32, amount: i128) {
    env.events()
        .publish((SALE, symbol_short!("MINT")), (to.clone(), id, amount));
}

pub fn admin_changed(env: &Env, previous: &Address, admin: &Address) {
    env.events().publish(
        (SALE, symbol_short!("ADMIN")),
        (previous.clone(), admin.clone()),
    );
}

pub fn withdrawn(env: &Env, to: &Address, amount: i128) {
    env.events()
        .publish((SALE, symbol_short!("WITHDRAW")), (to.clone(), amount));
}
