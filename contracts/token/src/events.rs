use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub const EVENT_MINT: Symbol = symbol_short!("mint");
pub const EVENT_TRANSFER: Symbol = symbol_short!("transfer");
pub const EVENT_APPROVE: Symbol = symbol_short!("approve");
pub const EVENT_SET_ADMIN: Symbol = symbol_short!("set_admin");
pub const EVENT_PAUSED: Symbol = symbol_short!("paused");
pub const EVENT_UNPAUSED: Symbol = symbol_short!("unpaused");

pub fn mint(env: &Env, admin: &Address, to: &Address, amount: i128) {
    env.events()
        .publish((EVENT_MINT, admin.clone(), to.clone()), amount);
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events()
        .publish((EVENT_TRANSFER, from.clone(), to.clone()), amount);
}

pub fn approve(env: &Env, from: &Address, spender: &Address, amount: i128, expiration_ledger: u32) {
    env.events().publish(
        (EVENT_APPROVE, from.clone(), spender.clone()),
        (amount, expiration_ledger),
    );
}

pub fn set_admin(env: &Env, previous: &Address, admin: &Address) {
    env.events()
        .publish((EVENT_SET_ADMIN, previous.clone()), admin.clone());
}

pub fn paused(env: &Env, admin: &Address, paused: bool) {
    let topic = if paused { EVENT_PAUSED } else { EVENT_UNPAUSED };
    env.events().publish((topic, admin.clone()), ());
}
