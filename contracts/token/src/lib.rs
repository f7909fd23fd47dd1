#![no_std]

//! Pausable, admin-minted fungible token sold by the crowdsale.
//!
//! Entry points keep the names and argument order of the standard Soroban token
//! interface, so the sale and distribution contracts drive it through
//! `soroban_sdk::token::{TokenClient, StellarAssetClient}`.

mod error;
mod events;
mod storage;

pub use error::{Error, ErrorKind};

use soroban_sdk::{contract, contractimpl, Address, Env, String};
use storage::{
    has_admin, is_paused, read_admin, read_allowance, read_balance, read_metadata,
    read_total_supply, receive_balance, spend_allowance, spend_balance, write_admin,
    write_allowance, write_metadata, write_paused, write_total_supply, TokenMetadata,
};

#[contract]
pub struct SaleToken;

fn require_admin_auth(env: &Env) -> Result<Address, Error> {
    let admin = read_admin(env)?;
    admin.require_auth();
    Ok(admin)
}

fn check_nonnegative_amount(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

fn require_unpaused(env: &Env) -> Result<(), Error> {
    if is_paused(env) {
        return Err(Error::Paused);
    }
    Ok(())
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    spend_balance(env, from, amount)?;
    receive_balance(env, to, amount)?;
    events::transfer(env, from, to, amount);
    Ok(())
}

#[contractimpl]
impl SaleToken {
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        decimals: u32,
    ) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        write_admin(&env, &admin);
        write_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        write_paused(&env, false);
        write_total_supply(&env, 0);
        Ok(())
    }

    /// Hands minting rights to a new admin, typically the crowdsale contract.
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        let admin = require_admin_auth(&env)?;
        write_admin(&env, &new_admin);
        events::set_admin(&env, &admin, &new_admin);
        Ok(())
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        read_admin(&env)
    }

    pub fn pause(env: Env) -> Result<(), Error> {
        let admin = require_admin_auth(&env)?;
        write_paused(&env, true);
        events::paused(&env, &admin, true);
        Ok(())
    }

    pub fn unpause(env: Env) -> Result<(), Error> {
        let admin = require_admin_auth(&env)?;
        write_paused(&env, false);
        events::paused(&env, &admin, false);
        Ok(())
    }

    pub fn paused(env: Env) -> bool {
        is_paused(&env)
    }

    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), Error> {
        check_nonnegative_amount(amount)?;
        let admin = require_admin_auth(&env)?;
        if is_paused(&env) {
            return Err(Error::MintingDisallowed);
        }

        let supply = read_total_supply(&env)
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        receive_balance(&env, &to, amount)?;
        write_total_supply(&env, supply);

        events::mint(&env, &admin, &to, amount);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        require_unpaused(&env)?;
        move_balance(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        check_nonnegative_amount(amount)?;
        require_unpaused(&env)?;
        spend_allowance(&env, &from, &spender, amount)?;
        move_balance(&env, &from, &to, amount)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), Error> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        require_unpaused(&env)?;
        write_allowance(&env, &from, &spender, amount, expiration_ledger)?;
        events::approve(&env, &from, &spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender).amount
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(read_metadata(&env)?.decimals)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(read_metadata(&env)?.symbol)
    }
}

mod test;
