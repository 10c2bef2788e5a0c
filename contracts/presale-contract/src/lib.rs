#![no_std]
//! Fixed-price presale with a swap-remove whitelist, refunds after close,
//! one NFT mint per participant and a percentage royalty split.
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

mod access;
mod events;
mod external;
mod royalty;
mod sale;
mod types;
mod utils;
mod whitelist;

pub use crate::external::{Minter, MinterClient};
pub use crate::types::{Entry, Error, RoyaltyRecipient, SaleConfig, SalePhase};

use crate::access::AccessManager;
use crate::royalty::{RoyaltyManager, FEE_DENOMINATOR};
use crate::sale::SaleManager;
use crate::types::DataKey;
use crate::utils::{bump_instance, contract_balance};
use crate::whitelist::WhitelistManager;

#[contract]
pub struct PresaleContract;

#[contractimpl]
impl PresaleContract {
    /// Initialize the sale.
    ///
    /// # Arguments
    /// * `owner` - Address allowed to register the NFT contract
    /// * `token` - Token contract deposits are paid in
    /// * `capacity` - Number of slots; the sale closes when all are taken
    /// * `mint_price` - Exact deposit per participant
    /// * `recipients` / `fees` - Royalty split, whole percentages summing to 100
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        capacity: u32,
        mint_price: i128,
        recipients: Vec<Address>,
        fees: Vec<u32>,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        if mint_price <= 0 || RoyaltyManager::share(mint_price, FEE_DENOMINATOR).is_err() {
            return Err(Error::InvalidPrice);
        }

        RoyaltyManager::init(&env, &recipients, &fees)?;

        let config = SaleConfig {
            owner: owner.clone(),
            token,
            capacity,
            mint_price,
        };
        env.storage().instance().set(&DataKey::Config, &config);

        // Initialize managers
        SaleManager::init(&env);
        WhitelistManager::init(&env);
        bump_instance(&env);

        events::emit(&env, events::INIT, (owner, capacity, mint_price));
        Ok(())
    }

    /// Deposit exactly the mint price to take a slot
    pub fn deposit(env: Env, participant: Address, amount: i128) -> Result<(), Error> {
        participant.require_auth();
        SaleManager::deposit(&env, participant, amount)
    }

    /// Withdraw the deposit once the sale has closed
    pub fn refund(env: Env, participant: Address) -> Result<i128, Error> {
        participant.require_auth();
        SaleManager::refund(&env, participant)
    }

    /// Register the NFT contract (owner only, once)
    pub fn set_nft(env: Env, owner: Address, nft: Option<Address>) -> Result<(), Error> {
        owner.require_auth();
        SaleManager::set_nft(&env, owner, nft)
    }

    /// Mint the participant's NFT; returns the token id
    pub fn mint_nft(env: Env, participant: Address) -> Result<u32, Error> {
        participant.require_auth();
        SaleManager::mint_nft(&env, participant)
    }

    /// Withdraw accrued royalties
    pub fn claim(env: Env, recipient: Address) -> Result<i128, Error> {
        recipient.require_auth();
        SaleManager::claim(&env, recipient)
    }

    pub fn get_mint_price(env: Env) -> Result<i128, Error> {
        Ok(AccessManager::config(&env)?.mint_price)
    }

    pub fn get_capacity(env: Env) -> Result<u32, Error> {
        Ok(AccessManager::config(&env)?.capacity)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        AccessManager::config(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        Ok(AccessManager::config(&env)?.owner)
    }

    pub fn get_phase(env: Env) -> SalePhase {
        SaleManager::phase(&env)
    }

    /// Number of live slots
    pub fn get_total_members(env: Env) -> u32 {
        WhitelistManager::len(&env)
    }

    /// Live participants in slot order
    pub fn get_members(env: Env) -> Vec<Address> {
        WhitelistManager::members(&env)
    }

    pub fn get_slot(env: Env, index: u32) -> Option<Address> {
        WhitelistManager::slot(&env, index)
    }

    pub fn get_entry(env: Env, participant: Address) -> Option<Entry> {
        WhitelistManager::entry(&env, &participant)
    }

    /// Currently deposited amount, zero if none
    pub fn get_amount(env: Env, participant: Address) -> i128 {
        WhitelistManager::entry(&env, &participant)
            .map(|entry| entry.amount)
            .unwrap_or(0)
    }

    pub fn get_royalty(env: Env, recipient: Address) -> Option<RoyaltyRecipient> {
        RoyaltyManager::get(&env, &recipient)
    }

    pub fn get_recipients(env: Env) -> Vec<Address> {
        RoyaltyManager::recipients(&env)
    }

    pub fn get_nft(env: Env) -> Option<Address> {
        SaleManager::nft(&env)
    }

    /// Token balance held by the presale
    pub fn get_balance(env: Env) -> Result<i128, Error> {
        let config = AccessManager::config(&env)?;
        Ok(contract_balance(&env, &config.token))
    }
}
