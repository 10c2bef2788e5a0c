#![no_std]
//! Collectible minted once per presale participant.
//!
//! Minting is gated on the registered presale contract's authorization, so
//! only calls made by that contract go through.
use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod metadata;
mod minting;
mod types;

pub use crate::types::Error;
use crate::types::DataKey;

const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;

#[contract]
pub struct NftContract;

#[contractimpl]
impl NftContract {
    /// Set the owner, the presale allowed to mint and the metadata URI.
    ///
    /// The first successful call wins, so deploy and initialize in the same
    /// transaction.
    pub fn initialize(
        env: Env,
        owner: Address,
        presale: Address,
        uri: String,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Presale, &presale);
        env.storage().instance().set(&DataKey::Uri, &uri);
        env.storage().instance().set(&DataKey::NextId, &0u32);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        Ok(())
    }

    fn check_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        let owner = Self::get_owner(env.clone())?;
        if caller != &owner {
            return Err(Error::NotOwner);
        }
        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    pub fn get_presale(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Presale)
            .ok_or(Error::NotInitialized)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&DataKey::Owner)
    }
}
