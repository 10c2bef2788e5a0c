use crate::types::{DataKey, Error};
use crate::{NftContractArgs, NftContractClient};
use crate::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{contractimpl, symbol_short, Address, Env};

#[contractimpl]
impl super::NftContract {
    /// Mint the next token to `to`. Callable only by the presale contract.
    pub fn mint(env: Env, to: Address) -> Result<u32, Error> {
        let presale = Self::get_presale(env.clone())?;
        presale.require_auth();

        let token_id: u32 = env.storage().instance().get(&DataKey::NextId).unwrap_or(0);
        let next_id = token_id.checked_add(1).ok_or(Error::Overflow)?;
        env.storage().instance().set(&DataKey::NextId, &next_id);

        let owner_key = DataKey::TokenOwner(token_id);
        env.storage().persistent().set(&owner_key, &to);
        env.storage().persistent().extend_ttl(
            &owner_key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );

        let balance_key = DataKey::Balance(to.clone());
        let balance = Self::balance_of(env.clone(), to.clone());
        env.storage().persistent().set(&balance_key, &(balance + 1));
        env.storage().persistent().extend_ttl(
            &balance_key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );

        env.events().publish((symbol_short!("MINT"), &to), token_id);

        Ok(token_id)
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::TokenOwner(token_id))
            .ok_or(Error::TokenNotFound)
    }

    pub fn balance_of(env: Env, owner: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(owner))
            .unwrap_or(0)
    }

    /// Number of tokens minted so far
    pub fn total_supply(env: Env) -> u32 {
        env.storage().instance().get(&DataKey::NextId).unwrap_or(0)
    }
}
