use crate::types::{DataKey, Error};
use crate::{NftContractArgs, NftContractClient};
use soroban_sdk::{contractimpl, symbol_short, Address, Env, String};

#[contractimpl]
impl super::NftContract {
    /// Replace the metadata URI template (owner only)
    pub fn set_uri(env: Env, caller: Address, uri: String) -> Result<(), Error> {
        caller.require_auth();
        Self::check_owner(&env, &caller)?;

        env.storage().instance().set(&DataKey::Uri, &uri);
        env.events().publish((symbol_short!("URI"), &caller), uri);
        Ok(())
    }

    /// URI template shared by every token id
    pub fn uri(env: Env, _token_id: u32) -> Result<String, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Uri)
            .ok_or(Error::NotInitialized)
    }
}
