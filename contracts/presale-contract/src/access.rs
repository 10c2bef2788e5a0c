use crate::types::{DataKey, Error, SaleConfig};
use soroban_sdk::{Address, Env};

pub struct AccessManager;

impl AccessManager {
    pub fn config(env: &Env) -> Result<SaleConfig, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    /// Verify owner
    pub fn verify_owner(env: &Env, caller: &Address) -> Result<SaleConfig, Error> {
        let config = Self::config(env)?;
        if caller != &config.owner {
            return Err(Error::Unauthorized);
        }
        Ok(config)
    }
}
