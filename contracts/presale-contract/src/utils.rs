use soroban_sdk::{token, Address, Env};

const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;

// Transfer tokens from contract
pub fn transfer_from_contract(env: &Env, token: &Address, to: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, amount);
}

// Transfer tokens to contract
pub fn transfer_to_contract(env: &Env, token: &Address, from: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), amount);
}

pub fn contract_balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn bump_persistent<K>(env: &Env, key: &K)
where
    K: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
