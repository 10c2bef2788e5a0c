use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// Topic shared by every presale event.
pub const PRESALE: Symbol = symbol_short!("PRESALE");

pub const INIT: Symbol = symbol_short!("init");
pub const DEPOSIT: Symbol = symbol_short!("deposit");
pub const CLOSED: Symbol = symbol_short!("closed");
pub const REFUND: Symbol = symbol_short!("refund");
pub const NFT_SET: Symbol = symbol_short!("nft_set");
pub const MINTED: Symbol = symbol_short!("minted");
pub const CLAIMED: Symbol = symbol_short!("claimed");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    pub participant: Address,
    pub slot: u32,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Refunded {
    pub participant: Address,
    pub amount: i128,
    pub freed_slot: u32,
    // Participant swapped into the freed slot, if any
    pub moved: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftMinted {
    pub participant: Address,
    pub token_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoyaltyClaimed {
    pub recipient: Address,
    pub amount: i128,
}

pub fn emit<D>(env: &Env, action: Symbol, data: D)
where
    D: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.events().publish((PRESALE, action), data);
}
