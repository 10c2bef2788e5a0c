use soroban_sdk::{contractclient, Address, Env};

/// Capability the presale needs from the NFT contract.
///
/// The NFT side must only honour calls authorized by the registered presale.
#[allow(dead_code)]
#[contractclient(name = "MinterClient")]
pub trait Minter {
    /// Mints one collectible to `to` and returns its token id.
    fn mint(env: Env, to: Address) -> u32;
}
