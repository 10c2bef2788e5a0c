use soroban_sdk::{contracterror, contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,            // Collection owner, may change the URI
    Presale,          // Only caller allowed to mint
    Uri,              // Metadata URI template
    NextId,           // Next token id
    TokenOwner(u32),  // Token id -> holder
    Balance(Address), // Holder -> number of tokens
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotOwner = 3,
    TokenNotFound = 4,
    Overflow = 5,
}
