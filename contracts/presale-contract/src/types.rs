use soroban_sdk::{contracterror, contracttype, Address};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,           // Sale configuration (owner, token, capacity, price)
    Phase,            // Current SalePhase
    Nft,              // Registered NFT contract address
    SlotCount,        // Number of live slots
    Slot(u32),        // Slot index -> participant
    Entry(Address),   // Participant -> Entry
    Recipients,       // Ordered royalty recipient addresses
    Royalty(Address), // Recipient -> RoyaltyRecipient
}

/// Sale parameters fixed at initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    pub owner: Address,
    pub token: Address,
    pub capacity: u32,
    pub mint_price: i128,
}

/// Lifecycle of the sale. `Closed` is terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SalePhase {
    Open,   // Accepting deposits
    Closed, // Capacity reached, refund/mint/claim enabled
}

/// Whitelist record of one participant.
///
/// A refunded entry stays in storage with `verified == false` and a zero amount.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub participant: Address,
    pub amount: i128,
    pub slot: u32,
    pub verified: bool,
    pub claimed: bool,
}

impl Entry {
    /// Deposited, not refunded.
    pub fn is_live(&self) -> bool {
        self.verified && self.amount > 0
    }
}

/// Royalty beneficiary and what it is currently owed
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoyaltyRecipient {
    pub recipient: Address,
    pub fee: u32, // Share of 100
    pub unclaimed: i128,
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,       // Contract not initialized
    AlreadyInitialized = 2,   // Contract already setup
    Unauthorized = 3,         // Caller is not the owner
    InvalidCapacity = 4,      // Capacity must be positive
    InvalidPrice = 5,         // Mint price must be positive
    RecipientFeeMismatch = 6, // Recipients and fees differ in length
    InvalidFee = 7,           // A fee is above 100
    InvalidFeeTotal = 8,      // Fees do not add up to 100
    DuplicateRecipient = 9,   // Recipient listed twice
    IncorrectAmount = 10,     // Deposit differs from the mint price
    AlreadyDeposited = 11,    // Participant already holds a slot
    SaleClosed = 12,          // Deposits are no longer accepted
    SaleFull = 13,            // Every slot is taken
    SaleNotEnded = 14,        // Operation needs a closed sale
    NothingToWithdraw = 15,   // No live deposit to refund
    NotParticipant = 16,      // No live deposit to mint against
    AlreadyMinted = 17,       // Mint already triggered for participant
    NftNotSet = 18,           // NFT contract not registered
    NftAlreadySet = 19,       // NFT contract registered before
    NullAddress = 20,         // Missing or self-referencing address
    NotRecipient = 21,        // Caller is not a royalty recipient
    NothingToClaim = 22,      // No royalties owed
    Overflow = 23,            // Arithmetic overflow
    MintFailed = 24,          // NFT contract rejected the mint
}
