use crate::access::AccessManager;
use crate::events::{self, Deposited, NftMinted, Refunded, RoyaltyClaimed};
use crate::external::MinterClient;
use crate::royalty::RoyaltyManager;
use crate::types::{DataKey, Error, SaleConfig, SalePhase};
use crate::utils::{bump_instance, transfer_from_contract, transfer_to_contract};
use crate::whitelist::WhitelistManager;
use soroban_sdk::{log, Address, Env};

pub struct SaleManager;

impl SaleManager {
    pub fn init(env: &Env) {
        if !env.storage().instance().has(&DataKey::Phase) {
            env.storage().instance().set(&DataKey::Phase, &SalePhase::Open);
        }
    }

    pub fn phase(env: &Env) -> SalePhase {
        env.storage()
            .instance()
            .get(&DataKey::Phase)
            .unwrap_or(SalePhase::Open)
    }

    fn require_closed(env: &Env) -> Result<(), Error> {
        if Self::phase(env) != SalePhase::Closed {
            return Err(Error::SaleNotEnded);
        }
        Ok(())
    }

    pub fn nft(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Nft)
    }

    /// Take one slot for exactly the mint price
    pub fn deposit(env: &Env, participant: Address, amount: i128) -> Result<(), Error> {
        let config: SaleConfig = AccessManager::config(env)?;

        if Self::phase(env) != SalePhase::Open {
            return Err(Error::SaleClosed);
        }
        if amount != config.mint_price {
            return Err(Error::IncorrectAmount);
        }
        if WhitelistManager::live_entry(env, &participant).is_some() {
            return Err(Error::AlreadyDeposited);
        }
        // Unreachable while the phase flips on the last slot and refunds
        // wait for Closed; kept in case either rule changes.
        if WhitelistManager::len(env) >= config.capacity {
            return Err(Error::SaleFull);
        }

        transfer_to_contract(env, &config.token, &participant, &amount);
        let entry = WhitelistManager::push(env, &participant, amount);
        log!(env, "deposit slot {} of {}", entry.slot, config.capacity);

        if entry.slot + 1 == config.capacity {
            env.storage().instance().set(&DataKey::Phase, &SalePhase::Closed);
            events::emit(env, events::CLOSED, config.capacity);
        }
        bump_instance(env);

        events::emit(
            env,
            events::DEPOSIT,
            Deposited {
                participant,
                slot: entry.slot,
                amount,
            },
        );
        Ok(())
    }

    /// Give a deposit back after the sale closed, freeing its slot
    pub fn refund(env: &Env, participant: Address) -> Result<i128, Error> {
        let config: SaleConfig = AccessManager::config(env)?;
        Self::require_closed(env)?;

        let entry =
            WhitelistManager::live_entry(env, &participant).ok_or(Error::NothingToWithdraw)?;
        if entry.claimed {
            return Err(Error::AlreadyMinted);
        }

        let (removed, moved) = WhitelistManager::swap_remove(env, &participant)?;
        transfer_from_contract(env, &config.token, &participant, &removed.amount);
        bump_instance(env);

        log!(env, "refund freed slot {}", removed.slot);
        events::emit(
            env,
            events::REFUND,
            Refunded {
                participant,
                amount: removed.amount,
                freed_slot: removed.slot,
                moved,
            },
        );
        Ok(removed.amount)
    }

    /// Register the NFT contract. Can only happen once.
    pub fn set_nft(env: &Env, owner: Address, nft: Option<Address>) -> Result<(), Error> {
        AccessManager::verify_owner(env, &owner)?;

        let nft = nft.ok_or(Error::NullAddress)?;
        if nft == env.current_contract_address() {
            return Err(Error::NullAddress);
        }
        if env.storage().instance().has(&DataKey::Nft) {
            return Err(Error::NftAlreadySet);
        }

        env.storage().instance().set(&DataKey::Nft, &nft);
        bump_instance(env);

        events::emit(env, events::NFT_SET, nft);
        Ok(())
    }

    /// Trigger the participant's one mint and credit royalties
    pub fn mint_nft(env: &Env, participant: Address) -> Result<u32, Error> {
        let config: SaleConfig = AccessManager::config(env)?;
        Self::require_closed(env)?;

        let nft = Self::nft(env).ok_or(Error::NftNotSet)?;
        let mut entry =
            WhitelistManager::live_entry(env, &participant).ok_or(Error::NotParticipant)?;
        if entry.claimed {
            return Err(Error::AlreadyMinted);
        }

        entry.claimed = true;
        WhitelistManager::save_entry(env, &entry);
        RoyaltyManager::accrue(env, config.mint_price)?;

        // A failed mint aborts the call, rolling back the writes above.
        let token_id = match MinterClient::new(env, &nft).try_mint(&participant) {
            Ok(Ok(token_id)) => token_id,
            _ => return Err(Error::MintFailed),
        };
        bump_instance(env);

        events::emit(
            env,
            events::MINTED,
            NftMinted {
                participant,
                token_id,
            },
        );
        Ok(token_id)
    }

    /// Pay out a recipient's accrued royalties
    pub fn claim(env: &Env, recipient: Address) -> Result<i128, Error> {
        let config: SaleConfig = AccessManager::config(env)?;
        Self::require_closed(env)?;

        let amount = RoyaltyManager::take_unclaimed(env, &recipient)?;
        transfer_from_contract(env, &config.token, &recipient, &amount);
        bump_instance(env);

        events::emit(env, events::CLAIMED, RoyaltyClaimed { recipient, amount });
        Ok(amount)
    }
}
