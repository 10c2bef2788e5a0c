use crate::types::{DataKey, Error, RoyaltyRecipient};
use crate::utils::bump_persistent;
use soroban_sdk::{Address, Env, Vec};

/// Fees are whole percentages.
pub const FEE_DENOMINATOR: u32 = 100;

pub struct RoyaltyManager;

impl RoyaltyManager {
    /// Validate and store the royalty split.
    ///
    /// An empty list is accepted and leaves every mint's value in the contract.
    /// Otherwise the fees must add up to exactly `FEE_DENOMINATOR`.
    pub fn init(env: &Env, recipients: &Vec<Address>, fees: &Vec<u32>) -> Result<(), Error> {
        if recipients.len() != fees.len() {
            return Err(Error::RecipientFeeMismatch);
        }

        let mut total: u32 = 0;
        let mut seen: Vec<Address> = Vec::new(env);
        for (recipient, fee) in recipients.iter().zip(fees.iter()) {
            if fee > FEE_DENOMINATOR {
                return Err(Error::InvalidFee);
            }
            if seen.contains(&recipient) {
                return Err(Error::DuplicateRecipient);
            }
            seen.push_back(recipient);
            total = total.checked_add(fee).ok_or(Error::Overflow)?;
        }

        if !recipients.is_empty() && total != FEE_DENOMINATOR {
            return Err(Error::InvalidFeeTotal);
        }

        for (recipient, fee) in recipients.iter().zip(fees.iter()) {
            Self::save(
                env,
                &RoyaltyRecipient {
                    recipient,
                    fee,
                    unclaimed: 0,
                },
            );
        }
        env.storage().instance().set(&DataKey::Recipients, recipients);

        Ok(())
    }

    pub fn recipients(env: &Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Recipients)
            .unwrap_or_else(|| Vec::new(env))
    }

    pub fn get(env: &Env, recipient: &Address) -> Option<RoyaltyRecipient> {
        env.storage()
            .persistent()
            .get(&DataKey::Royalty(recipient.clone()))
    }

    /// `price * fee / 100`, truncated. The remainder is never assigned.
    pub fn share(price: i128, fee: u32) -> Result<i128, Error> {
        price
            .checked_mul(fee as i128)
            .map(|scaled| scaled / FEE_DENOMINATOR as i128)
            .ok_or(Error::Overflow)
    }

    /// Credit every recipient with its share of one mint.
    ///
    /// All shares are computed before the first write.
    pub fn accrue(env: &Env, price: i128) -> Result<(), Error> {
        let mut updated: Vec<RoyaltyRecipient> = Vec::new(env);
        for recipient in Self::recipients(env).iter() {
            let mut royalty = Self::get(env, &recipient).ok_or(Error::NotRecipient)?;
            let share = Self::share(price, royalty.fee)?;
            royalty.unclaimed = royalty
                .unclaimed
                .checked_add(share)
                .ok_or(Error::Overflow)?;
            updated.push_back(royalty);
        }

        for royalty in updated.iter() {
            Self::save(env, &royalty);
        }
        Ok(())
    }

    /// Zero a recipient's balance and return what it was owed
    pub fn take_unclaimed(env: &Env, recipient: &Address) -> Result<i128, Error> {
        let mut royalty = Self::get(env, recipient).ok_or(Error::NotRecipient)?;
        if royalty.unclaimed <= 0 {
            return Err(Error::NothingToClaim);
        }

        let amount = royalty.unclaimed;
        royalty.unclaimed = 0;
        Self::save(env, &royalty);
        Ok(amount)
    }

    fn save(env: &Env, royalty: &RoyaltyRecipient) {
        let key = DataKey::Royalty(royalty.recipient.clone());
        env.storage().persistent().set(&key, royalty);
        bump_persistent(env, &key);
    }
}
