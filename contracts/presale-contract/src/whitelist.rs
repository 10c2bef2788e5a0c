use crate::types::{DataKey, Entry, Error};
use crate::utils::bump_persistent;
use soroban_sdk::{Address, Env, Vec};

/// Dense slot array plus a participant -> Entry index.
///
/// Live participants occupy `Slot(0)..Slot(count)`, and every live entry points
/// back at its own slot. Removal swaps the last slot into the hole, so both
/// append and remove touch a fixed number of storage cells.
pub struct WhitelistManager;

impl WhitelistManager {
    pub fn init(env: &Env) {
        if !env.storage().instance().has(&DataKey::SlotCount) {
            env.storage().instance().set(&DataKey::SlotCount, &0u32);
        }
    }

    /// Number of live slots
    pub fn len(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::SlotCount)
            .unwrap_or(0)
    }

    pub fn slot(env: &Env, index: u32) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Slot(index))
    }

    /// Entry for a participant, live or refunded
    pub fn entry(env: &Env, participant: &Address) -> Option<Entry> {
        env.storage()
            .persistent()
            .get(&DataKey::Entry(participant.clone()))
    }

    pub fn live_entry(env: &Env, participant: &Address) -> Option<Entry> {
        Self::entry(env, participant).filter(|entry| entry.is_live())
    }

    /// Live participants in slot order
    pub fn members(env: &Env) -> Vec<Address> {
        let mut members = Vec::new(env);
        for index in 0..Self::len(env) {
            if let Some(participant) = Self::slot(env, index) {
                members.push_back(participant);
            }
        }
        members
    }

    /// Append a participant at the end of the slot array
    pub fn push(env: &Env, participant: &Address, amount: i128) -> Entry {
        let slot = Self::len(env);

        let entry = Entry {
            participant: participant.clone(),
            amount,
            slot,
            verified: true,
            claimed: false,
        };

        Self::write_slot(env, slot, participant);
        Self::save_entry(env, &entry);
        env.storage().instance().set(&DataKey::SlotCount, &(slot + 1));

        entry
    }

    /// Swap-remove a participant's slot.
    ///
    /// Returns the entry as it was before removal and the participant that was
    /// moved into the freed slot, if any.
    pub fn swap_remove(
        env: &Env,
        participant: &Address,
    ) -> Result<(Entry, Option<Address>), Error> {
        let removed = Self::live_entry(env, participant).ok_or(Error::NothingToWithdraw)?;

        let count = Self::len(env);
        let last = count.checked_sub(1).ok_or(Error::NothingToWithdraw)?;
        let hole = removed.slot;

        let mut moved = None;
        if hole != last {
            let tail = Self::slot(env, last).ok_or(Error::NothingToWithdraw)?;
            let mut tail_entry = Self::entry(env, &tail).ok_or(Error::NothingToWithdraw)?;

            tail_entry.slot = hole;
            Self::write_slot(env, hole, &tail);
            Self::save_entry(env, &tail_entry);
            moved = Some(tail);
        }

        env.storage().persistent().remove(&DataKey::Slot(last));
        env.storage().instance().set(&DataKey::SlotCount, &last);

        let stale = Entry {
            amount: 0,
            verified: false,
            ..removed.clone()
        };
        Self::save_entry(env, &stale);

        Ok((removed, moved))
    }

    pub fn save_entry(env: &Env, entry: &Entry) {
        let key = DataKey::Entry(entry.participant.clone());
        env.storage().persistent().set(&key, entry);
        bump_persistent(env, &key);
    }

    fn write_slot(env: &Env, index: u32, participant: &Address) {
        let key = DataKey::Slot(index);
        env.storage().persistent().set(&key, participant);
        bump_persistent(env, &key);
    }
}
