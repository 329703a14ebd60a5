use anchor_lang::prelude::*;

/**
 * Claim receipt account
 *
 * Proof that `claimer` holds one seat on `counter`. The account existing is
 * the claim itself; there is no "cancelled" flag, cancel closes it.
 *
 * Derivation: ["receipt", counter_key, claimer_key]
 *
 * Lifecycle:
 * 1. Created by claim, rent paid by the claimer
 * 2. Closed by cancel, rent returned to the claimer
 * 3. May be created again by a later claim from the same claimer
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimReceipt {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Counter this seat was taken from
    pub counter: Pubkey,

    /// Holder of the seat
    pub claimer: Pubkey,

    /// Unix timestamp of the claim
    pub claimed_at: i64,
}

impl ClaimReceipt {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimReceipt>();
}
