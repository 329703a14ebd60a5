use anchor_lang::prelude::*;

declare_id!("Gi9ZPReh1pPsvpukkvuRMbboJtcpPh4ryqnFz4tkhLbJ");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Limited Claim Program
 *
 * A Solana program that hands out a fixed number of seats, at most one per
 * claimer, and lets claimers give their seat back.
 *
 * Key Features:
 * - One counter per administrator, with a fixed capacity
 * - One receipt per (counter, claimer); the receipt's existence is the claim
 * - Optional claim start time, set by the admin
 * - Cross-program call event emission for composability
 *
 * Architecture:
 * - Counter PDA: ["counter", admin], holds capacity and seats in use
 * - Claim Receipt PDAs: ["receipt", counter, claimer], one per held seat
 *
 * Workflow:
 * 1. Admin initializes its counter (and optionally sets a start time)
 * 2. Claimers claim a seat, creating their receipt
 * 3. Claimers may cancel, closing the receipt and freeing the seat
 *
 * Every claim and cancel writes the counter account, so the runtime
 * serializes them per counter and `used` never loses an update.
 */
#[program]
pub mod limited_claim {
    use super::*;

    /**
     * Creates the admin's seat counter
     *
     * @param ctx - Account context containing counter and admin accounts
     * @param capacity - Maximum number of seats held at once
     * @param initial_used - Seats already taken at creation (must not exceed capacity)
     *
     * Access Control: Admin only, for its own counter
     * Note: Can succeed only once per admin; claims are open immediately
     */
    pub fn initialize_counter(
        ctx: Context<InitializeCounter>,
        capacity: u64,
        initial_used: u64,
    ) -> Result<()> {
        handle_initialize_counter(ctx, capacity, initial_used)
    }

    /**
     * Sets when claiming opens
     *
     * @param ctx - Account context containing counter and admin accounts
     * @param start_time - Unix timestamp from which claims are accepted
     *
     * Access Control: Admin only
     * Note: Cancels are never blocked by the start time
     */
    pub fn set_start_time(ctx: Context<SetStartTime>, start_time: i64) -> Result<()> {
        handle_set_start_time(ctx, start_time)
    }

    /**
     * Claims one seat on a counter
     *
     * Creates the claimer's receipt and increments the counter's seats in use.
     *
     * @param ctx - Account context containing counter, receipt and claimer accounts
     *
     * Access Control: Any signer, one seat per claimer per counter
     */
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        handle_claim(ctx)
    }

    /**
     * Cancels a held seat
     *
     * Closes the claimer's receipt, refunds its rent and decrements the
     * counter's seats in use.
     *
     * @param ctx - Account context containing counter, receipt and claimer accounts
     *
     * Access Control: Claimer recorded on the receipt only
     */
    pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
        handle_cancel(ctx)
    }
}
