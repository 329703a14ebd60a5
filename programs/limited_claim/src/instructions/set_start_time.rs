use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for setting the claim opening time
 *
 * Access Control: Only the admin recorded on the counter
 *
 * Business Logic:
 * - Counters start open (start_time = 0)
 * - The admin may move the opening forward or back at any time
 * - Only claims are gated; held seats can always be cancelled
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetStartTime<'info> {
    /// The counter to update
    /// - Derived from: ["counter", counter.admin]
    #[account(
        mut,
        seeds = [COUNTER_SEED.as_bytes(), counter.admin.as_ref()],
        bump = counter.bump,
        has_one = admin @ LimitedClaimError::Unauthorized
    )]
    pub counter: Account<'info, Counter>,

    /// The admin who created the counter
    pub admin: Signer<'info>,
}

/**
 * Sets the claim opening time
 *
 * @param ctx - The account context containing counter and admin accounts
 * @param start_time - Unix timestamp from which claims are accepted
 */
pub fn handle_set_start_time(ctx: Context<SetStartTime>, start_time: i64) -> Result<()> {
    let counter = &mut ctx.accounts.counter;
    counter.start_time = start_time;

    let counter_key = counter.key();

    emit_cpi!(StartTimeSet {
        counter: counter_key,
        admin: ctx.accounts.admin.key(),
        start_time,
    });

    Ok(())
}
