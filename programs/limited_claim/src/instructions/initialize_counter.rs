use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{create_program_account, is_occupied, write_record};
use anchor_lang::prelude::*;

/**
 * Account context for creating a seat counter
 *
 * The counter PDA is derived from the signing admin, so an admin can only
 * ever create its own counter and only one of them:
 * - Derived from: ["counter", admin]
 * - The account is created by the handler rather than by `init`, so an
 *   existing counter is reported as AlreadyExists instead of a raw system
 *   program failure
 *
 * Access Control: Admin only (self-administration)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeCounter<'info> {
    /// The counter account (PDA) to create
    /// - Derived from: ["counter", admin]
    /// - Must not hold a record yet
    /// CHECK: Address verified by seeds, emptiness verified in the handler
    #[account(
        mut,
        seeds = [COUNTER_SEED.as_bytes(), admin.key().as_ref()],
        bump
    )]
    pub counter: UncheckedAccount<'info>,

    /// Administrator creating the counter
    /// - Pays rent for the counter account
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Creates the admin's counter
 *
 * @param ctx - The account context containing counter and admin accounts
 * @param capacity - Maximum number of seats held at once
 * @param initial_used - Seats counted as taken from the start
 *
 * Claims are open immediately; the admin can move the opening with
 * set_start_time.
 */
pub fn handle_initialize_counter(
    ctx: Context<InitializeCounter>,
    capacity: u64,
    initial_used: u64,
) -> Result<()> {
    // ===== VALIDATION PHASE =====

    // Re-initialization is never a silent success
    require!(
        !is_occupied(&ctx.accounts.counter),
        LimitedClaimError::AlreadyExists
    );

    Counter::validate_seats(capacity, initial_used)?;

    // ===== EFFECTS PHASE =====

    let admin_key = ctx.accounts.admin.key();
    let counter_key = ctx.accounts.counter.key();
    let bump = ctx.bumps.counter;

    let seeds = &[COUNTER_SEED.as_bytes(), admin_key.as_ref(), &[bump]];
    let signer = &[&seeds[..]];

    create_program_account(
        ctx.accounts.admin.to_account_info(),
        ctx.accounts.counter.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        Counter::LEN,
        signer,
    )?;

    let counter = Counter {
        bump,
        admin: admin_key,
        capacity,
        used: initial_used,
        start_time: 0,
        created_at: Clock::get()?.unix_timestamp,
    };
    write_record(&ctx.accounts.counter, &counter)?;

    emit_cpi!(CounterInitialized {
        counter: counter_key,
        admin: admin_key,
        capacity,
        used: initial_used,
    });

    Ok(())
}
