use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;
use crate::utils::{create_program_account, is_occupied, write_record};

/**
 * Account context for claiming a seat
 *
 * The counter is writable here, so the runtime write-locks it and runs
 * competing claims and cancels on the same counter one after another. The
 * capacity check and the increment below therefore always see the latest
 * `used` value.
 *
 * Access Control: Any signer, at most one seat per (counter, claimer)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The counter to take a seat from
    /// - Must be an existing counter PDA
    /// - Derived from: ["counter", counter.admin]
    #[account(
        mut,
        seeds = [COUNTER_SEED.as_bytes(), counter.admin.as_ref()],
        bump = counter.bump,
    )]
    pub counter: Account<'info, Counter>,

    /// Receipt for this (counter, claimer) pair
    /// - Derived from: ["receipt", counter_key, claimer_key]
    /// - Must be empty; an existing receipt means the seat is already held
    /// CHECK: Address verified by seeds, emptiness verified in the handler
    #[account(
        mut,
        seeds = [RECEIPT_SEED.as_bytes(), counter.key().as_ref(), claimer.key().as_ref()],
        bump
    )]
    pub receipt: UncheckedAccount<'info>,

    /// The claimer taking the seat
    /// - Must sign the transaction
    /// - Pays rent for the receipt account
    #[account(mut)]
    pub claimer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Grants one seat to the signer
 *
 * @param ctx - The account context containing counter, receipt and claimer accounts
 *
 * Validation Process:
 * 1. Claiming window has opened
 * 2. No receipt exists for (counter, claimer)
 * 3. A seat is left (checked together with the increment)
 */
pub fn handle_claim(ctx: Context<Claim>) -> Result<()> {
    // ===== VALIDATION PHASE =====

    let now = Clock::get()?.unix_timestamp;
    require!(
        ctx.accounts.counter.has_started(now),
        LimitedClaimError::NotStarted
    );

    require!(
        !is_occupied(&ctx.accounts.receipt),
        LimitedClaimError::AlreadyClaimed
    );

    // ===== EFFECTS PHASE =====

    let counter = &mut ctx.accounts.counter;
    let used = counter.occupy_seat()?;
    let remaining = counter.remaining();
    let counter_key = counter.key();

    let claimer_key = ctx.accounts.claimer.key();
    let receipt_bump = ctx.bumps.receipt;

    let seeds = &[
        RECEIPT_SEED.as_bytes(),
        counter_key.as_ref(),
        claimer_key.as_ref(),
        &[receipt_bump],
    ];
    let signer = &[&seeds[..]];

    create_program_account(
        ctx.accounts.claimer.to_account_info(),
        ctx.accounts.receipt.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        ClaimReceipt::LEN,
        signer,
    )?;

    let receipt = ClaimReceipt {
        bump: receipt_bump,
        counter: counter_key,
        claimer: claimer_key,
        claimed_at: now,
    };
    write_record(&ctx.accounts.receipt, &receipt)?;

    msg!("Seat claimed, {} remaining", remaining);

    emit_cpi!(SeatClaimed {
        counter: counter_key,
        claimer: claimer_key,
        used,
        remaining,
    });

    Ok(())
}
