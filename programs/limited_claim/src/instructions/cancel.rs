use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;
use crate::utils::close_program_account;

/**
 * Account context for cancelling a claim
 *
 * Releases the signer's seat and closes its receipt, refunding the rent.
 * There is no admin path: only the claimer can release its own seat.
 *
 * Access Control: Only the claimer recorded on the receipt
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Cancel<'info> {
    /// The counter the seat was taken from
    /// - Derived from: ["counter", counter.admin]
    #[account(
        mut,
        seeds = [COUNTER_SEED.as_bytes(), counter.admin.as_ref()],
        bump = counter.bump,
    )]
    pub counter: Account<'info, Counter>,

    /// Receipt to be closed, rent returned to claimer
    /// - Derived from: ["receipt", counter_key, claimer_key]
    /// CHECK: Address verified by seeds, owner and contents verified in the handler
    #[account(
        mut,
        seeds = [RECEIPT_SEED.as_bytes(), counter.key().as_ref(), claimer.key().as_ref()],
        bump
    )]
    pub receipt: UncheckedAccount<'info>,

    /// The claimer releasing its seat
    /// - Will receive the reclaimed rent
    #[account(mut)]
    pub claimer: Signer<'info>,
}

/**
 * Releases the signer's seat
 *
 * @param ctx - The account context containing counter, receipt and claimer accounts
 *
 * Validation Process:
 * 1. A receipt of this program lives at the derived address
 * 2. It is bound to this counter and recorded for this signer
 * 3. Decrement `used`, then close the receipt
 */
pub fn handle_cancel(ctx: Context<Cancel>) -> Result<()> {
    // ===== VALIDATION PHASE =====

    let receipt_info = ctx.accounts.receipt.to_account_info();

    // Never claimed, or already cancelled
    require!(
        receipt_info.owner == &crate::ID && !receipt_info.data_is_empty(),
        LimitedClaimError::NoActiveClaim
    );

    let receipt = {
        let receipt_data = receipt_info.try_borrow_data()?;
        ClaimReceipt::try_deserialize(&mut receipt_data.as_ref())?
    };

    require_keys_eq!(
        receipt.counter,
        ctx.accounts.counter.key(),
        LimitedClaimError::NoActiveClaim
    );
    require_keys_eq!(
        receipt.claimer,
        ctx.accounts.claimer.key(),
        LimitedClaimError::Unauthorized
    );

    // ===== EFFECTS PHASE =====

    let counter = &mut ctx.accounts.counter;
    let used = counter.release_seat()?;
    let remaining = counter.remaining();
    let counter_key = counter.key();

    close_program_account(receipt_info, ctx.accounts.claimer.to_account_info())?;

    msg!("Seat released, {} remaining", remaining);

    emit_cpi!(SeatCancelled {
        counter: counter_key,
        claimer: receipt.claimer,
        used,
        remaining,
    });

    Ok(())
}
