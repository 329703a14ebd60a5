use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Seat counter account
 *
 * Holds the capacity and current usage of one administrator's seat pool.
 * `used` is the only field that changes after creation, and it only moves
 * by one at a time through `occupy_seat` and `release_seat`.
 *
 * Derivation: ["counter", admin]
 *
 * Lifecycle:
 * 1. Created once by initialize_counter (a second attempt hits the same PDA)
 * 2. `start_time` optionally moved by the admin with set_start_time
 * 3. `used` incremented by claim, decremented by cancel
 * 4. Never closed
 *
 * Invariants:
 * - 0 <= used <= capacity
 * - used equals the number of live ClaimReceipt accounts bound to this counter
 */
#[account]
#[derive(Default, Debug)]
pub struct Counter {
    /// Bump seed for PDA derivation
    /// - Saved so claim and cancel can verify the address without a search
    pub bump: u8,

    /// Administrator who created the counter
    /// - Also the second seed of the counter PDA
    pub admin: Pubkey,

    /// Maximum number of seats that may be held at once
    pub capacity: u64,

    /// Number of seats currently held
    pub used: u64,

    /// Unix timestamp from which claims are accepted
    /// - 0 at creation, so claims are open immediately
    pub start_time: i64,

    /// Unix timestamp of initialization
    pub created_at: i64,
}

impl Counter {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Counter>();

    /// Checks the creation parameters of a counter.
    pub fn validate_seats(capacity: u64, initial_used: u64) -> Result<()> {
        require!(initial_used <= capacity, LimitedClaimError::InvalidCapacity);
        Ok(())
    }

    /// Seats still available to claim.
    pub fn remaining(&self) -> u64 {
        self.capacity.saturating_sub(self.used)
    }

    /// Whether claims are accepted at `now`.
    pub fn has_started(&self, now: i64) -> bool {
        now >= self.start_time
    }

    /// Takes one seat, returning the new `used` value.
    ///
    /// Fails with `CounterFull` and leaves the counter untouched when no
    /// seat is left.
    pub fn occupy_seat(&mut self) -> Result<u64> {
        require!(self.used < self.capacity, LimitedClaimError::CounterFull);

        self.used = self
            .used
            .checked_add(1)
            .ok_or(LimitedClaimError::ArithmeticOverflow)?;

        Ok(self.used)
    }

    /// Gives one seat back, returning the new `used` value.
    ///
    /// Only reachable with a live receipt, so `used` is positive here; the
    /// check keeps a corrupted counter from wrapping.
    pub fn release_seat(&mut self) -> Result<u64> {
        self.used = self
            .used
            .checked_sub(1)
            .ok_or(LimitedClaimError::CounterUnderflow)?;

        Ok(self.used)
    }
}
