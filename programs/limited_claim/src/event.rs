use anchor_lang::prelude::*;

/// Event emitted when an administrator creates a counter
#[event]
pub struct CounterInitialized {
    /// The counter account public key
    pub counter: Pubkey,
    /// Administrator who owns the counter
    pub admin: Pubkey,
    /// Maximum number of outstanding seats
    pub capacity: u64,
    /// Seats already in use at creation
    pub used: u64,
}

/// Event emitted when the admin moves the claim opening time
#[event]
pub struct StartTimeSet {
    /// The counter account public key
    pub counter: Pubkey,
    /// Administrator who set the time
    pub admin: Pubkey,
    /// Unix timestamp from which claims are accepted
    pub start_time: i64,
}

/// Event emitted when a claimer takes a seat
#[event]
pub struct SeatClaimed {
    /// The counter account public key
    pub counter: Pubkey,
    /// Address of the claimer
    pub claimer: Pubkey,
    /// Seats in use after this claim
    pub used: u64,
    /// Seats still available after this claim
    pub remaining: u64,
}

/// Event emitted when a claimer releases its seat
#[event]
pub struct SeatCancelled {
    /// The counter account public key
    pub counter: Pubkey,
    /// Address of the claimer
    pub claimer: Pubkey,
    /// Seats in use after this cancellation
    pub used: u64,
    /// Seats available after this cancellation
    pub remaining: u64,
}
