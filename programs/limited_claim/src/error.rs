use anchor_lang::prelude::*;

#[error_code]
pub enum LimitedClaimError {
    // Counter creation errors
    #[msg("Initial used seats exceed capacity")]
    InvalidCapacity,
    #[msg("Counter already exists for this administrator")]
    AlreadyExists,

    // Claim errors
    #[msg("Claimer already holds a seat on this counter")]
    AlreadyClaimed,
    #[msg("No seats remaining on this counter")]
    CounterFull,
    #[msg("Claiming has not started yet")]
    NotStarted,

    // Cancel errors
    #[msg("No active claim for this claimer on this counter")]
    NoActiveClaim,
    #[msg("Signer is not the claimer recorded on the receipt")]
    Unauthorized,

    // Accounting errors
    #[msg("Counter has no outstanding seats to release")]
    CounterUnderflow,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
