use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seed tags used to derive the counter and receipt addresses.
 * Clients derive the same addresses off-chain, so these values are part
 * of the program's public interface and are exported to the IDL.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for counter PDA derivation
/// - Used in: ["counter", admin]
/// - One counter per administrator identity
/// - A second initialization targets the same address and is rejected
pub const COUNTER_SEED: &str = "counter";

#[constant]
/// Seed for claim receipt PDA derivation
/// - Used in: ["receipt", counter_key, claimer_key]
/// - One receipt per (counter, claimer) pair
/// - The address itself is the double-claim guard
pub const RECEIPT_SEED: &str = "receipt";
