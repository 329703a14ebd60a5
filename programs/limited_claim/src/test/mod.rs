
use crate::error::LimitedClaimError;
use anchor_lang::error::{Error, ERROR_CODE_OFFSET};

/// Error code carried by an Anchor error, as a client would see it
pub fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        Error::ProgramError(e) => panic!("expected a program error code, got {:?}", e),
    }
}

pub fn code_of(err: LimitedClaimError) -> u32 {
    err as u32 + ERROR_CODE_OFFSET
}
