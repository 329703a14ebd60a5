pub mod counter_state;
pub mod receipt_state;

pub use counter_state::*;
pub use receipt_state::*;
