pub mod initialize_counter;
pub mod set_start_time;
pub mod claim;
pub mod cancel;

pub use initialize_counter::*;
pub use set_start_time::*;
pub use claim::*;
pub use cancel::*;
