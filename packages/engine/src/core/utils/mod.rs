#[macro_use]
mod logging;
pub mod random;

pub use logging::{console_log, console_warn};
