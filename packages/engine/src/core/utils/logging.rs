//! Console logging
//!
//! In the browser every message goes to the devtools console through `web_sys`.
//! Native builds (tests, tools) cannot call wasm imports, so they fall back to stderr.
//!
//! Usage:
//! ```rust
//! use grainfall_engine::{engine_log, engine_warn};
//!
//! engine_log!("catalog loaded: {} elements", 12);
//! engine_warn!("skipping element {}", 3);
//! ```

#[cfg(target_arch = "wasm32")]
pub fn console_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_log(msg: &str) {
    eprintln!("[grainfall] {}", msg);
}

#[cfg(target_arch = "wasm32")]
pub fn console_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_warn(msg: &str) {
    eprintln!("[grainfall] warning: {}", msg);
}

/// Informational message, `format!` syntax
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        $crate::core::utils::console_log(&format!($($arg)*));
    }};
}

/// Diagnostic warning, `format!` syntax
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        $crate::core::utils::console_warn(&format!($($arg)*));
    }};
}
