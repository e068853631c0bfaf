//! Seeded randomness
//!
//! All randomness in the engine (per-instance tint, worklist shuffle, direction
//! tie-breaks, jitter) is drawn from an explicitly seeded `StdRng` so a fixed seed
//! reproduces a run exactly.

use rand::rngs::StdRng;
use rand::SeedableRng;

pub type SimRng = StdRng;

#[inline]
pub fn seeded(seed: u64) -> SimRng {
    StdRng::seed_from_u64(seed)
}

/// Seed taken from the host clock when the caller does not supply one.
pub fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::now() as u64;
        let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
        now ^ (noise << 32)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E37_79B9_7F4A_7C15)
    }
}
