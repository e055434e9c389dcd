//! Tagged diagnostic lines on stderr.
//!
//! Silent unless `CUBE_MATCH3_TRACE` is `1` or `true`. The variable is read once.

use std::sync::OnceLock;

/// Environment switch for diagnostics
pub const TRACE_ENV: &str = "CUBE_MATCH3_TRACE";

static ENABLED: OnceLock<bool> = OnceLock::new();

pub fn enabled() -> bool {
    *ENABLED.get_or_init(|| {
        std::env::var(TRACE_ENV)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    })
}

/// `diag_note!("board", "no visual node at {}", p)` prints `[board] no visual node at (1,2)`.
macro_rules! diag_note {
    ($tag:expr, $($arg:tt)*) => {
        if $crate::diag::enabled() {
            eprintln!("[{}] {}", $tag, format_args!($($arg)*));
        }
    };
}

pub(crate) use diag_note;
