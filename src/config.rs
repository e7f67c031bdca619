use std::env;
use std::sync::atomic::{AtomicU8, Ordering};

use tracing::warn;

/// Process run mode, installed by the hosting service at startup.
///
/// The response builders re-read it on every call to decide whether raw
/// diagnostics may be disclosed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RunMode {
    Debug = 0,
    Test = 1,
    Release = 2,
}

static CURRENT_MODE: AtomicU8 = AtomicU8::new(RunMode::Debug as u8);

impl RunMode {
    /// Read the mode from the APP_MODE environment variable. Unrecognized
    /// values are logged and fall back to `Debug`.
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        match env::var("APP_MODE")
            .map(|v| v.to_ascii_lowercase())
            .as_deref()
        {
            Ok("release") | Ok("production") => Self::Release,
            Ok("test") => Self::Test,
            Ok("debug") | Err(_) => Self::Debug,
            Ok(other) => {
                warn!("unrecognized APP_MODE {other:?}, defaulting to debug");
                Self::Debug
            }
        }
    }

    /// Read the mode from the environment and install it process-wide.
    /// Called once from the hosting service's startup.
    pub fn init_from_env() -> Self {
        let mode = Self::from_env();
        Self::set(mode);
        mode
    }

    /// Install `mode` as the process-wide run mode.
    pub fn set(mode: RunMode) {
        CURRENT_MODE.store(mode as u8, Ordering::Relaxed);
    }

    /// The process-wide run mode as of this call.
    pub fn current() -> Self {
        match CURRENT_MODE.load(Ordering::Relaxed) {
            2 => Self::Release,
            1 => Self::Test,
            _ => Self::Debug,
        }
    }

    /// True when running in release/production mode.
    pub fn is_release(self) -> bool {
        matches!(self, Self::Release)
    }
}
