//! RAII guard for environment-variable overrides in tests.
//!
//! Snapshots the current value before setting the override and restores it
//! (or removes the variable) on drop, so cleanup happens even when a test
//! panics. Tests using this must be marked `#[serial]`: mutating the process
//! environment is not thread-safe.

use std::ffi::OsString;

pub struct EnvGuard {
    key: &'static str,
    original: Option<OsString>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        let original = std::env::var_os(key);
        // SAFETY: callers are #[serial], so no other thread touches the
        // environment while the guard is alive
        unsafe { std::env::set_var(key, value) };
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: same #[serial] discipline as in `set`
        match &self.original {
            Some(val) => unsafe { std::env::set_var(self.key, val) },
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}
