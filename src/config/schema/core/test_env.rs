use std::sync::{LazyLock, Mutex, MutexGuard};

static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Every variable the env override layer reads.
pub(crate) const ECHO_ENV_VARS: [&str; 12] = [
    "OPENAI_API_KEY",
    "OPENAI_API_BASE",
    "OPENAI_MODEL",
    "HUGGINGFACE_API_KEY",
    "HF_MODEL",
    "HF_API_BASE",
    "ECHO_MODE",
    "ECHO_DEBUG",
    "ALLOWED_ORIGIN",
    "DEV_SERVER_PORT",
    "PORT",
    "HOST",
];

/// Serialized, self-restoring view of the process environment for tests.
///
/// Holding the scope holds `ENV_LOCK`; every variable touched through it is
/// put back when the scope drops.
pub(crate) struct EnvScope {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvScope {
    /// Acquire the lock and start from an environment with none of the
    /// echo variables set.
    pub(crate) fn clean() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut scope = Self {
            saved: Vec::new(),
            _lock: lock,
        };
        for key in ECHO_ENV_VARS {
            scope.unset(key);
        }
        scope
    }

    fn remember(&mut self, key: &'static str) {
        if self.saved.iter().all(|(saved, _)| *saved != key) {
            self.saved.push((key, std::env::var(key).ok()));
        }
    }

    pub(crate) fn set(&mut self, key: &'static str, value: &str) {
        self.remember(key);
        // SAFETY: test-only; ENV_LOCK is held for the scope's lifetime.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    pub(crate) fn unset(&mut self, key: &'static str) {
        self.remember(key);
        // SAFETY: test-only; ENV_LOCK is held for the scope's lifetime.
        unsafe {
            std::env::remove_var(key);
        }
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..).rev() {
            // SAFETY: test-only restoration while ENV_LOCK is still held.
            unsafe {
                match previous {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
