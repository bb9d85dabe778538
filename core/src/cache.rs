//! Best-effort, process-wide response cache installation.
//!
//! # Design
//! A passive accelerator: installing the cache may improve latency of
//! repeated GETs but must never change delivered results, and a failed
//! installation must never surface to the caller. The current transport
//! stack has no HTTP response cache facility, so installation validates
//! the cache directory and records the configuration process-wide; the
//! never-fail contract and the once-per-process idempotence are the
//! observable behavior.

use std::path::PathBuf;
use std::sync::OnceLock;

use log::debug;
use serde::{Deserialize, Serialize};

/// Default cache capacity: 10 MiB.
pub const DEFAULT_CACHE_SIZE: u64 = 10 * 1024 * 1024;

/// Where the response cache lives and how large it may grow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    pub directory: PathBuf,
    pub max_size_bytes: u64,
}

impl CacheConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            max_size_bytes: DEFAULT_CACHE_SIZE,
        }
    }
}

static INSTALLED: OnceLock<CacheConfig> = OnceLock::new();

/// Install the process-wide response cache.
///
/// Best effort: failures are swallowed and exchanges simply proceed
/// uncached. Installing a second time keeps the first configuration.
/// Invoked once at process start; there is no teardown.
pub fn install(config: CacheConfig) {
    if let Err(err) = try_install(config) {
        debug!("response cache unavailable: {err}");
    }
}

fn try_install(config: CacheConfig) -> std::io::Result<()> {
    std::fs::create_dir_all(&config.directory)?;
    let _ = INSTALLED.set(config);
    Ok(())
}

/// The configuration recorded by the first successful [`install`], if any.
pub fn installed() -> Option<&'static CacheConfig> {
    INSTALLED.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("courier-cache-{}-{name}", std::process::id()))
    }

    #[test]
    fn install_twice_keeps_first_configuration() {
        let first = CacheConfig::new(scratch_dir("first"));
        install(first.clone());
        install(CacheConfig::new(scratch_dir("second")));
        assert_eq!(installed(), Some(&first));
    }

    #[test]
    fn install_failure_is_swallowed() {
        let file = scratch_dir("blocker");
        std::fs::write(&file, b"x").unwrap();
        // A directory under a regular file cannot be created.
        install(CacheConfig::new(file.join("sub")));
    }
}
