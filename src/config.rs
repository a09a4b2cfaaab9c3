use crate::models::Version;
use std::sync::OnceLock;

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

fn parse_env_version(name: &str, default: u8) -> Version {
    Version::new(parse_env_u8(name, default))
        .or_else(|_| Version::new(default))
        .unwrap_or(Version::MIN)
}

static PARALLEL: OnceLock<bool> = OnceLock::new();

/// Compute multi-version tables on the rayon pool (`QR_ALIGN_PARALLEL`, default on)
pub fn parallel_enabled() -> bool {
    *PARALLEL.get_or_init(|| parse_env_bool_u8("QR_ALIGN_PARALLEL", true))
}

static FIRST_VERSION: OnceLock<Version> = OnceLock::new();

/// First version emitted by default (`QR_ALIGN_FIRST_VERSION`, default 2)
pub fn default_first_version() -> Version {
    *FIRST_VERSION.get_or_init(|| parse_env_version("QR_ALIGN_FIRST_VERSION", 2))
}

static LAST_VERSION: OnceLock<Version> = OnceLock::new();

/// Last version emitted by default (`QR_ALIGN_LAST_VERSION`, default 40)
pub fn default_last_version() -> Version {
    *LAST_VERSION.get_or_init(|| parse_env_version("QR_ALIGN_LAST_VERSION", 40))
}
