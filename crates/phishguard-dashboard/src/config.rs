//! Compile-time configuration
//!
//! CSR builds have no runtime environment, so configuration is baked in at
//! compile time via `option_env!`.

/// Backend base URL when `PHISHGUARD_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// localStorage slot holding the bearer token between page loads.
pub const TOKEN_STORAGE_KEY: &str = "phishguard.token";

pub fn api_base_url() -> &'static str {
    option_env!("PHISHGUARD_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Whether failed backend calls degrade to synthesized demo data.
///
/// On by default; building with `PHISHGUARD_DISABLE_DEMO` set makes failures
/// surface as an unavailable state instead of placeholder results.
pub fn demo_fallback_enabled() -> bool {
    option_env!("PHISHGUARD_DISABLE_DEMO").is_none()
}
