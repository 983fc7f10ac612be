//! Environment-driven configuration.

use sealtrack_ledger::SealTypeSet;

/// Environment variable overriding the seal type enumeration,
/// comma-separated (`SEAL_TYPES="O-Ring,Gasket"`).
pub const SEAL_TYPES_ENV: &str = "SEAL_TYPES";

/// Read the configured seal types, falling back to the built-in list.
pub fn seal_types_from_env() -> SealTypeSet {
    match std::env::var(SEAL_TYPES_ENV) {
        Ok(raw) => SealTypeSet::new(raw.split(',')),
        Err(_) => {
            tracing::debug!("{SEAL_TYPES_ENV} not set; using built-in seal types");
            SealTypeSet::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so the override and the
    // fallback are exercised in one test to avoid interleaving.
    #[test]
    fn env_override_and_fallback() {
        unsafe { std::env::remove_var(SEAL_TYPES_ENV) };
        assert_eq!(seal_types_from_env(), SealTypeSet::default());

        unsafe { std::env::set_var(SEAL_TYPES_ENV, "O-Ring, Gasket") };
        let set = seal_types_from_env();
        assert!(set.contains("O-Ring"));
        assert!(set.contains("Gasket"));
        assert!(!set.contains("Standard Soft"));
        unsafe { std::env::remove_var(SEAL_TYPES_ENV) };
    }
}
