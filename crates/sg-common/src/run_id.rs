//! Process-level run ID plus fresh per-request IDs.
//!
//! The run ID is a single ULID minted at first access; it is logged at
//! startup so every line of a service run can be correlated. `generate`
//! mints a fresh ULID per HTTP request for the request-id middleware.

use once_cell::sync::Lazy;
use ulid::Ulid;

static RUN_ID: Lazy<String> = Lazy::new(|| Ulid::new().to_string());

/// The process-level run ID (stable for the whole process lifetime,
/// time-ordered, 26 chars, URL-safe).
#[inline]
pub fn get() -> &'static str {
    &RUN_ID
}

/// A fresh ULID, used for per-request IDs.
#[inline]
pub fn generate() -> String {
    Ulid::new().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_same_value() {
        assert_eq!(get(), get());
        assert_eq!(get().len(), 26);
    }

    #[test]
    fn generate_returns_unique_values() {
        let a = generate();
        let b = generate();
        assert_ne!(a, b);
        assert_eq!(a.len(), 26);
    }
}
