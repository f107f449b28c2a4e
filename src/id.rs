//! Opaque record identifiers.

use crate::error::AppError;

/// Length of generated ids. With the 64-symbol alphabet this is 126 bits of entropy.
pub const ID_LEN: usize = 21;

/// Produces ids for records created without one. No uniqueness check against the store.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Result<String, AppError>;
}

/// Nano ID over the URL-safe alphabet `A-Za-z0-9_-`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NanoId;

impl IdGenerator for NanoId {
    fn generate(&self) -> Result<String, AppError> {
        // nanoid panics when the OS entropy source cannot be read.
        std::panic::catch_unwind(|| nanoid::nanoid!(ID_LEN, &nanoid::alphabet::SAFE))
            .map_err(|_| AppError::Generation("entropy source unavailable".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_url_safe_and_fixed_length() {
        let id = NanoId.generate().unwrap();
        assert_eq!(id.len(), ID_LEN);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
    }

    #[test]
    fn ids_do_not_repeat() {
        let ids: HashSet<String> = (0..1000).map(|_| NanoId.generate().unwrap()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
