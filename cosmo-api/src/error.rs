use thiserror::Error;

use crate::Capability;

/// Errors that may occur when querying a cosmology.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CosmologyError {
    /// The quantity is not derivable from this backend.
    ///
    /// Distinct from a computed zero or NaN: the backend does not implement
    /// the quantity at all, regardless of the redshift.
    #[error("`{capability}` is not supported by this cosmology")]
    Unsupported { capability: Capability },

    /// A parameter is undefined, inconsistent, or outside the valid domain.
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

impl CosmologyError {
    /// Creates an [`CosmologyError::Unsupported`] error for `capability`.
    #[must_use]
    pub fn unsupported(capability: Capability) -> Self {
        Self::Unsupported { capability }
    }

    /// Creates an [`CosmologyError::InvalidParameter`] error.
    #[must_use]
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error marks an unsupported quantity.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_quantity() {
        let err = CosmologyError::unsupported(Capability::Age);
        assert_eq!(err.to_string(), "`age` is not supported by this cosmology");
        assert!(err.is_unsupported());

        let err = CosmologyError::invalid("Omega_b", "baryon density is undefined");
        assert_eq!(
            err.to_string(),
            "invalid parameter `Omega_b`: baryon density is undefined"
        );
        assert!(!err.is_unsupported());
    }
}
