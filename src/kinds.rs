//! Error kind descriptors - the identity layer of the taxonomy.
//!
//! An [`ErrorKind`] names one error variant, the variant it specializes, and
//! optionally a status it declares for itself. Descriptors carry no behavior;
//! message generation lives with the concrete families in [`crate::catalog`]
//! and status inheritance is computed by [`crate::registry`].
//!
//! # Construction APIs
//!
//! - `const_new`: for const statics (a panic here is a compile error)
//! - `checked_new`: for runtime construction, returns a [`KindViolation`]
//!
//! # Example
//!
//! ```rust
//! use common_errors::{ErrorKind, define_error_kinds};
//!
//! define_error_kinds! {
//!     QUOTA_ERROR = ("QuotaError", "CommonError", 429),
//!     DAILY_QUOTA_ERROR = ("DailyQuotaError", "QuotaError"),
//! }
//!
//! assert_eq!(QUOTA_ERROR.status(), Some(429));
//! assert_eq!(DAILY_QUOTA_ERROR.specializes(), Some("QuotaError"));
//! ```

use std::fmt;

/// Descriptor for one error variant.
///
/// The name is the sole key used by the
/// registry for both parent and status lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorKind {
    name: &'static str,
    specializes: Option<&'static str>,
    status: Option<u16>,
}

impl ErrorKind {
    /// Create a descriptor with compile-time validation.
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - `name` is empty
    /// - the kind specializes itself
    /// - the declared status is outside 100-599
    ///
    /// In const contexts these panics surface as compile errors.
    #[inline]
    pub const fn const_new(
        name: &'static str,
        specializes: Option<&'static str>,
        status: Option<u16>,
    ) -> Self {
        assert!(!name.is_empty(), "Error kind name must not be empty");

        if let Some(parent) = specializes {
            assert!(
                !const_str_eq(name, parent),
                "Error kind cannot specialize itself"
            );
        }

        if let Some(code) = status {
            assert!(code >= 100 && code <= 599, "Status must be 100-599");
        }

        Self {
            name,
            specializes,
            status,
        }
    }

    /// Create a descriptor with runtime validation.
    ///
    /// # Errors
    ///
    /// Returns the first [`KindViolation`] found.
    pub fn checked_new(
        name: &'static str,
        specializes: Option<&'static str>,
        status: Option<u16>,
    ) -> Result<Self, KindViolation> {
        if name.is_empty() {
            return Err(KindViolation::EmptyName);
        }

        if specializes == Some(name) {
            return Err(KindViolation::SelfSpecialization { name });
        }

        if let Some(code) = status {
            if !(100..=599).contains(&code) {
                return Err(KindViolation::StatusOutOfRange { name, status: code });
            }
        }

        Ok(Self {
            name,
            specializes,
            status,
        })
    }

    /// The ErrorTypeName.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the kind this one specializes, `None` for a root.
    #[inline]
    pub const fn specializes(&self) -> Option<&'static str> {
        self.specializes
    }

    /// Status declared by this kind itself (not inherited).
    #[inline]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// True when the kind has no parent.
    #[inline]
    pub const fn is_root(&self) -> bool {
        self.specializes.is_none()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Byte-wise string equality usable in const fns.
const fn const_str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Rejected runtime descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KindViolation {
    /// Empty ErrorTypeName.
    #[error("error kind name must not be empty")]
    EmptyName,
    /// The kind names itself as parent.
    #[error("error kind {name} cannot specialize itself")]
    SelfSpecialization {
        /// Offending kind.
        name: &'static str,
    },
    /// Declared status is not an HTTP status.
    #[error("error kind {name} declares status {status} (must be 100-599)")]
    StatusOutOfRange {
        /// Offending kind.
        name: &'static str,
        /// Declared status.
        status: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn const_construction() {
        const KIND: ErrorKind = ErrorKind::const_new("TeapotError", Some("CommonError"), Some(418));
        assert_eq!(KIND.name(), "TeapotError");
        assert_eq!(KIND.specializes(), Some("CommonError"));
        assert_eq!(KIND.status(), Some(418));
        assert!(!KIND.is_root());
        assert_eq!(KIND.to_string(), "TeapotError");
    }

    #[test]
    fn checked_rejects_self_specialization() {
        let result = ErrorKind::checked_new("LoopError", Some("LoopError"), None);
        assert_eq!(
            result,
            Err(KindViolation::SelfSpecialization { name: "LoopError" })
        );
    }

    #[test]
    fn checked_rejects_bad_status() {
        let result = ErrorKind::checked_new("OddError", None, Some(42));
        assert!(matches!(
            result,
            Err(KindViolation::StatusOutOfRange { status: 42, .. })
        ));
        assert_eq!(
            ErrorKind::checked_new("", None, None),
            Err(KindViolation::EmptyName)
        );
    }

    #[test]
    fn const_str_eq_compares_bytes() {
        assert!(const_str_eq("abc", "abc"));
        assert!(!const_str_eq("abc", "abd"));
        assert!(!const_str_eq("abc", "ab"));
    }
}
