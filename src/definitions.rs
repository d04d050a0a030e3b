//! Standard error kinds.
//!
//! # Taxonomy
//!
//! The catalog is a forest rooted at `CommonError`. Most kinds declare no
//! status of their own and inherit the nearest declared status up the chain:
//!
//! ```text
//! CommonError (500)
//! ├── NotFoundError (404)
//! ├── NotImplementedError (501)
//! ├── ArgumentInvalidError (400)
//! ├── AuthError (403)
//! │   ├── AuthenticationRequiredError (401)
//! │   ├── NoAccessError
//! │   │   ├── NoAccessFileError
//! │   │   └── NoAccessDirectoryError
//! │   └── OperationNotPermittedError
//! └── ExternalServiceError
//!     └── UnavailableError
//! ```
//!
//! # Governance
//!
//! Names are unique across the catalog; the `tests` module at the bottom of
//! this file fails the build when a duplicate or a dangling parent is added.

use crate::define_error_kinds;
use crate::ErrorKind;

// -----------------------------------------------------------------------------
// Root & general-purpose
// -----------------------------------------------------------------------------
define_error_kinds! {
    /// Base of every standard kind.
    COMMON_ERROR = ("CommonError", root, 500),
    /// A named resource or entity is not present.
    NOT_FOUND_ERROR = ("NotFoundError", "CommonError", 404),
    /// The requested operation is not implemented.
    NOT_IMPLEMENTED_ERROR = ("NotImplementedError", "CommonError", 501),
    /// A function or endpoint argument has an invalid value.
    ARGUMENT_INVALID_ERROR = ("ArgumentInvalidError", "CommonError", 400),
}

// -----------------------------------------------------------------------------
// Authentication & authorization
// -----------------------------------------------------------------------------
define_error_kinds! {
    /// Generic authorization failure.
    AUTH_ERROR = ("AuthError", "CommonError", 403),
    /// The resource requires an authenticated user.
    AUTHENTICATION_REQUIRED_ERROR = ("AuthenticationRequiredError", "AuthError", 401),
    /// The user lacks rights to access a resource.
    NO_ACCESS_ERROR = ("NoAccessError", "AuthError"),
    /// The user lacks rights to access a file.
    NO_ACCESS_FILE_ERROR = ("NoAccessFileError", "NoAccessError"),
    /// The user lacks rights to access a directory.
    NO_ACCESS_DIRECTORY_ERROR = ("NoAccessDirectoryError", "NoAccessError"),
    /// The user lacks rights to perform an operation.
    OPERATION_NOT_PERMITTED_ERROR = ("OperationNotPermittedError", "AuthError"),
}

// -----------------------------------------------------------------------------
// External services
// -----------------------------------------------------------------------------
define_error_kinds! {
    /// A remote service failed.
    EXTERNAL_SERVICE_ERROR = ("ExternalServiceError", "CommonError"),
    /// A remote resource exists but is temporarily unavailable.
    UNAVAILABLE_ERROR = ("UnavailableError", "ExternalServiceError"),
}

/// Every standard kind, parents before children.
pub const STANDARD_KINDS: &[ErrorKind] = &[
    COMMON_ERROR,
    NOT_FOUND_ERROR,
    NOT_IMPLEMENTED_ERROR,
    ARGUMENT_INVALID_ERROR,
    AUTH_ERROR,
    AUTHENTICATION_REQUIRED_ERROR,
    NO_ACCESS_ERROR,
    NO_ACCESS_FILE_ERROR,
    NO_ACCESS_DIRECTORY_ERROR,
    OPERATION_NOT_PERMITTED_ERROR,
    EXTERNAL_SERVICE_ERROR,
    UNAVAILABLE_ERROR,
];

/// Look up a standard kind by name.
pub fn find_kind(name: &str) -> Option<&'static ErrorKind> {
    STANDARD_KINDS.iter().find(|kind| kind.name() == name)
}

/// Names of all standard kinds, in catalog order.
pub fn valid_error_names() -> impl Iterator<Item = &'static str> {
    STANDARD_KINDS.iter().map(ErrorKind::name)
}

/// True if `name` is a standard kind.
#[inline]
pub fn is_valid_error_name(name: &str) -> bool {
    find_kind(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for name in valid_error_names() {
            assert!(seen.insert(name), "duplicate kind name {name}");
        }
    }

    #[test]
    fn parents_precede_children() {
        for (idx, kind) in STANDARD_KINDS.iter().enumerate() {
            if let Some(parent) = kind.specializes() {
                let parent_idx = STANDARD_KINDS
                    .iter()
                    .position(|k| k.name() == parent)
                    .unwrap_or_else(|| panic!("{} has dangling parent {parent}", kind.name()));
                assert!(parent_idx < idx, "{} listed before its parent", kind.name());
            }
        }
    }

    #[test]
    fn single_root() {
        let roots: Vec<_> = STANDARD_KINDS.iter().filter(|k| k.is_root()).collect();
        assert_eq!(roots, vec![&COMMON_ERROR]);
    }

    #[test]
    fn name_lookup() {
        assert!(is_valid_error_name("NoAccessFileError"));
        assert!(!is_valid_error_name("mapErrorsToHTTPStatus"));
        assert_eq!(find_kind("NotFoundError"), Some(&NOT_FOUND_ERROR));
    }
}
