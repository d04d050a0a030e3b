//! Convenience macros for declaring error kinds.
//!
//! Kinds are declared as const statics so that the whole catalog is a
//! declarative table. Registration into a [`crate::TaxonomyRegistry`] is a
//! separate, explicit step; declaring a kind has no side effects.
//!
//! # Forms
//!
//! ```rust
//! # use common_errors::define_error_kind;
//! define_error_kind!(APP_ERROR, "AppError", root, 500);        // root with a status
//! define_error_kind!(BILLING_ERROR, "BillingError", "AppError"); // inherits its status
//! define_error_kind!(CARD_DECLINED_ERROR, "CardDeclinedError", "BillingError", 402);
//! define_error_kind!(LOOSE_ERROR, "LooseError");                 // root, falls back to 500
//!
//! assert_eq!(APP_ERROR.status(), Some(500));
//! assert_eq!(BILLING_ERROR.status(), None);
//! assert!(LOOSE_ERROR.is_root());
//! ```
//!
//! Invalid declarations (self-specialization, a status outside 100-599) fail
//! to compile:
//!
//! ```rust,compile_fail
//! # use common_errors::define_error_kind;
//! define_error_kind!(BROKEN_ERROR, "BrokenError", "BrokenError");
//! let _ = BROKEN_ERROR.name();
//! ```

/// Define a single error kind as a `pub const`.
#[macro_export]
macro_rules! define_error_kind {
    ($(#[$meta:meta])* $ident:ident, $name:literal, root, $status:expr) => {
        $(#[$meta])*
        pub const $ident: $crate::ErrorKind =
            $crate::ErrorKind::const_new($name, None, Some($status));
    };
    ($(#[$meta:meta])* $ident:ident, $name:literal, $parent:literal, $status:expr) => {
        $(#[$meta])*
        pub const $ident: $crate::ErrorKind =
            $crate::ErrorKind::const_new($name, Some($parent), Some($status));
    };
    ($(#[$meta:meta])* $ident:ident, $name:literal, $parent:literal) => {
        $(#[$meta])*
        pub const $ident: $crate::ErrorKind =
            $crate::ErrorKind::const_new($name, Some($parent), None);
    };
    ($(#[$meta:meta])* $ident:ident, $name:literal) => {
        $(#[$meta])*
        pub const $ident: $crate::ErrorKind = $crate::ErrorKind::const_new($name, None, None);
    };
}

/// Define several error kinds at once.
///
/// Each entry takes the same arguments as [`define_error_kind!`], wrapped in
/// parentheses.
///
/// # Example
///
/// ```rust
/// # use common_errors::define_error_kinds;
/// define_error_kinds! {
///     /// Root of the storage family.
///     STORAGE_ERROR = ("StorageError", "CommonError", 500),
///     DISK_FULL_ERROR = ("DiskFullError", "StorageError", 507),
///     BUCKET_MISSING_ERROR = ("BucketMissingError", "StorageError"),
/// }
///
/// assert_eq!(DISK_FULL_ERROR.status(), Some(507));
/// ```
#[macro_export]
macro_rules! define_error_kinds {
    ($( $(#[$meta:meta])* $ident:ident = ( $($spec:tt)+ ) ),+ $(,)?) => {
        $(
            $crate::define_error_kind!($(#[$meta])* $ident, $($spec)+);
        )+
    };
}

/// Builder methods for the [`crate::CommonOptions`] embedded in an options struct.
///
/// The struct must have a `common: CommonOptions` field.
#[macro_export]
macro_rules! impl_common_options {
    ($ty:ty) => {
        impl $ty {
            /// Replace the generated message entirely.
            #[inline]
            pub fn message(mut self, message: impl Into<String>) -> Self {
                self.common.message = Some(message.into());
                self
            }

            /// Override the status resolved from the taxonomy.
            #[inline]
            pub fn status(mut self, status: u16) -> Self {
                self.common.status = Some(status);
                self
            }

            /// Set the machine code (e.g. `ENOENT`).
            #[inline]
            pub fn code(mut self, code: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.common.code = Some(code.into());
                self
            }

            /// Attach the underlying cause.
            #[inline]
            pub fn cause(
                mut self,
                cause: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
            ) -> Self {
                self.common.cause = Some(cause.into());
                self
            }
        }
    };
}
