//! # Common Errors
//!
//! A shared error taxonomy: a small catalog of error kinds arranged in a
//! specialization forest, HTTP-style statuses inherited down that forest, and
//! consistent human-readable messages generated from optional parameters.
//!
//! ## Design
//!
//! 1. **Kinds are data.** Each kind is a const [`ErrorKind`] descriptor
//!    (name, parent, optional status). There is one concrete error type,
//!    [`CommonError`], stamped with a kind name.
//! 2. **Statuses are inherited.** A kind without its own status takes the
//!    nearest declared status up its chain, or 500.
//! 3. **The taxonomy is an explicit value.** [`TaxonomyRegistry`] can be built
//!    and queried locally; the process-wide instance is frozen on first use.
//! 4. **Messages degrade gracefully.** Every parameter may be omitted or
//!    hidden; the generator substitutes a neutral phrase.
//!
//! ## Quick Start
//!
//! ```rust
//! use common_errors::{CommonError, ArgumentInvalidOptions, Result};
//!
//! fn set_limit(limit: i64) -> Result<()> {
//!     if limit <= 0 {
//!         return Err(CommonError::argument_invalid(
//!             ArgumentInvalidOptions::new()
//!                 .argument_name("limit")
//!                 .argument_value(limit)
//!                 .issue("must be positive"),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = set_limit(-3).unwrap_err();
//! assert_eq!(err.name(), "ArgumentInvalidError");
//! assert_eq!(err.status(), 400);
//! assert_eq!(err.status_name(), "Bad Request");
//! assert_eq!(
//!     err.message(),
//!     "Function argument 'limit' with value '-3' must be positive."
//! );
//! ```
//!
//! ## Extending the taxonomy
//!
//! ```rust
//! use common_errors::{define_error_kinds, CommonError, TaxonomyRegistry};
//!
//! define_error_kinds! {
//!     QUOTA_ERROR = ("QuotaError", "CommonError", 429),
//!     DAILY_QUOTA_ERROR = ("DailyQuotaError", "QuotaError"),
//! }
//!
//! let mut taxonomy = TaxonomyRegistry::standard();
//! taxonomy.register_kind(&QUOTA_ERROR).unwrap();
//! taxonomy.register_kind(&DAILY_QUOTA_ERROR).unwrap();
//!
//! let err = CommonError::new_in(&taxonomy, "DailyQuotaError", "Daily quota used up.");
//! assert_eq!(err.status(), 429);
//! assert_eq!(err.status_name(), "Too Many Requests");
//! ```
//!
//! ## Features
//!
//! - `trusted_debug`: [`ErrorLog::format_for_trusted_debug`] (debug builds only)

#![warn(missing_docs)]
#![warn(clippy::all)]

use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::result;

pub mod catalog;
pub mod convenience;
pub mod definitions;
pub mod format;
pub mod kinds;
pub mod logging;
pub mod message;
pub mod registry;
pub mod status;

pub use catalog::*;
pub use definitions::*;
pub use format::*;
pub use kinds::*;
pub use logging::*;
pub use message::*;
pub use registry::{TaxonomyError, TaxonomyRegistry};
pub use status::status_name_for;

/// Type alias for Results using our error type.
pub type Result<T> = result::Result<T, CommonError>;

/// Boxed underlying cause.
pub type Cause = Box<dyn Error + Send + Sync + 'static>;

/// Options shared by every error family.
///
/// All fields are optional. `message` replaces a generated message, `status`
/// replaces the status resolved from the taxonomy.
#[derive(Debug, Default)]
pub struct CommonOptions {
    /// Explicit message.
    pub message: Option<String>,
    /// Explicit status.
    pub status: Option<u16>,
    /// Machine code, e.g. `ENOENT`.
    pub code: Option<Cow<'static, str>>,
    /// Underlying cause.
    pub cause: Option<Cause>,
}

impl CommonOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message.
    #[inline]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the status.
    #[inline]
    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the code.
    #[inline]
    pub fn code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the cause.
    #[inline]
    pub fn cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}

/// The one concrete error type.
///
/// `name` identifies the kind. `status` is either explicit or resolved from
/// the taxonomy at construction, and `status_name` always agrees with it.
///
/// `Display` writes the message only. `Debug` lists metadata keys but not
/// their values; the cause is shown through its own `Debug`.
pub struct CommonError {
    name: Cow<'static, str>,
    message: String,
    status: u16,
    status_name: &'static str,
    code: Option<Cow<'static, str>>,
    cause: Option<Cause>,
    metadata: SmallVec<[(&'static str, Cow<'static, str>); 4]>,
}

impl CommonError {
    /// Build an error of kind `name`, resolved against the global registry.
    pub fn new(name: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::new_in(registry::global(), name, message)
    }

    /// Build an error of kind `name`, resolved against `registry`.
    pub fn new_in(
        registry: &TaxonomyRegistry,
        name: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Self {
        Self::with_options_in(registry, name, message, CommonOptions::default())
    }

    /// Build with shared options against the global registry.
    ///
    /// `options.message`, when set, replaces `message`.
    pub fn with_options(
        name: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        options: CommonOptions,
    ) -> Self {
        Self::with_options_in(registry::global(), name, message, options)
    }

    /// Build with shared options against `registry`.
    pub fn with_options_in(
        registry: &TaxonomyRegistry,
        name: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        options: CommonOptions,
    ) -> Self {
        let name = name.into();
        let status = options
            .status
            .unwrap_or_else(|| registry.resolve_status(&name));

        Self {
            message: options.message.unwrap_or_else(|| message.into()),
            status,
            status_name: status::status_name_for(status),
            code: options.code,
            cause: options.cause,
            metadata: SmallVec::new(),
            name,
        }
    }

    /// Build from a family template against the global registry.
    pub fn from_template<T: ErrorTemplate>(template: T) -> Self {
        Self::from_template_in(registry::global(), template)
    }

    /// Build from a family template against `registry`.
    ///
    /// The template's message is generated only when no explicit message
    /// was given; its default code applies only when no code was given.
    pub fn from_template_in<T: ErrorTemplate>(registry: &TaxonomyRegistry, template: T) -> Self {
        let kind = template.kind();
        let default_code = template.default_code();
        let generated = match template.common().message {
            Some(_) => String::new(),
            None => template.generate_message(),
        };

        let mut options = template.into_common();
        if options.code.is_none() {
            options.code = default_code.map(Cow::Borrowed);
        }

        Self::with_options_in(registry, kind.name(), generated, options)
    }

    /// Replace the status; `status_name` follows.
    #[inline]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self.status_name = status::status_name_for(status);
        self
    }

    /// Set the machine code.
    #[inline]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach the underlying cause.
    #[inline]
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Attach key/value context for logs. Never part of the message.
    #[inline]
    pub fn with_metadata(mut self, key: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        self.metadata.push((key, value.into()));
        self
    }

    /// Kind name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP-style status.
    #[inline]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Canonical label of [`status`](Self::status).
    #[inline]
    pub const fn status_name(&self) -> &'static str {
        self.status_name
    }

    /// Machine code.
    #[inline]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Underlying cause.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Take the cause out of the error.
    #[inline]
    pub fn into_cause(mut self) -> Option<Cause> {
        self.cause.take()
    }

    /// True if this error's kind is `ancestor` or specializes it, per the
    /// global registry.
    #[inline]
    pub fn is_a(&self, ancestor: &str) -> bool {
        self.is_a_in(registry::global(), ancestor)
    }

    /// [`is_a`](Self::is_a) against an explicit registry.
    #[inline]
    pub fn is_a_in(&self, registry: &TaxonomyRegistry, ancestor: &str) -> bool {
        registry.is_a(&self.name, ancestor)
    }

    /// True if this error is exactly of kind `kind`.
    #[inline]
    pub fn is_kind(&self, kind: &ErrorKind) -> bool {
        self.name == kind.name()
    }

    /// Plain, serializable view: name, message, status, statusName, code.
    ///
    /// The cause and metadata are never included.
    #[inline]
    pub fn to_object(&self) -> ErrorObject<'_> {
        ErrorObject {
            name: &self.name,
            message: &self.message,
            status: self.status,
            status_name: self.status_name,
            code: self.code.as_deref(),
        }
    }

    /// Borrowed log entry. Cannot outlive the error.
    #[inline]
    pub fn internal_log(&self) -> ErrorLog<'_> {
        ErrorLog {
            name: &self.name,
            status: self.status,
            status_name: self.status_name,
            code: self.code.as_deref(),
            message: &self.message,
            metadata: &self.metadata,
            has_cause: self.cause.is_some(),
        }
    }

    /// Callback-style access to the log entry.
    ///
    /// ```rust
    /// # use common_errors::CommonError;
    /// let err = CommonError::new("NotImplementedError", "Not yet.");
    /// let status = err.with_internal_log(|log| log.status());
    /// assert_eq!(status, 501);
    /// ```
    #[inline]
    pub fn with_internal_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ErrorLog<'_>) -> R,
    {
        let log = self.internal_log();
        f(&log)
    }
}

/// Serializable projection of a [`CommonError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorObject<'a> {
    /// Kind name.
    pub name: &'a str,
    /// Message.
    pub message: &'a str,
    /// Status.
    pub status: u16,
    /// Status label.
    pub status_name: &'static str,
    /// Code, omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'a str>,
}

impl Serialize for CommonError {
    fn serialize<S: Serializer>(&self, serializer: S) -> result::Result<S::Ok, S::Error> {
        self.to_object().serialize(serializer)
    }
}

// Causes keep their own `Debug`, so redaction of a cause is up to its type.
impl fmt::Debug for CommonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metadata_keys: SmallVec<[&str; 4]> = self.metadata.iter().map(|(k, _)| *k).collect();
        f.debug_struct("CommonError")
            .field("name", &self.name)
            .field("status", &self.status)
            .field("status_name", &self.status_name)
            .field("code", &self.code)
            .field("message", &self.message)
            .field("metadata", &metadata_keys)
            .field("cause", &self.cause)
            .finish()
    }
}

impl fmt::Display for CommonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for CommonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}
