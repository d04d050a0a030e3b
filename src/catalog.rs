//! Concrete error families.
//!
//! Each family is an options struct implementing [`ErrorTemplate`]: it names
//! its [`ErrorKind`], builds its default message from its parameters, and
//! hands everything else to [`CommonError`] unchanged.
//!
//! # Example
//!
//! ```rust
//! use common_errors::{CommonError, ErrorTemplate, NotFoundOptions, UnavailableOptions};
//!
//! let err = NotFoundOptions::new().target("invoice 1138").build();
//! assert_eq!(err.message(), "Could not find invoice 1138.");
//! assert_eq!(err.status(), 404);
//! assert_eq!(err.code(), Some("ENOENT"));
//!
//! let err = CommonError::unavailable(
//!     UnavailableOptions::new()
//!         .target("customer db")
//!         .issue("off line for maintenance")
//!         .expected_time("after 2:00"),
//! );
//! assert_eq!(
//!     err.message(),
//!     "The customer db is off line for maintenance; try again after 2:00."
//! );
//! ```

use crate::definitions::{
    ARGUMENT_INVALID_ERROR, AUTHENTICATION_REQUIRED_ERROR, AUTH_ERROR, EXTERNAL_SERVICE_ERROR,
    NOT_FOUND_ERROR, NOT_IMPLEMENTED_ERROR, NO_ACCESS_DIRECTORY_ERROR, NO_ACCESS_ERROR,
    NO_ACCESS_FILE_ERROR, OPERATION_NOT_PERMITTED_ERROR, UNAVAILABLE_ERROR,
};
use crate::format::{format_value, MessageValue};
use crate::message::{
    auth_phrase, describe_file, no_access_phrase, not_found_phrase, quoted, FileType,
    MessageOptions, Param,
};
use crate::registry::TaxonomyRegistry;
use crate::{impl_common_options, CommonError, CommonOptions, ErrorKind};

/// A family of errors sharing a kind and a message template.
pub trait ErrorTemplate: MessageOptions {
    /// Kind stamped on the built error.
    fn kind(&self) -> &'static ErrorKind;

    /// Code used when the caller supplies none.
    fn default_code(&self) -> Option<&'static str> {
        None
    }

    /// Message built from the included parameters. Must be total.
    fn generate_message(&self) -> String;

    /// Shared options.
    fn common(&self) -> &CommonOptions;

    /// Give up the shared options to the base constructor.
    fn into_common(self) -> CommonOptions;

    /// Build against the process-wide registry.
    fn build(self) -> CommonError
    where
        Self: Sized,
    {
        CommonError::from_template(self)
    }

    /// Build against an explicit registry.
    fn build_in(self, registry: &TaxonomyRegistry) -> CommonError
    where
        Self: Sized,
    {
        CommonError::from_template_in(registry, self)
    }
}

macro_rules! template_plumbing {
    () => {
        fn common(&self) -> &CommonOptions {
            &self.common
        }

        fn into_common(self) -> CommonOptions {
            self.common
        }
    };
}

macro_rules! param_setters {
    ($ty:ty { $( $(#[$meta:meta])* $field:ident : $param_ty:ty ),+ $(,)? }) => {
        impl $ty {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $field(mut self, value: impl Into<Param<$param_ty>>) -> Self {
                    self.$field = value.into();
                    self
                }
            )+
        }
    };
}

// ============================================================================
// Not found
// ============================================================================

/// Options for `NotFoundError`.
#[derive(Debug, Default)]
pub struct NotFoundOptions {
    /// Name or short description of the missing resource.
    pub target: Param<String>,
    /// Shared options.
    pub common: CommonOptions,
}

impl NotFoundOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }
}

param_setters!(NotFoundOptions {
    /// Name the missing resource.
    target: String,
});
impl_common_options!(NotFoundOptions);

impl MessageOptions for NotFoundOptions {
    fn param_included(&self, name: &str) -> Option<bool> {
        match name {
            "target" => Some(self.target.is_included()),
            _ => None,
        }
    }
}

impl ErrorTemplate for NotFoundOptions {
    fn kind(&self) -> &'static ErrorKind {
        &NOT_FOUND_ERROR
    }

    fn default_code(&self) -> Option<&'static str> {
        Some("ENOENT")
    }

    fn generate_message(&self) -> String {
        not_found_phrase(self.target.for_message().map(String::as_str))
    }

    template_plumbing!();
}

// ============================================================================
// Not implemented
// ============================================================================

/// Options for `NotImplementedError`.
#[derive(Debug, Default)]
pub struct NotImplementedOptions {
    /// Function, endpoint, or service the caller tried to invoke.
    pub target: Param<String>,
    /// Shared options.
    pub common: CommonOptions,
}

impl NotImplementedOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }
}

param_setters!(NotImplementedOptions {
    /// Name what is not implemented.
    target: String,
});
impl_common_options!(NotImplementedOptions);

impl MessageOptions for NotImplementedOptions {
    fn param_included(&self, name: &str) -> Option<bool> {
        match name {
            "target" => Some(self.target.is_included()),
            _ => None,
        }
    }
}

impl ErrorTemplate for NotImplementedOptions {
    fn kind(&self) -> &'static ErrorKind {
        &NOT_IMPLEMENTED_ERROR
    }

    fn generate_message(&self) -> String {
        match self.target.for_message() {
            None => String::from("Action not currently implemented."),
            Some(target) => format!("{} is not currently implemented.", quoted(target)),
        }
    }

    template_plumbing!();
}

// ============================================================================
// Argument invalid
// ============================================================================

/// Options for `ArgumentInvalidError`.
#[derive(Debug, Default)]
pub struct ArgumentInvalidOptions {
    /// Name of the argument.
    pub argument_name: Param<String>,
    /// The rejected value.
    pub argument_value: Param<MessageValue>,
    /// What is wrong with it, e.g. `must be positive`.
    pub issue: Param<String>,
    /// Shared options.
    pub common: CommonOptions,
}

impl ArgumentInvalidOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the rejected value.
    #[inline]
    pub fn argument_value(mut self, value: impl Into<MessageValue>) -> Self {
        self.argument_value = Param::Shown(value.into());
        self
    }

    /// Attach the rejected value without showing it in the message.
    #[inline]
    pub fn hidden_argument_value(mut self, value: impl Into<MessageValue>) -> Self {
        self.argument_value = Param::Hidden(value.into());
        self
    }
}

param_setters!(ArgumentInvalidOptions {
    /// Name the argument.
    argument_name: String,
    /// Describe the problem.
    issue: String,
});
impl_common_options!(ArgumentInvalidOptions);

impl MessageOptions for ArgumentInvalidOptions {
    fn param_included(&self, name: &str) -> Option<bool> {
        match name {
            "argumentName" | "argument_name" => Some(self.argument_name.is_included()),
            "argumentValue" | "argument_value" => Some(self.argument_value.is_included()),
            "issue" => Some(self.issue.is_included()),
            _ => None,
        }
    }
}

impl ErrorTemplate for ArgumentInvalidOptions {
    fn kind(&self) -> &'static ErrorKind {
        &ARGUMENT_INVALID_ERROR
    }

    fn generate_message(&self) -> String {
        let mut message = String::from("Function argument");
        if let Some(name) = self.argument_name.for_message() {
            message.push(' ');
            message.push_str(&quoted(name));
        }

        let value = self
            .argument_value
            .for_message()
            .map(|value| quoted(&format_value(value)));

        match self.issue.for_message() {
            Some(issue) => {
                if let Some(value) = value {
                    message.push_str(" with value ");
                    message.push_str(&value);
                }
                message.push(' ');
                message.push_str(issue);
            }
            None => {
                message.push_str(" has invalid value");
                if let Some(value) = value {
                    message.push(' ');
                    message.push_str(&value);
                }
            }
        }

        message.push('.');
        message
    }

    template_plumbing!();
}

// ============================================================================
// Auth
// ============================================================================

/// Options for `AuthError`, `OperationNotPermittedError`, and
/// `AuthenticationRequiredError`.
#[derive(Debug)]
pub struct AuthOptions {
    kind: &'static ErrorKind,
    default_issue: &'static str,
    /// Short description of the action, defaults to `action`.
    pub action: Param<String>,
    /// Name or short description of the target.
    pub target: Param<String>,
    /// The auth issue, defaults per kind.
    pub issue: Param<String>,
    /// Shared options.
    pub common: CommonOptions,
}

impl AuthOptions {
    fn for_kind(kind: &'static ErrorKind, default_issue: &'static str) -> Self {
        Self {
            kind,
            default_issue,
            action: Param::Unset,
            target: Param::Unset,
            issue: Param::Unset,
            common: CommonOptions::default(),
        }
    }

    /// Generic `AuthError` options.
    pub fn new() -> Self {
        Self::for_kind(&AUTH_ERROR, "is not authorized")
    }

    /// `OperationNotPermittedError` options.
    pub fn operation_not_permitted() -> Self {
        Self::for_kind(&OPERATION_NOT_PERMITTED_ERROR, "is not permitted")
    }

    /// `AuthenticationRequiredError` options.
    pub fn authentication_required() -> Self {
        Self::for_kind(&AUTHENTICATION_REQUIRED_ERROR, "requires authentication")
    }
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self::new()
    }
}

param_setters!(AuthOptions {
    /// Describe the action.
    action: String,
    /// Name the target.
    target: String,
    /// Describe the issue.
    issue: String,
});
impl_common_options!(AuthOptions);

impl MessageOptions for AuthOptions {
    fn param_included(&self, name: &str) -> Option<bool> {
        match name {
            "action" => Some(self.action.is_included()),
            "target" => Some(self.target.is_included()),
            "issue" => Some(self.issue.is_included()),
            _ => None,
        }
    }
}

impl ErrorTemplate for AuthOptions {
    fn kind(&self) -> &'static ErrorKind {
        self.kind
    }

    fn generate_message(&self) -> String {
        let target = self.target.for_message().map(|t| quoted(t));
        auth_phrase(
            self.action.or_default_str("action"),
            target.as_deref(),
            self.issue.or_default_str(self.default_issue),
        )
    }

    template_plumbing!();
}

// ============================================================================
// No access
// ============================================================================

/// Options for `NoAccessError`.
#[derive(Debug, Default)]
pub struct NoAccessOptions {
    /// Name or short description of the resource, defaults to `resource`.
    pub resource: Param<String>,
    /// The access issue, defaults to `is denied`.
    pub issue: Param<String>,
    /// Shared options.
    pub common: CommonOptions,
}

impl NoAccessOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }
}

param_setters!(NoAccessOptions {
    /// Name the resource.
    resource: String,
    /// Describe the issue.
    issue: String,
});
impl_common_options!(NoAccessOptions);

impl MessageOptions for NoAccessOptions {
    fn param_included(&self, name: &str) -> Option<bool> {
        match name {
            "resource" => Some(self.resource.is_included()),
            "issue" => Some(self.issue.is_included()),
            _ => None,
        }
    }
}

impl ErrorTemplate for NoAccessOptions {
    fn kind(&self) -> &'static ErrorKind {
        &NO_ACCESS_ERROR
    }

    fn generate_message(&self) -> String {
        no_access_phrase(
            self.resource.or_default_str("resource"),
            self.issue.for_message().map(String::as_str),
        )
    }

    template_plumbing!();
}

/// Options for `NoAccessFileError` and `NoAccessDirectoryError`.
///
/// The resource phrase is derived from the path unless `resource` is given.
#[derive(Debug)]
pub struct FileAccessOptions {
    file_type: FileType,
    /// Path of the file or directory.
    pub path: Param<String>,
    /// Explicit resource phrase; replaces the one derived from `path`.
    pub resource: Param<String>,
    /// The access issue, defaults to `is denied`.
    pub issue: Param<String>,
    /// Shared options.
    pub common: CommonOptions,
}

impl FileAccessOptions {
    fn for_type(file_type: FileType) -> Self {
        Self {
            file_type,
            path: Param::Unset,
            resource: Param::Unset,
            issue: Param::Unset,
            common: CommonOptions::default(),
        }
    }

    /// `NoAccessFileError` options.
    pub fn file() -> Self {
        Self::for_type(FileType::File)
    }

    /// `NoAccessDirectoryError` options.
    pub fn directory() -> Self {
        Self::for_type(FileType::Directory)
    }

    /// What the path refers to.
    #[inline]
    pub fn file_type(&self) -> FileType {
        self.file_type
    }
}

param_setters!(FileAccessOptions {
    /// Set the path.
    path: String,
    /// Override the resource phrase.
    resource: String,
    /// Describe the issue.
    issue: String,
});
impl_common_options!(FileAccessOptions);

impl MessageOptions for FileAccessOptions {
    fn param_included(&self, name: &str) -> Option<bool> {
        match name {
            "path" => Some(self.path.is_included()),
            "resource" => Some(self.resource.is_included()),
            "issue" => Some(self.issue.is_included()),
            _ => None,
        }
    }
}

impl ErrorTemplate for FileAccessOptions {
    fn kind(&self) -> &'static ErrorKind {
        match self.file_type {
            FileType::File => &NO_ACCESS_FILE_ERROR,
            FileType::Directory => &NO_ACCESS_DIRECTORY_ERROR,
        }
    }

    fn generate_message(&self) -> String {
        let resource = match self.resource.for_message() {
            Some(resource) => resource.clone(),
            None => describe_file(self.file_type, self.path.for_message().map(String::as_str))
                .into_owned(),
        };
        no_access_phrase(&resource, self.issue.for_message().map(String::as_str))
    }

    template_plumbing!();
}

// ============================================================================
// External services
// ============================================================================

/// Options for `ExternalServiceError`.
#[derive(Debug, Default)]
pub struct ExternalServiceOptions {
    /// Name or short description of the service; excluded means `''`.
    pub service: Param<String>,
    /// Description of the issue.
    pub issue: Param<String>,
    /// Shared options.
    pub common: CommonOptions,
}

impl ExternalServiceOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }
}

param_setters!(ExternalServiceOptions {
    /// Name the service.
    service: String,
    /// Describe the issue.
    issue: String,
});
impl_common_options!(ExternalServiceOptions);

impl MessageOptions for ExternalServiceOptions {
    fn param_included(&self, name: &str) -> Option<bool> {
        match name {
            "service" => Some(self.service.is_included()),
            "issue" => Some(self.issue.is_included()),
            _ => None,
        }
    }
}

impl ErrorTemplate for ExternalServiceOptions {
    fn kind(&self) -> &'static ErrorKind {
        &EXTERNAL_SERVICE_ERROR
    }

    fn generate_message(&self) -> String {
        let service = match self.service.or_default_str("") {
            "" => String::new(),
            named => format!("{named} "),
        };

        match self.issue.for_message() {
            Some(issue) => format!("The remote {service}service {issue}."),
            None => format!("There was an error with the remote {service}service."),
        }
    }

    template_plumbing!();
}

/// Options for `UnavailableError`.
#[derive(Debug, Default)]
pub struct UnavailableOptions {
    /// What is unavailable, defaults to `target resource`.
    pub target: Param<String>,
    /// Why, replacing `currently unavailable`.
    pub issue: Param<String>,
    /// When to retry, e.g. `in 2 hours`.
    pub expected_time: Param<String>,
    /// Shared options.
    pub common: CommonOptions,
}

impl UnavailableOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }
}

param_setters!(UnavailableOptions {
    /// Name the unavailable resource.
    target: String,
    /// Describe the issue.
    issue: String,
    /// Say when to try again.
    expected_time: String,
});
impl_common_options!(UnavailableOptions);

impl MessageOptions for UnavailableOptions {
    fn param_included(&self, name: &str) -> Option<bool> {
        match name {
            "target" => Some(self.target.is_included()),
            "issue" => Some(self.issue.is_included()),
            "expectedTime" | "expected_time" => Some(self.expected_time.is_included()),
            _ => None,
        }
    }
}

impl ErrorTemplate for UnavailableOptions {
    fn kind(&self) -> &'static ErrorKind {
        &UNAVAILABLE_ERROR
    }

    fn generate_message(&self) -> String {
        let mut message = format!(
            "The {} is {}",
            self.target.or_default_str("target resource"),
            self.issue.or_default_str("currently unavailable"),
        );
        if let Some(expected_time) = self.expected_time.for_message() {
            message.push_str("; try again ");
            message.push_str(expected_time);
        }
        message.push('.');
        message
    }

    template_plumbing!();
}

// ============================================================================
// Shorthand constructors
// ============================================================================

impl CommonError {
    /// `NotFoundError`.
    pub fn not_found(options: NotFoundOptions) -> Self {
        Self::from_template(options)
    }

    /// `NotImplementedError`.
    pub fn not_implemented(options: NotImplementedOptions) -> Self {
        Self::from_template(options)
    }

    /// `ArgumentInvalidError`.
    pub fn argument_invalid(options: ArgumentInvalidOptions) -> Self {
        Self::from_template(options)
    }

    /// `AuthError`, or the auth kind the options were created for.
    pub fn auth(options: AuthOptions) -> Self {
        Self::from_template(options)
    }

    /// `OperationNotPermittedError`.
    pub fn operation_not_permitted(options: AuthOptions) -> Self {
        Self::from_template(AuthOptions {
            kind: &OPERATION_NOT_PERMITTED_ERROR,
            default_issue: "is not permitted",
            ..options
        })
    }

    /// `AuthenticationRequiredError`.
    pub fn authentication_required(options: AuthOptions) -> Self {
        Self::from_template(AuthOptions {
            kind: &AUTHENTICATION_REQUIRED_ERROR,
            default_issue: "requires authentication",
            ..options
        })
    }

    /// `NoAccessError`.
    pub fn no_access(options: NoAccessOptions) -> Self {
        Self::from_template(options)
    }

    /// `NoAccessFileError`.
    pub fn no_access_file(options: FileAccessOptions) -> Self {
        Self::from_template(FileAccessOptions {
            file_type: FileType::File,
            ..options
        })
    }

    /// `NoAccessDirectoryError`.
    pub fn no_access_directory(options: FileAccessOptions) -> Self {
        Self::from_template(FileAccessOptions {
            file_type: FileType::Directory,
            ..options
        })
    }

    /// `ExternalServiceError`.
    pub fn external_service(options: ExternalServiceOptions) -> Self {
        Self::from_template(options)
    }

    /// `UnavailableError`.
    pub fn unavailable(options: UnavailableOptions) -> Self {
        Self::from_template(options)
    }

    /// Report a no-access error as a generic not-found.
    ///
    /// For systems that must not reveal whether a resource exists. Any
    /// `NoAccessError` (or specialization) becomes a `NotFoundError` with the
    /// default message, keeping the original as its cause. Other errors pass
    /// through unchanged.
    pub fn mask_no_access(self) -> Self {
        self.mask_no_access_in(crate::registry::global())
    }

    /// [`mask_no_access`](Self::mask_no_access) against an explicit registry.
    pub fn mask_no_access_in(self, registry: &TaxonomyRegistry) -> Self {
        if !self.is_a_in(registry, NO_ACCESS_ERROR.name()) {
            return self;
        }
        NotFoundOptions::new().cause(self).build_in(registry)
    }
}
