//! Message template helpers.
//!
//! Every optional message parameter is a [`Param`]: unset, shown, or hidden.
//! A hidden parameter keeps its value (callers can still read it back) but the
//! message generator treats it as unset and substitutes its documented
//! default phrasing. This is the only opt-out mechanism; all templates use it.
//!
//! ```rust
//! use common_errors::{should_include, NotFoundOptions, Param};
//!
//! let shown = NotFoundOptions::new().target("customer db");
//! let hidden = NotFoundOptions::new().target(Param::hidden("customer db"));
//!
//! assert!(should_include("target", &shown));
//! assert!(!should_include("target", &hidden));
//! ```
//!
//! Template functions here are pure: they borrow their inputs, never mutate
//! them, and return the same text for the same inputs.

use std::borrow::Cow;

/// A message parameter and whether it may appear in generated text.
#[derive(Debug, Clone, PartialEq)]
pub enum Param<T> {
    /// Not supplied.
    Unset,
    /// Supplied and shown in the message.
    Shown(T),
    /// Supplied but excluded from the message.
    Hidden(T),
}

impl<T> Default for Param<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> Param<T> {
    /// A value excluded from the message.
    #[inline]
    pub fn hidden(value: impl Into<T>) -> Self {
        Self::Hidden(value.into())
    }

    /// The supplied value, shown or not.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Unset => None,
            Self::Shown(v) | Self::Hidden(v) => Some(v),
        }
    }

    /// The value if it may appear in the message.
    #[inline]
    pub fn for_message(&self) -> Option<&T> {
        match self {
            Self::Shown(v) => Some(v),
            _ => None,
        }
    }

    /// True when the value may appear in the message.
    #[inline]
    pub fn is_included(&self) -> bool {
        matches!(self, Self::Shown(_))
    }

    /// Keep the value but exclude it from the message.
    pub fn hide(self) -> Self {
        match self {
            Self::Shown(v) => Self::Hidden(v),
            other => other,
        }
    }
}

impl Param<String> {
    /// Included value, or `default` when unset or hidden.
    #[inline]
    pub fn or_default_str<'a>(&'a self, default: &'a str) -> &'a str {
        self.for_message().map_or(default, String::as_str)
    }
}

impl From<&str> for Param<String> {
    fn from(value: &str) -> Self {
        Self::Shown(value.to_owned())
    }
}

impl From<String> for Param<String> {
    fn from(value: String) -> Self {
        Self::Shown(value)
    }
}

impl<T> From<Option<T>> for Param<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Shown)
    }
}

/// Name-keyed view of an options struct's message parameters.
pub trait MessageOptions {
    /// Inclusion state of the parameter called `name`; `None` if the
    /// options have no such parameter.
    fn param_included(&self, name: &str) -> Option<bool>;
}

/// Whether the parameter called `name` should be shown in the message.
///
/// Unknown parameter names are never included.
#[inline]
pub fn should_include(name: &str, options: &impl MessageOptions) -> bool {
    options.param_included(name).unwrap_or(false)
}

/// Wrap `value` in single quotes.
#[inline]
pub fn quoted(value: &str) -> String {
    format!("'{value}'")
}

/// Not-found phrasing: `Resource not found.` / `Could not find {target}.`
pub fn not_found_phrase(target: Option<&str>) -> String {
    match target {
        None => String::from("Resource not found."),
        Some(target) => format!("Could not find {target}."),
    }
}

/// Auth phrasing: `The {action}[ on {target}] {issue}.`
pub fn auth_phrase(action: &str, target: Option<&str>, issue: &str) -> String {
    match target {
        None => format!("The {action} {issue}."),
        Some(target) => format!("The {action} on {target} {issue}."),
    }
}

/// No-access phrasing: `Access to {resource} is denied.` or `Access to {resource} {issue}.`
pub fn no_access_phrase(resource: &str, issue: Option<&str>) -> String {
    format!("Access to {resource} {}.", issue.unwrap_or("is denied"))
}

/// What a file-system path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// A regular file.
    File,
    /// A directory.
    Directory,
}

impl FileType {
    /// Lowercase noun used in messages.
    pub const fn noun(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

/// Describe a file resource: `file '/etc/hosts'`, or bare `file` without a path.
pub fn describe_file(file_type: FileType, path: Option<&str>) -> Cow<'static, str> {
    match path {
        None => Cow::Borrowed(file_type.noun()),
        Some(path) => Cow::Owned(format!("{} {}", file_type.noun(), quoted(path))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        target: Param<String>,
    }

    impl MessageOptions for Probe {
        fn param_included(&self, name: &str) -> Option<bool> {
            match name {
                "target" => Some(self.target.is_included()),
                _ => None,
            }
        }
    }

    #[test]
    fn inclusion_policy() {
        let shown = Probe { target: "db".into() };
        let hidden = Probe { target: Param::hidden("db") };
        let unset = Probe { target: Param::Unset };

        assert!(should_include("target", &shown));
        assert!(!should_include("target", &hidden));
        assert!(!should_include("target", &unset));
        assert!(!should_include("nonsense", &shown));
    }

    #[test]
    fn hidden_value_is_retained() {
        let param: Param<String> = Param::from("secret").hide();
        assert_eq!(param.value().map(String::as_str), Some("secret"));
        assert_eq!(param.for_message(), None);
        assert_eq!(param.or_default_str("fallback"), "fallback");
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Param::<String>::from(None::<String>), Param::Unset);
        assert!(Param::from(Some(String::from("x"))).is_included());
    }

    #[test]
    fn phrases() {
        assert_eq!(not_found_phrase(None), "Resource not found.");
        assert_eq!(not_found_phrase(Some("user 42")), "Could not find user 42.");
        assert_eq!(auth_phrase("action", None, "is not permitted"), "The action is not permitted.");
        assert_eq!(
            auth_phrase("delete", Some("'report'"), "is not permitted"),
            "The delete on 'report' is not permitted."
        );
        assert_eq!(no_access_phrase("resource", None), "Access to resource is denied.");
        assert_eq!(
            no_access_phrase("the vault", Some("is locked")),
            "Access to the vault is locked."
        );
    }

    #[test]
    fn file_descriptions() {
        assert_eq!(describe_file(FileType::File, None), "file");
        assert_eq!(describe_file(FileType::File, Some("/etc/hosts")), "file '/etc/hosts'");
        assert_eq!(describe_file(FileType::Directory, Some("/tmp")), "directory '/tmp'");
    }
}
