//! Structured log entry for a [`CommonError`](crate::CommonError).
//!
//! [`ErrorLog`] borrows every field from the error that produced it and
//! cannot outlive it. Loggers consume it immediately through
//! [`ErrorLog::write_to`] or the field accessors.
//!
//! Free-text fields are written through [`clip`], which caps each one at
//! [`MAX_FIELD_OUTPUT_LEN`] bytes without building an intermediate string.

use std::borrow::Cow;
use std::fmt;

/// Maximum length for any individual field in formatted output.
pub const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Marks a field cut at [`MAX_FIELD_OUTPUT_LEN`].
pub const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Key/value context attached to an error for logs.
pub type Metadata = [(&'static str, Cow<'static, str>)];

/// `Display` adapter that writes at most [`MAX_FIELD_OUTPUT_LEN`] bytes.
///
/// Over-long text is cut on a char boundary and ends with
/// [`TRUNCATION_INDICATOR`]; the indicator counts toward the limit.
#[derive(Debug, Clone, Copy)]
pub struct Clipped<'a>(&'a str);

/// Wrap `text` for bounded display.
#[inline]
pub fn clip(text: &str) -> Clipped<'_> {
    Clipped(text)
}

impl Clipped<'_> {
    /// True if displaying will cut the text.
    #[inline]
    pub fn is_clipped(&self) -> bool {
        self.0.len() > MAX_FIELD_OUTPUT_LEN
    }

    fn kept(&self) -> &str {
        let budget = MAX_FIELD_OUTPUT_LEN - TRUNCATION_INDICATOR.len();
        let end = (0..=budget)
            .rev()
            .find(|&idx| self.0.is_char_boundary(idx))
            .unwrap_or(0);
        &self.0[..end]
    }
}

impl fmt::Display for Clipped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_clipped() {
            return f.write_str(self.0);
        }
        f.write_str(self.kept())?;
        f.write_str(TRUNCATION_INDICATOR)
    }
}

/// Borrowed, structured view of an error for log sinks.
///
/// ```rust
/// use common_errors::{ErrorTemplate, NotFoundOptions};
///
/// let err = NotFoundOptions::new()
///     .target("user 42")
///     .build()
///     .with_metadata("tenant", "acme");
///
/// let mut line = String::new();
/// err.with_internal_log(|log| log.write_to(&mut line)).unwrap();
/// assert_eq!(
///     line,
///     "[NotFoundError 404 Not Found] code='ENOENT' message='Could not find user 42.' tenant='acme'"
/// );
/// ```
#[derive(Debug)]
pub struct ErrorLog<'a> {
    /// Kind name.
    pub name: &'a str,
    /// HTTP-style status.
    pub status: u16,
    /// Canonical label of `status`.
    pub status_name: &'static str,
    /// Machine code, if any.
    pub code: Option<&'a str>,
    /// Human-readable message.
    pub message: &'a str,
    /// Attached key/value context.
    pub metadata: &'a Metadata,
    /// Whether an underlying cause is attached.
    pub has_cause: bool,
}

impl ErrorLog<'_> {
    /// Format into an owned `String` for trusted debug sinks.
    ///
    /// Only available with the `trusted_debug` feature in debug builds. The
    /// output also carries the cause chain, which `write_to` omits.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self, cause: Option<&dyn std::error::Error>) -> String {
        use std::fmt::Write as _;

        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut output);

        let mut next = cause;
        while let Some(err) = next {
            let _ = write!(output, " cause='{}'", clip(&err.to_string()));
            next = err.source();
        }

        output
    }

    /// Write the entry without intermediate allocation.
    ///
    /// Layout: `[{name} {status} {status_name}] code='..' message='..' key='..'`,
    /// then ` [CAUSED]` when a cause is attached. `code` is omitted when absent.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "[{} {} {}]", clip(self.name), self.status, self.status_name)?;

        if let Some(code) = self.code {
            write!(f, " code='{}'", clip(code))?;
        }

        write!(f, " message='{}'", clip(self.message))?;

        for (key, value) in self.metadata {
            write!(f, " {}='{}'", key, clip(value))?;
        }

        if self.has_cause {
            f.write_str(" [CAUSED]")?;
        }

        Ok(())
    }

    /// Kind name.
    #[inline]
    pub const fn name(&self) -> &str {
        self.name
    }

    /// HTTP-style status.
    #[inline]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Canonical label of the status.
    #[inline]
    pub const fn status_name(&self) -> &'static str {
        self.status_name
    }

    /// Machine code.
    #[inline]
    pub const fn code(&self) -> Option<&str> {
        self.code
    }

    /// Human-readable message, unclipped.
    #[inline]
    pub const fn message(&self) -> &str {
        self.message
    }

    /// Value attached under `key`, first match wins.
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry<'a>(message: &'a str, metadata: &'a Metadata) -> ErrorLog<'a> {
        ErrorLog {
            name: "UnavailableError",
            status: 500,
            status_name: "Internal Server Error",
            code: None,
            message,
            metadata,
            has_cause: false,
        }
    }

    #[test]
    fn write_to_layout() {
        let metadata = [("region", Cow::Borrowed("eu-west-1"))];
        let mut log = entry("The customer db is off line.", &metadata);
        log.code = Some("EMAINT");
        log.has_cause = true;

        let mut out = String::new();
        log.write_to(&mut out).unwrap();
        assert_eq!(
            out,
            "[UnavailableError 500 Internal Server Error] code='EMAINT' \
             message='The customer db is off line.' region='eu-west-1' [CAUSED]"
        );
    }

    #[test]
    fn write_to_skips_missing_code() {
        let mut out = String::new();
        entry("x", &[]).write_to(&mut out).unwrap();
        assert_eq!(out, "[UnavailableError 500 Internal Server Error] message='x'");
    }

    #[test]
    fn long_message_is_clipped_in_place() {
        let long = "m".repeat(MAX_FIELD_OUTPUT_LEN * 4);
        let mut out = String::new();
        entry(&long, &[]).write_to(&mut out).unwrap();

        let message = out
            .split_once("message='")
            .and_then(|(_, rest)| rest.strip_suffix('\''))
            .unwrap();
        assert_eq!(message.len(), MAX_FIELD_OUTPUT_LEN);
        assert!(message.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn long_metadata_value_is_clipped() {
        let metadata = [("payload", Cow::Owned("p".repeat(MAX_FIELD_OUTPUT_LEN + 1)))];
        let mut out = String::new();
        entry("x", &metadata).write_to(&mut out).unwrap();
        assert!(out.ends_with(&format!("{TRUNCATION_INDICATOR}'")));
    }

    #[test]
    fn clip_respects_char_boundaries() {
        // Three bytes per char, so the budget never lands on a boundary by luck.
        let text = "€".repeat(MAX_FIELD_OUTPUT_LEN);
        let shown = clip(&text).to_string();
        assert!(shown.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(shown.trim_end_matches(TRUNCATION_INDICATOR).chars().all(|c| c == '€'));
    }

    #[test]
    fn clip_leaves_limit_sized_text_alone() {
        let text = "a".repeat(MAX_FIELD_OUTPUT_LEN);
        assert!(!clip(&text).is_clipped());
        assert_eq!(clip(&text).to_string(), text);
    }

    #[test]
    fn metadata_lookup() {
        let metadata = [
            ("tenant", Cow::Borrowed("acme")),
            ("request_id", Cow::Owned(String::from("req-1138"))),
        ];
        let log = entry("x", &metadata);
        assert_eq!(log.metadata_value("request_id"), Some("req-1138"));
        assert_eq!(log.metadata_value("missing"), None);
    }

    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    #[test]
    fn trusted_debug_includes_cause_chain() {
        let cause = std::io::Error::new(std::io::ErrorKind::TimedOut, "socket timed out");
        let out = entry("x", &[]).format_for_trusted_debug(Some(&cause));
        assert!(out.ends_with(" cause='socket timed out'"));
    }
}
