//! HTTP status vocabulary for the error taxonomy.
//!
//! Every error carries a numeric HTTP status and a short display name for it.
//! Names come from a fixed table; codes outside the table map to
//! [`UNKNOWN_STATUS_NAME`] instead of failing, because the lookup runs while an
//! error is being built and must never produce a second error.
//!
//! # Example
//!
//! ```rust
//! use common_errors::status::{self, status_name_for};
//!
//! assert_eq!(status_name_for(status::NOT_FOUND), "Not Found");
//! assert_eq!(status_name_for(799), status::UNKNOWN_STATUS_NAME);
//! ```

/// 400
pub const BAD_REQUEST: u16 = 400;
/// 401
pub const UNAUTHORIZED: u16 = 401;
/// 403
pub const FORBIDDEN: u16 = 403;
/// 404
pub const NOT_FOUND: u16 = 404;
/// 500
pub const INTERNAL_SERVER_ERROR: u16 = 500;
/// 501
pub const NOT_IMPLEMENTED: u16 = 501;
/// 503
pub const SERVICE_UNAVAILABLE: u16 = 503;

/// Status returned when no type in a lineage declares one.
pub const FALLBACK_STATUS: u16 = INTERNAL_SERVER_ERROR;

/// Label for codes missing from the name table.
pub const UNKNOWN_STATUS_NAME: &str = "Unknown";

/// Conventional short name for an HTTP status code.
///
/// Total over `u16`: unknown codes yield [`UNKNOWN_STATUS_NAME`].
pub const fn status_name_for(status: u16) -> &'static str {
    match status {
        100 => "Continue",
        101 => "Switching Protocols",
        102 => "Processing",
        103 => "Early Hints",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        207 => "Multi-Status",
        208 => "Already Reported",
        226 => "IM Used",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Payload Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Range Not Satisfiable",
        417 => "Expectation Failed",
        418 => "I'm a Teapot",
        421 => "Misdirected Request",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        425 => "Too Early",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        451 => "Unavailable For Legal Reasons",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        510 => "Not Extended",
        511 => "Network Authentication Required",
        _ => UNKNOWN_STATUS_NAME,
    }
}

/// True for 4xx codes.
#[inline]
pub const fn is_client_error(status: u16) -> bool {
    status >= 400 && status < 500
}

/// True for 5xx codes.
#[inline]
pub const fn is_server_error(status: u16) -> bool {
    status >= 500 && status < 600
}
