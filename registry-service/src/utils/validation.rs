//! Email format check
//!
//! A syntactic heuristic only. It is not RFC 5322 validation and must not be
//! tightened: callers rely on strings like `"@."` being accepted.

/// Returns `true` when `email` contains at least one `'@'` and at least one
/// `'.'`, in any position or order.
///
/// # Examples
/// ```
/// use registry_service::is_valid_email;
///
/// assert!(is_valid_email("john@example.com"));
/// assert!(!is_valid_email("a@b"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}
