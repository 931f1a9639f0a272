use std::fmt;

/// A record password that never shows up in formatted output.
///
/// The lab deliberately reveals passwords when an injection dumps the whole
/// table, but that reveal has to go through [`expose`](Self::expose). `Debug`
/// and `Display` always print `[REDACTED]`, so tracing a [`Record`](crate::Record)
/// never leaks the value.
///
/// # Examples
///
/// ```
/// use injection_lab::Secret;
///
/// let password = Secret::new("hunter2");
/// assert_eq!(format!("{:?}", password), "[REDACTED]");
/// assert_eq!(password.expose(), "hunter2");
/// ```
// Do NOT derive Clone or Debug; both would make accidental exposure easy.
pub struct Secret {
    inner: String,
}

impl Secret {
    /// Wraps a password.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Returns the plain password.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Exact, case-sensitive comparison against a candidate.
    pub fn matches(&self, candidate: &str) -> bool {
        self.inner == candidate
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_redacts_debug() {
        let password = Secret::new("hunter2");
        let debug_output = format!("{:?}", password);

        assert_eq!(debug_output, "[REDACTED]");
        assert!(!debug_output.contains("hunter2"));
    }

    #[test]
    fn secret_redacts_display() {
        let password = Secret::new("admin123");
        assert_eq!(password.to_string(), "[REDACTED]");
    }

    #[test]
    fn matches_is_exact_and_case_sensitive() {
        let password = Secret::new("Password1");

        assert!(password.matches("Password1"));
        assert!(!password.matches("password1"));
        assert!(!password.matches("Password1 "));
        assert!(!password.matches(""));
    }
}
