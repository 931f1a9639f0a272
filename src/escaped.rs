use std::fmt;

/// Text that has passed through [`neutralize`](crate::neutralize) and is safe
/// to embed in HTML.
///
/// `SafeHtml` has no public constructor. The only way to obtain one is to
/// escape a raw string, so a function that accepts `SafeHtml` cannot be handed
/// unescaped user input by mistake.
///
/// ```compile_fail
/// use injection_lab::SafeHtml;
///
/// // No public constructor:
/// let html = SafeHtml::new("<b>hi</b>".to_string());
/// ```
///
/// # Examples
///
/// ```
/// use injection_lab::neutralize;
///
/// let html = neutralize("<b>hi</b>");
/// assert_eq!(html.as_str(), "&lt;b&gt;hi&lt;/b&gt;");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeHtml {
    inner: String,
}

impl SafeHtml {
    /// Wraps text the caller has already escaped.
    ///
    /// Restricted to the crate so that only the escaping path can mint values.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self { inner: value }
    }

    /// Borrows the escaped text.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consumes the wrapper and returns the escaped text.
    pub fn into_inner(self) -> String {
        self.inner
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}
