//! Comment-rendering scenario: a guestbook that may or may not escape output.
//!
//! Both renderings are always produced. Nothing is ever interpreted; the
//! "executed" state is declared purely from marker detection.

use std::fmt;

use crate::escaped::SafeHtml;
use crate::mode::Mode;
use crate::pattern::{contains_executable_marker, neutralize};

/// A guestbook comment, either escaped or raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment<T> {
    /// Author name
    pub display_name: T,
    /// Comment body
    pub message: T,
}

impl<T: AsRef<str>> Comment<T> {
    /// The comment card markup with both fields spliced in as-is.
    ///
    /// For `Comment<SafeHtml>` the result is inert; for `Comment<String>` it
    /// is exactly what a vulnerable page would inject.
    pub fn to_markup(&self) -> String {
        format!(
            "<div class=\"comment\"><strong>{}</strong><p>{}</p></div>",
            self.display_name.as_ref(),
            self.message.as_ref()
        )
    }

    /// Borrows both fields as `&str`.
    pub fn as_strs(&self) -> Comment<&str> {
        Comment {
            display_name: self.display_name.as_ref(),
            message: self.message.as_ref(),
        }
    }
}

/// Result of [`evaluate_rendering`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    /// Escaped fields
    pub safe: Comment<SafeHtml>,
    /// Unmodified fields
    pub raw: Comment<String>,
    /// The mode this rendering was evaluated in
    pub mode: Mode,
    /// Whether the page would have run injected script
    pub execution_simulated: bool,
}

impl Rendering {
    /// The pair a page in this mode would display.
    pub fn shown(&self) -> Comment<&str> {
        match self.mode {
            Mode::Protected => self.safe.as_strs(),
            Mode::Unprotected => self.raw.as_strs(),
        }
    }

    /// Markup for the pair a page in this mode would display.
    pub fn shown_markup(&self) -> String {
        self.shown().to_markup()
    }
}

impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.shown();
        write!(f, "{}: {}", shown.display_name, shown.message)
    }
}

/// Renders a guestbook comment in `mode`.
///
/// # Examples
///
/// ```
/// use injection_lab::{evaluate_rendering, Mode};
///
/// let payload = "<script>alert('XSS')</script>";
///
/// let raw = evaluate_rendering("Mallory", payload, Mode::Unprotected);
/// assert!(raw.execution_simulated);
///
/// let safe = evaluate_rendering("Mallory", payload, Mode::Protected);
/// assert!(!safe.execution_simulated);
/// assert!(!safe.shown().message.contains('<'));
/// ```
pub fn evaluate_rendering(display_name: &str, message: &str, mode: Mode) -> Rendering {
    let combined = format!("{}{}", display_name, message);
    Rendering {
        safe: Comment {
            display_name: neutralize(display_name),
            message: neutralize(message),
        },
        raw: Comment {
            display_name: display_name.to_string(),
            message: message.to_string(),
        },
        mode,
        execution_simulated: mode.renders_raw() && contains_executable_marker(&combined),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_script_simulates_execution() {
        let rendering =
            evaluate_rendering("Mallory", "<script>alert(1)</script>", Mode::Unprotected);

        assert!(rendering.execution_simulated);
        assert_eq!(rendering.shown().message, "<script>alert(1)</script>");
    }

    #[test]
    fn escaped_script_never_executes() {
        let rendering = evaluate_rendering("Mallory", "<script>alert(1)</script>", Mode::Protected);

        assert!(!rendering.execution_simulated);
        assert_eq!(
            rendering.shown().message,
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn both_renderings_are_always_present() {
        let rendering = evaluate_rendering("<b>Eve</b>", "hi", Mode::Protected);

        assert_eq!(rendering.raw.display_name, "<b>Eve</b>");
        assert_eq!(rendering.safe.display_name.as_str(), "&lt;b&gt;Eve&lt;/b&gt;");
    }

    #[test]
    fn marker_split_across_fields_counts() {
        // The fields are concatenated before detection
        let rendering = evaluate_rendering("<scr", "ipt>", Mode::Unprotected);
        assert!(rendering.execution_simulated);
    }

    #[test]
    fn handler_in_name_detected() {
        let rendering =
            evaluate_rendering("<img src=x onerror=alert(1)>", "Nice post", Mode::Unprotected);
        assert!(rendering.execution_simulated);
    }

    #[test]
    fn benign_raw_comment_does_not_execute() {
        let rendering = evaluate_rendering("Alice", "Great article!", Mode::Unprotected);
        assert!(!rendering.execution_simulated);
        assert_eq!(rendering.to_string(), "Alice: Great article!");
    }

    #[test]
    fn markup_embeds_fields() {
        let rendering = evaluate_rendering("A&B", "<i>x</i>", Mode::Protected);

        assert_eq!(
            rendering.shown_markup(),
            "<div class=\"comment\"><strong>A&amp;B</strong><p>&lt;i&gt;x&lt;/i&gt;</p></div>"
        );
        assert_eq!(
            rendering.raw.to_markup(),
            "<div class=\"comment\"><strong>A&B</strong><p><i>x</i></p></div>"
        );
    }

    mod proptests {
        use super::*;
        use crate::test_utils::arb_any_text;
        use proptest::prelude::*;

        proptest! {
            /// Execution is simulated exactly for raw output carrying a marker
            #[test]
            fn proptest_execution_requires_raw_output(
                name in arb_any_text(32),
                message in arb_any_text(32),
                protected in any::<bool>(),
            ) {
                let mode = Mode::from_protected(protected);
                let rendering = evaluate_rendering(&name, &message, mode);
                let marked = contains_executable_marker(&format!("{}{}", name, message));

                prop_assert_eq!(rendering.execution_simulated, !protected && marked);
                prop_assert_eq!(&rendering.raw.message, &message);
                prop_assert_eq!(rendering, evaluate_rendering(&name, &message, mode));
            }
        }
    }
}
