use std::fmt;

use crate::error::{Error, ErrorKind};

/// A discrete user command consumed by [`Lab::handle`](crate::Lab::handle).
///
/// Presentation layers translate their own key events into actions. The
/// adapter is expected to ignore keys while a text field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Flip the lookup scenario between concatenated and parameterized queries
    ToggleProtection,
    /// Flip the rendering scenario between raw and escaped output
    ToggleRawRender,
    /// Turn the active scenario's walkthrough on or off
    ToggleTutorial,
    /// Advance the walkthrough
    NextStep,
    /// Go back in the walkthrough
    PrevStep,
    /// Jump to a walkthrough step (clamped)
    JumpTo(isize),
    /// Clear both inputs of the active scenario
    ResetInputs,
    /// Switch between the lookup and rendering scenarios
    SwitchScenario,
    /// Show or hide the help overlay
    ToggleHelp,
}

impl Action {
    /// Maps a key name to its action.
    ///
    /// | key | action |
    /// |-----|--------|
    /// | `p` | [`ToggleProtection`](Action::ToggleProtection) |
    /// | `r` | [`ToggleRawRender`](Action::ToggleRawRender) |
    /// | `t` | [`ToggleTutorial`](Action::ToggleTutorial) |
    /// | `n`, `right` | [`NextStep`](Action::NextStep) |
    /// | `b`, `left` | [`PrevStep`](Action::PrevStep) |
    /// | `g<index>` | [`JumpTo`](Action::JumpTo) |
    /// | `c` | [`ResetInputs`](Action::ResetInputs) |
    /// | `s` | [`SwitchScenario`](Action::SwitchScenario) |
    /// | `?`, `h` | [`ToggleHelp`](Action::ToggleHelp) |
    ///
    /// Letter keys are case-insensitive; surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownKey`] for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use injection_lab::Action;
    ///
    /// assert_eq!(Action::from_key("P").unwrap(), Action::ToggleProtection);
    /// assert_eq!(Action::from_key("g-2").unwrap(), Action::JumpTo(-2));
    /// assert!(Action::from_key("z").is_err());
    /// ```
    pub fn from_key(key: &str) -> Result<Self, Error> {
        let normalized = key.trim().to_ascii_lowercase();
        let action = match normalized.as_str() {
            "p" => Action::ToggleProtection,
            "r" => Action::ToggleRawRender,
            "t" => Action::ToggleTutorial,
            "n" | "right" => Action::NextStep,
            "b" | "left" => Action::PrevStep,
            "c" => Action::ResetInputs,
            "s" => Action::SwitchScenario,
            "?" | "h" => Action::ToggleHelp,
            other => match other.strip_prefix('g').map(str::parse::<isize>) {
                Some(Ok(index)) => Action::JumpTo(index),
                _ => {
                    return Err(Error::new(
                        ErrorKind::UnknownKey {
                            key: key.to_string(),
                        },
                        "no action is bound to this key",
                    ))
                }
            },
        };
        Ok(action)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ToggleProtection => write!(f, "toggle protection"),
            Action::ToggleRawRender => write!(f, "toggle raw render"),
            Action::ToggleTutorial => write!(f, "toggle tutorial"),
            Action::NextStep => write!(f, "next step"),
            Action::PrevStep => write!(f, "previous step"),
            Action::JumpTo(i) => write!(f, "jump to step {}", i),
            Action::ResetInputs => write!(f, "reset inputs"),
            Action::SwitchScenario => write!(f, "switch scenario"),
            Action::ToggleHelp => write!(f, "toggle help"),
        }
    }
}
