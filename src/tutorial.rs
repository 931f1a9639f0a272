//! Scripted walkthroughs.
//!
//! A [`Sequencer`] is a saturating cursor over an injected table of
//! [`TutorialStep`]s. Each transition reports the [`StepEffect`] the consumer
//! must apply, if any, so the sequencer never touches input state itself.

use crate::error::{Error, ErrorKind};
use crate::mode::Mode;

/// The state a step imposes on its scenario: a mode and both inputs.
///
/// Applying the same effect twice yields the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEffect {
    /// Mode to switch to
    pub mode: Mode,
    /// Username, or comment author
    pub first: &'static str,
    /// Password, or comment body
    pub second: &'static str,
}

/// One entry of a walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialStep {
    /// Short heading
    pub title: &'static str,
    /// What the student should notice
    pub narrative: &'static str,
    /// State applied when the step becomes current
    pub effect: StepEffect,
}

/// Saturating cursor over a non-empty step table.
///
/// Starts at step 0, enabled. While disabled, navigation is ignored and the
/// cursor is retained.
///
/// # Examples
///
/// ```
/// use injection_lab::{lookup_steps, Sequencer};
///
/// let mut tutorial = Sequencer::new(lookup_steps()).unwrap();
/// assert!(tutorial.next().is_some());
/// assert_eq!(tutorial.index(), 1);
///
/// assert_eq!(tutorial.jump(999).map(|e| e.mode.is_protected()), Some(true));
/// assert!(tutorial.next().is_none()); // already at the last step
/// ```
#[derive(Debug, Clone)]
pub struct Sequencer {
    steps: Vec<TutorialStep>,
    index: usize,
    enabled: bool,
}

impl Sequencer {
    /// Creates a sequencer over `steps`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::EmptyTutorial`] if `steps` is empty.
    pub fn new(steps: Vec<TutorialStep>) -> Result<Self, Error> {
        if steps.is_empty() {
            return Err(Error::new(
                ErrorKind::EmptyTutorial,
                "a tutorial needs at least one step",
            ));
        }
        Ok(Self {
            steps,
            index: 0,
            enabled: true,
        })
    }

    /// Sequencer over [`lookup_steps`].
    pub fn lookup() -> Self {
        Self::from_table(lookup_steps())
    }

    /// Sequencer over [`rendering_steps`].
    pub fn rendering() -> Self {
        Self::from_table(rendering_steps())
    }

    // Built-in tables are never empty.
    fn from_table(steps: Vec<TutorialStep>) -> Self {
        debug_assert!(!steps.is_empty());
        Self {
            steps,
            index: 0,
            enabled: true,
        }
    }

    /// Current cursor position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether step changes currently produce effects.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The step under the cursor.
    pub fn current(&self) -> &TutorialStep {
        &self.steps[self.index]
    }

    /// All steps in order.
    pub fn steps(&self) -> &[TutorialStep] {
        &self.steps
    }

    /// Returns `true` at the first step.
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Returns `true` at the last step.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.steps.len()
    }

    /// The effect a consumer applies when it first attaches.
    pub fn mount(&self) -> Option<StepEffect> {
        self.enabled.then(|| self.current().effect)
    }

    /// Advances one step, stopping at the last.
    pub fn next(&mut self) -> Option<StepEffect> {
        self.move_to(self.index.saturating_add(1))
    }

    /// Goes back one step, stopping at the first.
    pub fn prev(&mut self) -> Option<StepEffect> {
        self.move_to(self.index.saturating_sub(1))
    }

    /// Moves to step `i`, clamped into range.
    pub fn jump(&mut self, i: isize) -> Option<StepEffect> {
        self.move_to(usize::try_from(i).unwrap_or(0))
    }

    /// Turns effect application on or off.
    ///
    /// Re-enabling returns the current step's effect so the consumer catches
    /// up immediately. Setting the flag to its current value is a no-op.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<StepEffect> {
        if self.enabled == enabled {
            return None;
        }
        self.enabled = enabled;
        self.mount()
    }

    /// Equivalent to `set_enabled(true)`.
    pub fn enable(&mut self) -> Option<StepEffect> {
        self.set_enabled(true)
    }

    /// Equivalent to `set_enabled(false)`.
    pub fn disable(&mut self) {
        self.set_enabled(false);
    }

    fn move_to(&mut self, target: usize) -> Option<StepEffect> {
        if !self.enabled {
            return None;
        }
        let target = target.min(self.steps.len() - 1);
        if target == self.index {
            return None;
        }
        self.index = target;
        Some(self.current().effect)
    }
}

/// The five-step query injection walkthrough.
pub fn lookup_steps() -> Vec<TutorialStep> {
    vec![
        TutorialStep {
            title: "A normal login",
            narrative: "The form pastes your input between quotes in a SQL string. \
                        With real credentials it behaves exactly as expected.",
            effect: StepEffect {
                mode: Mode::Unprotected,
                first: "alice",
                second: "password123",
            },
        },
        TutorialStep {
            title: "A wrong password",
            narrative: "A bad password returns no rows, so the login is rejected.",
            effect: StepEffect {
                mode: Mode::Unprotected,
                first: "alice",
                second: "letmein",
            },
        },
        TutorialStep {
            title: "Breaking the query",
            narrative: "A single quote closes the string literal early. The leftover \
                        quote makes the statement invalid and the database reports a \
                        syntax error, revealing that input reaches the SQL text.",
            effect: StepEffect {
                mode: Mode::Unprotected,
                first: "alice'",
                second: "x",
            },
        },
        TutorialStep {
            title: "The tautology",
            narrative: "' OR '1'='1 balances the quotes and adds a condition that is \
                        always true. The WHERE clause now matches every row.",
            effect: StepEffect {
                mode: Mode::Unprotected,
                first: "' OR '1'='1",
                second: "anything",
            },
        },
        TutorialStep {
            title: "Parameterized queries",
            narrative: "With bound parameters the payload is just an odd username. \
                        Nothing matches it and the attack fails.",
            effect: StepEffect {
                mode: Mode::Protected,
                first: "' OR '1'='1",
                second: "anything",
            },
        },
    ]
}

/// The five-step script injection walkthrough.
pub fn rendering_steps() -> Vec<TutorialStep> {
    vec![
        TutorialStep {
            title: "A normal comment",
            narrative: "The guestbook inserts each comment straight into the page.",
            effect: StepEffect {
                mode: Mode::Unprotected,
                first: "Alice",
                second: "Great article!",
            },
        },
        TutorialStep {
            title: "Markup in a comment",
            narrative: "Tags in the comment are interpreted by the browser. Harmless \
                        here, but the page is trusting user input as HTML.",
            effect: StepEffect {
                mode: Mode::Unprotected,
                first: "Bob",
                second: "<b>bold</b> claims",
            },
        },
        TutorialStep {
            title: "Script injection",
            narrative: "A script tag runs in every visitor's browser with the site's \
                        privileges.",
            effect: StepEffect {
                mode: Mode::Unprotected,
                first: "Mallory",
                second: "<script>alert('XSS')</script>",
            },
        },
        TutorialStep {
            title: "Event handler payload",
            narrative: "Blocking script tags is not enough: an attribute like onerror \
                        runs code too, and the name field is just as dangerous.",
            effect: StepEffect {
                mode: Mode::Unprotected,
                first: "<img src=x onerror=alert(1)>",
                second: "Nice post",
            },
        },
        TutorialStep {
            title: "Escaping output",
            narrative: "Escaping turns < > & \" ' into entities. The payload is shown \
                        as text and never runs.",
            effect: StepEffect {
                mode: Mode::Protected,
                first: "Mallory",
                second: "<script>alert('XSS')</script>",
            },
        },
    ]
}
