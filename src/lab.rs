//! The event-handling layer between a presentation front-end and the pure
//! evaluators.
//!
//! A [`Lab`] owns the mutable state of one classroom session: what the
//! student typed, which mode each scenario is in, and where each walkthrough
//! stands. Outcomes are never stored; [`Lab::lookup_outcome`] and
//! [`Lab::rendering`] recompute them from the current inputs on every call.

use std::fmt;

use crate::action::Action;
use crate::builder::LabBuilder;
use crate::logging::LabLog;
use crate::lookup::{evaluate_lookup, Outcome};
use crate::mode::Mode;
use crate::record::RecordStore;
use crate::rendering::{evaluate_rendering, Rendering};
use crate::tutorial::{Sequencer, StepEffect, TutorialStep};

/// Which vulnerability the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scenario {
    /// Query injection against the login form
    #[default]
    Lookup,
    /// Script injection through the guestbook
    Rendering,
}

impl Scenario {
    /// The other scenario.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Scenario::Lookup => Scenario::Rendering,
            Scenario::Rendering => Scenario::Lookup,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::Lookup => write!(f, "lookup"),
            Scenario::Rendering => write!(f, "rendering"),
        }
    }
}

/// The two text fields and mode of one scenario.
///
/// For [`Scenario::Lookup`] `first`/`second` are username and password; for
/// [`Scenario::Rendering`] they are author and comment body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inputs {
    /// Username, or comment author
    pub first: String,
    /// Password, or comment body
    pub second: String,
    /// Current mode
    pub mode: Mode,
}

impl Inputs {
    fn apply(&mut self, effect: StepEffect) {
        self.mode = effect.mode;
        self.first.clear();
        self.first.push_str(effect.first);
        self.second.clear();
        self.second.push_str(effect.second);
    }

    fn clear(&mut self) {
        self.first.clear();
        self.second.clear();
    }
}

/// One classroom session.
///
/// # Examples
///
/// ```
/// use injection_lab::{Action, Lab, Verdict};
///
/// let mut lab = Lab::new("room-101");
///
/// // The walkthrough starts with a legitimate login
/// assert_eq!(lab.lookup_outcome().verdict, Verdict::Success);
///
/// // Step to the tautology payload
/// lab.handle(Action::JumpTo(3));
/// assert!(lab.lookup_outcome().is_injection());
///
/// // Switch on parameter binding
/// lab.handle(Action::ToggleProtection);
/// assert_eq!(lab.lookup_outcome().verdict, Verdict::Rejected);
/// ```
#[derive(Debug)]
pub struct Lab {
    session_id: String,
    records: RecordStore,
    scenario: Scenario,
    lookup: Inputs,
    rendering: Inputs,
    lookup_tutorial: Sequencer,
    rendering_tutorial: Sequencer,
    help_visible: bool,
}

impl Lab {
    /// A session with the built-in dataset and walkthroughs.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self::from_parts(
            session_id.into(),
            RecordStore::fixed(),
            Scenario::default(),
            Sequencer::lookup(),
            Sequencer::rendering(),
        )
    }

    /// Starts a [`LabBuilder`] for a customised session.
    pub fn builder(session_id: impl Into<String>) -> LabBuilder {
        LabBuilder::new(session_id)
    }

    /// Assembles a lab and mounts the active scenario's walkthrough.
    pub(crate) fn from_parts(
        session_id: String,
        records: RecordStore,
        scenario: Scenario,
        lookup_tutorial: Sequencer,
        rendering_tutorial: Sequencer,
    ) -> Self {
        let mut lab = Self {
            session_id,
            records,
            scenario,
            lookup: Inputs::default(),
            rendering: Inputs::default(),
            lookup_tutorial,
            rendering_tutorial,
            help_visible: false,
        };
        let effect = lab.tutorial().mount();
        lab.apply(effect);
        lab.log().info(format_args!(
            "lab ready: scenario={} records={} tutorial={}",
            lab.scenario,
            lab.records.len(),
            lab.tutorial().is_enabled()
        ));
        lab
    }

    /// Returns a logger bound to this session.
    pub fn log(&self) -> LabLog<'_> {
        LabLog::new(&self.session_id)
    }

    /// The session identifier.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// The dataset lookups run against.
    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    /// The active scenario.
    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Whether the help overlay is shown.
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Inputs of the active scenario.
    pub fn inputs(&self) -> &Inputs {
        self.inputs_for(self.scenario)
    }

    /// Inputs of a specific scenario.
    pub fn inputs_for(&self, scenario: Scenario) -> &Inputs {
        match scenario {
            Scenario::Lookup => &self.lookup,
            Scenario::Rendering => &self.rendering,
        }
    }

    /// Walkthrough of the active scenario.
    pub fn tutorial(&self) -> &Sequencer {
        self.tutorial_for(self.scenario)
    }

    /// Walkthrough of a specific scenario.
    pub fn tutorial_for(&self, scenario: Scenario) -> &Sequencer {
        match scenario {
            Scenario::Lookup => &self.lookup_tutorial,
            Scenario::Rendering => &self.rendering_tutorial,
        }
    }

    /// The step to narrate, if the active walkthrough is on.
    pub fn current_step(&self) -> Option<&TutorialStep> {
        let tutorial = self.tutorial();
        tutorial.is_enabled().then(|| tutorial.current())
    }

    /// Text-change event for the username or comment-author field.
    pub fn set_first_input(&mut self, value: impl Into<String>) {
        self.inputs_mut().first = value.into();
    }

    /// Text-change event for the password or comment-body field.
    pub fn set_second_input(&mut self, value: impl Into<String>) {
        self.inputs_mut().second = value.into();
    }

    /// Applies one action.
    pub fn handle(&mut self, action: Action) {
        self.log().debug(format_args!("handling {}", action));
        match action {
            Action::ToggleProtection => {
                self.lookup.mode = self.lookup.mode.toggled();
                self.log()
                    .debug(format_args!("lookup mode is now {}", self.lookup.mode));
            }
            Action::ToggleRawRender => {
                self.rendering.mode = self.rendering.mode.toggled();
                self.log()
                    .debug(format_args!("rendering mode is now {}", self.rendering.mode));
            }
            Action::ToggleTutorial => {
                let enabled = !self.tutorial().is_enabled();
                let effect = self.tutorial_mut().set_enabled(enabled);
                self.log().info(format_args!(
                    "{} tutorial {}",
                    self.scenario,
                    if enabled { "enabled" } else { "disabled" }
                ));
                self.apply(effect);
            }
            Action::NextStep => {
                let effect = self.tutorial_mut().next();
                self.apply(effect);
            }
            Action::PrevStep => {
                let effect = self.tutorial_mut().prev();
                self.apply(effect);
            }
            Action::JumpTo(index) => {
                let effect = self.tutorial_mut().jump(index);
                self.apply(effect);
            }
            Action::ResetInputs => self.inputs_mut().clear(),
            Action::SwitchScenario => {
                self.scenario = self.scenario.other();
                self.log()
                    .info(format_args!("switched to {} scenario", self.scenario));
                let effect = self.tutorial().mount();
                self.apply(effect);
            }
            Action::ToggleHelp => self.help_visible = !self.help_visible,
        }
    }

    /// Evaluates the login form as it currently stands.
    pub fn lookup_outcome(&self) -> Outcome<'_> {
        let outcome = evaluate_lookup(
            &self.records,
            &self.lookup.first,
            &self.lookup.second,
            self.lookup.mode,
        );
        if outcome.is_injection() {
            self.log().warn(format_args!(
                "simulated injection returned {} rows",
                outcome.matched.len()
            ));
        }
        outcome
    }

    /// Renders the guestbook comment as it currently stands.
    pub fn rendering(&self) -> Rendering {
        let rendering = evaluate_rendering(
            &self.rendering.first,
            &self.rendering.second,
            self.rendering.mode,
        );
        if rendering.execution_simulated {
            self.log()
                .warn(format_args!("simulated script execution in raw comment"));
        }
        rendering
    }

    fn inputs_mut(&mut self) -> &mut Inputs {
        match self.scenario {
            Scenario::Lookup => &mut self.lookup,
            Scenario::Rendering => &mut self.rendering,
        }
    }

    fn tutorial_mut(&mut self) -> &mut Sequencer {
        match self.scenario {
            Scenario::Lookup => &mut self.lookup_tutorial,
            Scenario::Rendering => &mut self.rendering_tutorial,
        }
    }

    fn apply(&mut self, effect: Option<StepEffect>) {
        if let Some(effect) = effect {
            let index = self.tutorial().index();
            self.inputs_mut().apply(effect);
            self.log().debug(format_args!(
                "applied {} step {} ({} mode)",
                self.scenario, index, effect.mode
            ));
        }
    }
}
