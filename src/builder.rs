use crate::error::Error;
use crate::lab::{Lab, Scenario};
use crate::record::RecordStore;
use crate::tutorial::{lookup_steps, rendering_steps, Sequencer, TutorialStep};

/// Configures and validates a [`Lab`].
///
/// `LabBuilder` is the checked way to customise a session. Step tables are
/// validated in [`build`](Self::build); anything left unset falls back to the
/// built-in dataset and walkthroughs.
///
/// # Examples
///
/// ```
/// use injection_lab::{Lab, LabBuilder, Scenario};
///
/// let lab = LabBuilder::new("room-101")
///     .scenario(Scenario::Rendering)
///     .tutorial(false)
///     .build()
///     .expect("default tables are valid");
///
/// assert_eq!(lab.scenario(), Scenario::Rendering);
/// assert!(lab.current_step().is_none());
/// ```
#[derive(Debug)]
pub struct LabBuilder {
    session_id: String,
    records: Option<RecordStore>,
    scenario: Scenario,
    tutorial: bool,
    lookup_steps: Option<Vec<TutorialStep>>,
    rendering_steps: Option<Vec<TutorialStep>>,
}

impl LabBuilder {
    /// Creates a builder for the given session.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            records: None,
            scenario: Scenario::default(),
            tutorial: true,
            lookup_steps: None,
            rendering_steps: None,
        }
    }

    /// Replaces the built-in dataset.
    pub fn records(mut self, records: RecordStore) -> Self {
        self.records = Some(records);
        self
    }

    /// Sets the scenario shown first.
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = scenario;
        self
    }

    /// Starts both walkthroughs enabled (the default) or disabled.
    pub fn tutorial(mut self, enabled: bool) -> Self {
        self.tutorial = enabled;
        self
    }

    /// Replaces the query injection walkthrough.
    pub fn lookup_steps(mut self, steps: Vec<TutorialStep>) -> Self {
        self.lookup_steps = Some(steps);
        self
    }

    /// Replaces the script injection walkthrough.
    pub fn rendering_steps(mut self, steps: Vec<TutorialStep>) -> Self {
        self.rendering_steps = Some(steps);
        self
    }

    /// Builds the lab after validating the configured step tables.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::EmptyTutorial`](crate::ErrorKind::EmptyTutorial)
    /// if either custom step table is empty.
    pub fn build(self) -> Result<Lab, Error> {
        let mut lookup_tutorial = Sequencer::new(self.lookup_steps.unwrap_or_else(lookup_steps))?;
        let mut rendering_tutorial =
            Sequencer::new(self.rendering_steps.unwrap_or_else(rendering_steps))?;

        lookup_tutorial.set_enabled(self.tutorial);
        rendering_tutorial.set_enabled(self.tutorial);

        Ok(Lab::from_parts(
            self.session_id,
            self.records.unwrap_or_default(),
            self.scenario,
            lookup_tutorial,
            rendering_tutorial,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::lookup::Verdict;
    use crate::mode::Mode;
    use crate::record::{Record, Role};
    use crate::tutorial::StepEffect;

    #[test]
    fn defaults_match_lab_new() {
        let built = LabBuilder::new("a").build().unwrap();
        let plain = Lab::new("a");

        assert_eq!(built.scenario(), plain.scenario());
        assert_eq!(built.inputs(), plain.inputs());
        assert_eq!(built.records().len(), plain.records().len());
    }

    #[test]
    fn empty_steps_fail_validation() {
        let err = LabBuilder::new("a")
            .rendering_steps(Vec::new())
            .build()
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyTutorial);
    }

    #[test]
    fn disabled_tutorial_leaves_blank_inputs() {
        let lab = LabBuilder::new("a").tutorial(false).build().unwrap();

        assert_eq!(lab.inputs().first, "");
        assert!(!lab.tutorial_for(Scenario::Lookup).is_enabled());
        assert!(!lab.tutorial_for(Scenario::Rendering).is_enabled());
    }

    #[test]
    fn custom_records_and_steps() {
        let records = RecordStore::new(vec![Record::new(
            "instructor",
            "chalk",
            Role::Admin,
            "instructor@school.test",
        )])
        .unwrap();
        let steps = vec![TutorialStep {
            title: "Only step",
            narrative: "Log in as the instructor.",
            effect: StepEffect {
                mode: Mode::Protected,
                first: "instructor",
                second: "chalk",
            },
        }];

        let lab = LabBuilder::new("a")
            .records(records)
            .lookup_steps(steps)
            .build()
            .unwrap();

        let outcome = lab.lookup_outcome();
        assert_eq!(outcome.verdict, Verdict::Success);
        assert_eq!(outcome.matched[0].identifier(), "instructor");
        assert_eq!(lab.tutorial().len(), 1);
    }
}
