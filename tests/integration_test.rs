//! End-to-end flows through the public API.

use injection_lab::{
    evaluate_lookup, evaluate_rendering, neutralize, Action, ErrorKind, Lab, LabBuilder, Mode,
    Record, RecordStore, Role, Scenario, Verdict,
};

#[test]
fn lookup_properties_hold_for_the_fixed_store() {
    let store = RecordStore::fixed();

    for record in store.list() {
        let outcome = evaluate_lookup(
            &store,
            record.identifier(),
            record.secret().expose(),
            Mode::Protected,
        );
        assert_eq!(outcome.verdict, Verdict::Success);
        assert_eq!(outcome.matched, vec![record]);
    }

    let outcome = evaluate_lookup(&store, "'", "anything", Mode::Unprotected);
    assert_eq!(outcome.verdict, Verdict::Malformed);

    let outcome = evaluate_lookup(&store, "' OR '1'='1", "x", Mode::Unprotected);
    assert_eq!(outcome.verdict, Verdict::Success);
    assert_eq!(outcome.matched, store.list().iter().collect::<Vec<_>>());

    let outcome = evaluate_lookup(&store, "' OR '1'='1", "x", Mode::Protected);
    assert_eq!(outcome.verdict, Verdict::Rejected);
    assert!(outcome.matched.is_empty());
}

#[test]
fn injected_rows_expose_passwords_only_on_request() {
    let store = RecordStore::fixed();
    let outcome = evaluate_lookup(&store, "' OR '1'='1", "", Mode::Unprotected);

    let debug_output = format!("{:?}", outcome);
    assert!(!debug_output.contains("admin123"));
    assert!(!debug_output.contains("password123"));

    let leaked: Vec<&str> = outcome.matched.iter().map(|r| r.secret().expose()).collect();
    assert_eq!(leaked, vec!["admin123", "password123", "qwerty", "guest"]);
}

#[test]
fn neutralized_script_is_inert() {
    let html = neutralize("<script>");
    assert!(!html.as_str().contains('<'));
    assert!(!html.as_str().contains('>'));

    let rendering = evaluate_rendering("x", "<script>alert(1)</script>", Mode::Protected);
    assert!(!rendering.execution_simulated);
    assert!(!rendering.shown_markup().contains("<script"));
}

#[test]
fn full_lookup_walkthrough_by_keys() {
    let mut lab = Lab::new("integration");
    let mut verdicts = vec![lab.lookup_outcome().verdict];

    for _ in 0..4 {
        lab.handle(Action::from_key("n").unwrap());
        verdicts.push(lab.lookup_outcome().verdict);
    }

    assert_eq!(
        verdicts,
        vec![
            Verdict::Success,
            Verdict::Rejected,
            Verdict::Malformed,
            Verdict::Success,
            Verdict::Rejected,
        ]
    );
    assert!(lab.tutorial().is_last());

    // Saturates at the last step
    lab.handle(Action::NextStep);
    assert_eq!(lab.tutorial().index(), 4);
}

#[test]
fn disable_then_enable_applies_effect_once() {
    let mut lab = Lab::new("integration");
    lab.handle(Action::JumpTo(3));
    lab.handle(Action::ToggleTutorial);

    lab.set_first_input("alice");
    lab.set_second_input("password123");
    lab.handle(Action::NextStep);
    assert_eq!(lab.inputs().first, "alice");
    assert_eq!(lab.tutorial().index(), 3);

    lab.handle(Action::ToggleTutorial);
    assert_eq!(lab.inputs().first, "' OR '1'='1");
    assert!(lab.lookup_outcome().is_injection());
}

#[test]
fn jump_keys_clamp() {
    let mut lab = Lab::new("integration");

    lab.handle(Action::from_key("g999").unwrap());
    assert_eq!(lab.tutorial().index(), 4);

    lab.handle(Action::from_key("g-5").unwrap());
    assert_eq!(lab.tutorial().index(), 0);
}

#[test]
fn unknown_key_is_an_error_not_a_panic() {
    let err = Action::from_key("q").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownKey { .. }));
    assert!(err.to_string().contains("'q'"));
}

#[test]
fn rendering_scenario_from_builder() {
    let mut lab = LabBuilder::new("integration")
        .scenario(Scenario::Rendering)
        .build()
        .unwrap();

    assert!(!lab.rendering().execution_simulated);

    lab.set_second_input("<body onload=steal()>");
    assert!(lab.rendering().execution_simulated);

    lab.handle(Action::from_key("r").unwrap());
    assert!(!lab.rendering().execution_simulated);
    assert_eq!(
        lab.rendering().shown().message,
        "&lt;body onload=steal()&gt;"
    );
}

#[test]
fn custom_store_with_duplicates_is_rejected() {
    let err = RecordStore::new(vec![
        Record::new("x", "1", Role::User, "x@example.com"),
        Record::new("x", "2", Role::User, "x@example.com"),
    ])
    .unwrap_err();

    assert_eq!(
        err.kind,
        ErrorKind::DuplicateRecord {
            identifier: "x".to_string()
        }
    );
}

#[test]
fn logging_with_a_subscriber_installed() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut lab = Lab::new("logged");
        lab.handle(Action::JumpTo(3));
        assert!(lab.lookup_outcome().is_injection());
        lab.handle(Action::SwitchScenario);
        lab.handle(Action::JumpTo(2));
        assert!(lab.rendering().execution_simulated);
    });
}
