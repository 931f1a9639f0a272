//! Record-lookup scenario: a login form backed by a simulated query.
//!
//! In [`Mode::Unprotected`] the form behaves like a backend that splices the
//! inputs into SQL text. A stray quote breaks the statement and the tautology
//! payload turns the `WHERE` clause into "always true". In [`Mode::Protected`]
//! the inputs are bound as parameters and only an exact credential match
//! succeeds.

use std::fmt;

use crate::mode::Mode;
use crate::pattern::{is_attack_pattern, is_malformed};
use crate::record::{Record, RecordStore};

/// Simulated classification of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// At least one row came back
    Success,
    /// The query ran and returned nothing
    Rejected,
    /// The query failed to parse
    Malformed,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Success => write!(f, "success"),
            Verdict::Rejected => write!(f, "rejected"),
            Verdict::Malformed => write!(f, "malformed"),
        }
    }
}

/// The statement the simulated backend would have sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedQuery {
    /// SQL text, with inputs spliced in or replaced by `?`
    pub text: String,
    /// Bound parameters, empty for a concatenated query
    pub params: Vec<String>,
}

impl SimulatedQuery {
    fn build(identifier: &str, secret: &str, mode: Mode) -> Self {
        match mode {
            Mode::Protected => Self {
                text: "SELECT * FROM users WHERE username = ? AND password = ?".to_string(),
                params: vec![identifier.to_string(), secret.to_string()],
            },
            Mode::Unprotected => Self {
                text: format!(
                    "SELECT * FROM users WHERE username = '{}' AND password = '{}'",
                    identifier, secret
                ),
                params: Vec::new(),
            },
        }
    }
}

impl fmt::Display for SimulatedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if !self.params.is_empty() {
            write!(f, " -- params: [")?;
            for (i, p) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{:?}", p)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

/// Result of [`evaluate_lookup`].
///
/// Borrows the matched rows from the store it was evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<'a> {
    /// The classification
    pub verdict: Verdict,
    /// Rows returned, in store order
    pub matched: Vec<&'a Record>,
    /// Explanation suitable for display
    pub narrative: String,
    /// The statement that was simulated
    pub query: SimulatedQuery,
    /// Whether the rows came back because of the tautology payload
    pub injected: bool,
}

impl Outcome<'_> {
    /// Returns `true` if the success came from the injection path.
    pub fn is_injection(&self) -> bool {
        self.injected
    }
}

/// Evaluates a login attempt against `store`.
///
/// Unprotected evaluation checks for a malformed statement before it looks
/// for the tautology, so `"' OR '1'='1'"` (odd quote count) is a syntax error
/// rather than an injection.
///
/// # Examples
///
/// ```
/// use injection_lab::{evaluate_lookup, Mode, RecordStore, Verdict};
///
/// let store = RecordStore::fixed();
///
/// let outcome = evaluate_lookup(&store, "' OR '1'='1", "x", Mode::Unprotected);
/// assert_eq!(outcome.verdict, Verdict::Success);
/// assert_eq!(outcome.matched.len(), store.len());
///
/// let outcome = evaluate_lookup(&store, "' OR '1'='1", "x", Mode::Protected);
/// assert_eq!(outcome.verdict, Verdict::Rejected);
/// ```
pub fn evaluate_lookup<'a>(
    store: &'a RecordStore,
    identifier: &str,
    secret: &str,
    mode: Mode,
) -> Outcome<'a> {
    let query = SimulatedQuery::build(identifier, secret, mode);

    if mode.renders_raw() {
        if is_malformed(identifier) || is_malformed(secret) {
            return Outcome {
                verdict: Verdict::Malformed,
                matched: Vec::new(),
                narrative: "Syntax error: unterminated quoted string in the generated query."
                    .to_string(),
                query,
                injected: false,
            };
        }

        if is_attack_pattern(identifier, secret) {
            let matched: Vec<&Record> = store.iter().collect();
            return Outcome {
                verdict: Verdict::Success,
                narrative: format!(
                    "Injection succeeded: '1'='1' is always true, so the WHERE clause matched all {} rows.",
                    matched.len()
                ),
                matched,
                query,
                injected: true,
            };
        }
    }

    match store.find(identifier, secret) {
        Some(record) => Outcome {
            verdict: Verdict::Success,
            matched: vec![record],
            narrative: format!("Welcome back, {}.", record.identifier()),
            query,
            injected: false,
        },
        None => Outcome {
            verdict: Verdict::Rejected,
            matched: Vec::new(),
            narrative: match mode {
                Mode::Protected => {
                    "Invalid username or password. Inputs were bound as data and compared literally."
                        .to_string()
                }
                Mode::Unprotected => "Invalid username or password.".to_string(),
            },
            query,
            injected: false,
        },
    }
}
