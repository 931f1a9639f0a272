//! Line-driven terminal front-end for the lab.
//!
//! Each line is either a key (`n`, `b`, `p`, `r`, `t`, `s`, `c`, `?`, `g<index>`)
//! or a text edit: `1:<text>` sets the username/author field, `2:<text>` the
//! password/comment field. `q` quits.
//!
//! Run with: `cargo run --example walkthrough`

use std::io::{self, BufRead, Write};

use injection_lab::{Action, Lab, Scenario, Verdict};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(io::stderr)
        .init();

    let mut lab = Lab::new("demo");
    print_state(&lab);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim_end();

        if line == "q" {
            break;
        } else if let Some(text) = line.strip_prefix("1:") {
            lab.set_first_input(text);
        } else if let Some(text) = line.strip_prefix("2:") {
            lab.set_second_input(text);
        } else {
            match Action::from_key(line) {
                Ok(action) => lab.handle(action),
                Err(e) => {
                    eprintln!("{}", e);
                    continue;
                }
            }
        }
        print_state(&lab);
    }
    Ok(())
}

fn print_state(lab: &Lab) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "\n=== {} scenario ===", lab.scenario());

    if let Some(step) = lab.current_step() {
        let tutorial = lab.tutorial();
        let _ = writeln!(
            out,
            "[step {}/{}] {}\n  {}",
            tutorial.index() + 1,
            tutorial.len(),
            step.title,
            step.narrative
        );
    }

    let inputs = lab.inputs();
    let _ = writeln!(out, "mode: {}", inputs.mode);

    match lab.scenario() {
        Scenario::Lookup => {
            let outcome = lab.lookup_outcome();
            let _ = writeln!(out, "username: {:?}\npassword: {:?}", inputs.first, inputs.second);
            let _ = writeln!(out, "query: {}", outcome.query);
            let _ = writeln!(out, "{}: {}", outcome.verdict, outcome.narrative);
            if outcome.verdict == Verdict::Success {
                for record in &outcome.matched {
                    let _ = writeln!(
                        out,
                        "  {:<8} {:<12} {:<6} {}",
                        record.identifier(),
                        record.secret().expose(),
                        record.role(),
                        record.contact()
                    );
                }
            }
        }
        Scenario::Rendering => {
            let rendering = lab.rendering();
            let _ = writeln!(out, "author: {:?}\ncomment: {:?}", inputs.first, inputs.second);
            let _ = writeln!(out, "page markup: {}", rendering.shown_markup());
            if rendering.execution_simulated {
                let _ = writeln!(out, "!! malicious script executed in the visitor's browser");
            }
        }
    }

    if lab.help_visible() {
        let _ = writeln!(
            out,
            "keys: n/b step  g<i> jump  t tutorial  p protect  r raw  c clear  s switch  ? help  q quit"
        );
    }
}
