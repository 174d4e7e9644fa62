//! tests for the tagged diagnostics collaborator
use roots::root_finding::bisection::bisection;
use roots::root_finding::config::RootsCfg;
use roots::root_finding::diagnostics::{
    escalate_status, info, warn_error, DiagnosticSink, Escalation, FailurePolicy, Location,
    MemorySink, Severity,
};
use roots::root_finding::report::Status;
use roots::{roots_location, roots_warn};

type TestResult = Result<(), Box<dyn std::error::Error>>;

const HERE: Location = Location { file: "solver.rs", line: 42, function: "solve" };

#[test]
fn info_renders_named_fields() -> TestResult {
    let mut sink = MemorySink::new();
    info(&mut sink, "root {root} after {n} iterations", &[("n", &7), ("root", &1.5)]);
    info(&mut sink, "plain text", &[]);

    assert_eq!(sink.lines(), ["(roots) root 1.5 after 7 iterations", "(roots) plain text"]);
    assert_eq!(sink.contents(), "(roots) root 1.5 after 7 iterations\n(roots) plain text\n");
    Ok(())
}

#[test]
fn warning_writes_location_then_message() -> TestResult {
    let mut sink = MemorySink::new();
    warn_error(&mut sink, Severity::Warning, HERE, "slow convergence", Escalation::Warn);

    assert_eq!(
        sink.lines(),
        [
            "(roots) Warning in file: solver.rs, line: 42, function: solve",
            "(roots) Warning message: slow convergence",
        ]
    );
    Ok(())
}

#[test]
fn error_severity_with_warn_escalation_returns() -> TestResult {
    let mut sink = MemorySink::new();
    warn_error(&mut sink, Severity::Error, HERE, "bad input", Escalation::Warn);

    assert_eq!(sink.lines()[1], "(roots) Error message: bad input");
    Ok(())
}

#[test]
fn warn_macro_captures_call_site() -> TestResult {
    let mut sink = MemorySink::new();
    let line = line!() + 1;
    roots_warn!(&mut sink, "bracket width {}", 0.25);

    let header = &sink.lines()[0];
    assert!(header.starts_with("(roots) Warning in file: "));
    assert!(header.contains(file!()));
    assert!(header.contains(&format!("line: {line},")));
    assert!(header.ends_with("warn_macro_captures_call_site"));
    assert_eq!(sink.lines()[1], "(roots) Warning message: bracket width 0.25");
    Ok(())
}

#[test]
fn escalate_status_is_silent_on_success() -> TestResult {
    let mut sink = MemorySink::new();
    let res = bisection(|x: f64| x * x - 2.0, 0.0, 2.0, &RootsCfg::new())?;

    let status = escalate_status(&mut sink, &res, roots_location!(), FailurePolicy::ExitWithStatus);

    assert_eq!(status, Status::Success);
    assert!(sink.lines().is_empty());
    Ok(())
}

#[test]
fn escalate_status_warns_on_failure() -> TestResult {
    let mut sink = MemorySink::new();
    let res = bisection(|x: f64| x + 5.0, 0.0, 1.0, &RootsCfg::new())?;

    let status = escalate_status(&mut sink, &res, HERE, FailurePolicy::default());

    assert_eq!(status, Status::NotBracketed);
    assert_eq!(
        sink.lines(),
        [
            "(roots) Warning in file: solver.rs, line: 42, function: solve",
            "(roots) Warning message: Initial interval does not bracket the root.",
        ]
    );
    Ok(())
}

#[test]
fn custom_sinks_plug_in() -> TestResult {
    struct Counter(usize);
    impl DiagnosticSink for Counter {
        fn write_line(&mut self, _line: &str) {
            self.0 += 1;
        }
    }

    let mut counter = Counter(0);
    info(&mut counter, "one", &[]);
    warn_error(&mut counter, Severity::Warning, HERE, "two", Escalation::Warn);

    assert_eq!(counter.0, 3);
    Ok(())
}
