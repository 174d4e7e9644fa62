//! Tagged diagnostic output and the warn/escalate policy.
//!
//! Solvers never print, exit or abort. Callers that want the classic
//! `(roots)`-tagged messages route them through a [`DiagnosticSink`]:
//!
//! ┌ [`info`]            : one tagged line from a template plus named fields
//! ├ [`warn_error`]      : location + message lines, then [`Escalation`]
//! └ [`escalate_status`] : applies a [`FailurePolicy`] to a [`SolveResult`]
//!
//! Every line is mirrored to `tracing` so that subscriber-based logging
//! sees the same events.

use std::fmt;
use std::io::Write;
use tracing::{error, info as trace_info, warn};
use super::report::{SolveResult, Status, TAG};


/// Destination for tagged diagnostic lines.
pub trait DiagnosticSink {
    /// Writes one complete line (without the trailing newline).
    fn write_line(&mut self, line: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}


/// Writes lines to the process's standard output.
#[derive(Debug, Default, Copy, Clone)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        // write failures are ignored
        let _ = writeln!(std::io::stdout().lock(), "{line}");
    }
}


/// Writes lines to the process's standard error.
#[derive(Debug, Default, Copy, Clone)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn write_line(&mut self, line: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }
}


/// Collects lines in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines, each terminated by a newline.
    pub fn contents(&self) -> String {
        self.lines.iter().map(|l| format!("{l}\n")).collect()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}


/// Substitutes `{name}` placeholders in `template` with the matching field.
///
/// Placeholders without a matching field, and unmatched braces, are kept
/// verbatim.
pub fn render(template: &str, fields: &[(&str, &dyn fmt::Display)]) -> String {
    let mut out  = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match fields.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(&value.to_string()),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}


/// Writes one informational line, `(roots) ` followed by the rendered
/// template.
///
/// ```
/// use roots::root_finding::diagnostics::{info, MemorySink};
///
/// let mut sink = MemorySink::new();
/// info(&mut sink, "solved in {n} iterations", &[("n", &12)]);
/// assert_eq!(sink.lines(), ["(roots) solved in 12 iterations"]);
/// ```
pub fn info<S>(sink: &mut S, template: &str, fields: &[(&str, &dyn fmt::Display)])
where S: DiagnosticSink + ?Sized {
    let message = render(template, fields);
    trace_info!(target: "roots", "{message}");
    sink.write_line(&format!("{TAG} {message}"));
}


/// Label of a warn/error message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("Warning"),
            Severity::Error   => f.write_str("Error"),
        }
    }
}


/// Source position reported by [`warn_error`]. Built by
/// [`roots_location!`](crate::roots_location).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Location {
    pub file:     &'static str,
    pub line:     u32,
    pub function: &'static str,
}


/// What [`warn_error`] does after writing its message.
///
/// ┌ `Warn`       : return to the caller
/// ├ `Abort`      : `std::process::abort()`
/// └ `Exit(code)` : `std::process::exit(code)`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Escalation {
    Warn,
    Abort,
    Exit(i32),
}


/// Writes a located warning or error, then escalates.
///
/// Output (two lines):
/// ```text
/// (roots) <Severity> in file: <file>, line: <line>, function: <function>
/// (roots) <Severity> message: <message>
/// ```
///
/// Only [`Escalation::Warn`] returns.
pub fn warn_error<S>(
    sink: &mut S,
    severity: Severity,
    location: Location,
    message: &str,
    escalation: Escalation,
) where S: DiagnosticSink + ?Sized {
    let Location { file, line, function } = location;
    sink.write_line(&format!(
        "{TAG} {severity} in file: {file}, line: {line}, function: {function}"
    ));
    sink.write_line(&format!("{TAG} {severity} message: {message}"));

    match severity {
        Severity::Warning => warn!(target: "roots", file, line, function, "{message}"),
        Severity::Error   => error!(target: "roots", file, line, function, ?escalation, "{message}"),
    }

    match escalation {
        Escalation::Warn      => {}
        Escalation::Abort     => std::process::abort(),
        Escalation::Exit(code) => std::process::exit(code),
    }
}


/// How [`escalate_status`] treats a failed solve.
///
/// ┌ `Warn`           : report as a warning and return
/// ├ `ExitWithStatus` : report as an error, exit with [`Status::exit_code`]
/// └ `Abort`          : report as an error, abort
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    #[default]
    Warn,
    ExitWithStatus,
    Abort,
}


/// Routes a non-success [`SolveResult`] through [`warn_error`].
///
/// Successful results write nothing. Returns the status when the policy
/// lets the call return.
pub fn escalate_status<S>(
    sink: &mut S,
    result: &SolveResult,
    location: Location,
    policy: FailurePolicy,
) -> Status
where S: DiagnosticSink + ?Sized {
    let Some(message) = result.error_message() else {
        return result.status;
    };

    let (severity, escalation) = match policy {
        FailurePolicy::Warn           => (Severity::Warning, Escalation::Warn),
        FailurePolicy::ExitWithStatus => (Severity::Error, Escalation::Exit(result.status.exit_code())),
        FailurePolicy::Abort          => (Severity::Error, Escalation::Abort),
    };
    warn_error(sink, severity, location, &message, escalation);
    result.status
}


/// Name of the enclosing function, for [`Location`].
#[doc(hidden)]
#[macro_export]
macro_rules! __roots_function {
    () => {{
        fn here() {}
        fn name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = name_of(here);
        name.strip_suffix("::here").unwrap_or(name)
    }};
}


/// [`Location`] of the macro call site.
#[macro_export]
macro_rules! roots_location {
    () => {
        $crate::root_finding::diagnostics::Location {
            file:     file!(),
            line:     line!(),
            function: $crate::__roots_function!(),
        }
    };
}


/// Writes a located warning to `sink` and returns.
///
/// `roots_warn!(sink, "bracket [{}, {}] is wide", a, b)`
#[macro_export]
macro_rules! roots_warn {
    ($sink:expr, $($arg:tt)+) => {
        $crate::root_finding::diagnostics::warn_error(
            $sink,
            $crate::root_finding::diagnostics::Severity::Warning,
            $crate::roots_location!(),
            &format!($($arg)+),
            $crate::root_finding::diagnostics::Escalation::Warn,
        )
    };
}


/// Writes a located error to `sink`, then exits the process with `code`.
///
/// `roots_error!(sink, 2, "giving up after {} iterations", n)`
#[macro_export]
macro_rules! roots_error {
    ($sink:expr, $code:expr, $($arg:tt)+) => {
        $crate::root_finding::diagnostics::warn_error(
            $sink,
            $crate::root_finding::diagnostics::Severity::Error,
            $crate::roots_location!(),
            &format!($($arg)+),
            $crate::root_finding::diagnostics::Escalation::Exit($code),
        )
    };
}


/// Writes a located error to `sink`, then aborts the process.
#[macro_export]
macro_rules! roots_abort {
    ($sink:expr, $($arg:tt)+) => {
        $crate::root_finding::diagnostics::warn_error(
            $sink,
            $crate::root_finding::diagnostics::Severity::Error,
            $crate::roots_location!(),
            &format!($($arg)+),
            $crate::root_finding::diagnostics::Escalation::Abort,
        )
    };
}
