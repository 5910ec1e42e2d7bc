//! The reporting primitive behind vigil's check macros.
//!
//! Every check macro funnels into [`fail`], which makes two decisions for a
//! failed check: how to describe the failure on standard error, and how to
//! terminate the process afterward. The two axes are independent, and are
//! exposed as [`Report`] and [`Termination`] so the handful of macro forms
//! stay thin wrappers over one primitive.
//!
//! Debug and release builds compile different bodies for the reporting step.
//! Debug builds render the message and write it to standard error before
//! terminating. Release builds skip rendering and writing entirely and go
//! straight to termination, so shipped binaries pay no formatting cost and
//! leak no diagnostic text. The split is fixed per compiled artifact by
//! `debug_assertions`; there is no runtime switch.

use std::fmt::{self, Write as _};
use std::io;
use std::process;

/// Maximum rendered length of one diagnostic line, in bytes.
///
/// Messages that would render longer are truncated on a character boundary
/// rather than rejected; see [`MessageBuf`].
pub const MAX_MESSAGE: usize = 512;

/// What happens to the process after a failed check is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
	/// Exit normally with the given status code.
	Exit(i32),
	/// Terminate abnormally, raising the host platform's abort trap so a
	/// debugger or core dump can inspect the process at the point of failure.
	///
	/// In release builds this degrades to an ordinary exit with
	/// [`EXIT_FAILURE`](crate::EXIT_FAILURE); see [the crate
	/// documentation](crate).
	Abort,
}

impl Termination {
	/// Terminates the current process per this directive.
	///
	/// No destructors run beyond what the process-termination primitives
	/// themselves guarantee.
	pub fn raise(self) -> ! {
		match self {
			Termination::Exit(code) => process::exit(code),
			#[cfg(debug_assertions)]
			Termination::Abort => process::abort(),
			#[cfg(not(debug_assertions))]
			Termination::Abort => process::exit(crate::EXIT_FAILURE),
		}
	}
}

/// How a failed check describes itself on standard error.
#[derive(Debug)]
pub enum Report {
	/// The rendered message alone.
	Plain,
	/// The rendered message with a trailing system error description, when
	/// one is present. With `None` the report falls back to a plain line.
	System(Option<io::Error>),
}

/// Captures the calling thread's last OS error for a [`Report::System`]
/// report.
///
/// Returns `None` when the error-number indicator is clear, so a failed call
/// that left no system error behind reports as a plain message instead of a
/// stale or meaningless description. This crate only ever reads the
/// indicator; it never writes it.
pub fn last_os_error() -> Option<io::Error> {
	let err = io::Error::last_os_error();
	match err.raw_os_error() {
		None | Some(0) => None,
		Some(_) => Some(err),
	}
}

/// Reports a failed check and terminates the process.
///
/// The macro layer evaluates the condition and calls this only when it is
/// false; `file` and `line` identify the invocation site. In debug builds the
/// rendered line is written to standard error before terminating. In release
/// builds the reporting step is compiled out and the process terminates
/// silently.
pub fn fail(
	file: &str,
	line: u32,
	report: Report,
	termination: Termination,
	msg: fmt::Arguments<'_>,
) -> ! {
	emit(file, line, &report, msg);
	termination.raise()
}

#[cfg(debug_assertions)]
fn emit(file: &str, line: u32, report: &Report, msg: fmt::Arguments<'_>) {
	use std::io::Write as _;
	let rendered = render_failure(file, line, report, msg);
	let _ = writeln!(io::stderr().lock(), "{}", rendered.as_str());
}

#[cfg(not(debug_assertions))]
#[inline(always)]
fn emit(_file: &str, _line: u32, _report: &Report, _msg: fmt::Arguments<'_>) {}

/// Writes a trace line to standard error and returns to the caller.
///
/// This is the only non-terminating operation in the crate. Debug builds
/// write `<file> (<line>)`, followed by a tab and the message when one is
/// provided. In release builds the body is empty and calls compile to
/// nothing.
#[cfg(debug_assertions)]
pub fn trace(file: &str, line: u32, msg: Option<fmt::Arguments<'_>>) {
	use std::io::Write as _;
	let rendered = render_trace(file, line, msg);
	let _ = writeln!(io::stderr().lock(), "{}", rendered.as_str());
}

#[cfg(not(debug_assertions))]
#[inline(always)]
pub fn trace(_file: &str, _line: u32, _msg: Option<fmt::Arguments<'_>>) {}

/// Renders the standard failure line for a check at `file` and `line`.
///
/// The format is `<file> (<line>): <message>`, with `: <description>`
/// appended when the report carries a system error. Rendering never fails;
/// over-long output truncates per [`MessageBuf`].
pub fn render_failure(
	file: &str,
	line: u32,
	report: &Report,
	msg: fmt::Arguments<'_>,
) -> MessageBuf {
	let mut buf = MessageBuf::new();
	let _ = write!(buf, "{file} ({line}): {msg}");
	if let Report::System(Some(err)) = report {
		let _ = write!(buf, ": {err}");
	}
	buf
}

/// Renders a trace line: `<file> (<line>)`, plus a tab and the message when
/// one is provided.
pub fn render_trace(file: &str, line: u32, msg: Option<fmt::Arguments<'_>>) -> MessageBuf {
	let mut buf = MessageBuf::new();
	let _ = write!(buf, "{file} ({line})");
	if let Some(msg) = msg {
		let _ = write!(buf, "\t{msg}");
	}
	buf
}

/// A bounded buffer for rendering one diagnostic line.
///
/// Writes beyond [`MAX_MESSAGE`] bytes are dropped on a UTF-8 character
/// boundary rather than reported as errors, so an arbitrarily long message
/// still renders its prefix and the check that produced it still terminates
/// the process it was meant to terminate. The bound is a robustness limit on
/// a diagnostic path, not an error condition.
pub struct MessageBuf(String);

impl MessageBuf {
	/// Creates an empty buffer with the full [`MAX_MESSAGE`] capacity
	/// reserved.
	pub fn new() -> MessageBuf {
		MessageBuf(String::with_capacity(MAX_MESSAGE))
	}

	/// Returns the rendered line.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Default for MessageBuf {
	fn default() -> MessageBuf {
		MessageBuf::new()
	}
}

impl fmt::Write for MessageBuf {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		let remaining = MAX_MESSAGE - self.0.len();
		if s.len() <= remaining {
			self.0.push_str(s);
		} else {
			let mut end = remaining;
			while !s.is_char_boundary(end) {
				end -= 1;
			}
			self.0.push_str(&s[..end]);
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::{MAX_MESSAGE, MessageBuf, Report, render_failure, render_trace};
	use rstest::rstest;
	use similar_asserts::assert_eq;
	use std::fmt::Write as _;
	use std::io;

	#[test]
	fn failure_line_format() {
		let line = render_failure("main.rs", 42, &Report::Plain, format_args!("x={}", 5));
		assert_eq!(line.as_str(), "main.rs (42): x=5");
	}

	#[test]
	fn failure_line_with_system_error() {
		let line = render_failure(
			"io.rs",
			7,
			&Report::System(Some(io::Error::from_raw_os_error(2))),
			format_args!("open failed"),
		);
		// io::Error isn't Clone, so build the expected suffix from a second
		// error with the same code.
		let expected = format!("io.rs (7): open failed: {}", io::Error::from_raw_os_error(2));
		assert_eq!(line.as_str(), expected);
	}

	#[test]
	fn system_report_without_error_falls_back_to_plain() {
		let line = render_failure(
			"io.rs",
			7,
			&Report::System(None),
			format_args!("open failed"),
		);
		assert_eq!(line.as_str(), "io.rs (7): open failed");
	}

	#[test]
	fn trace_line_format() {
		let with_msg = render_trace("srv.rs", 3, Some(format_args!("listening")));
		assert_eq!(with_msg.as_str(), "srv.rs (3)\tlistening");

		let bare = render_trace("srv.rs", 4, None);
		assert_eq!(bare.as_str(), "srv.rs (4)");
	}

	#[test]
	fn over_long_message_truncates_instead_of_failing() {
		let line = render_failure(
			"long.rs",
			1,
			&Report::Plain,
			format_args!("{}", "y".repeat(MAX_MESSAGE * 4)),
		);
		assert_eq!(line.as_str().len(), MAX_MESSAGE);
		assert!(line.as_str().starts_with("long.rs (1): y"));
		assert!(line.as_str().ends_with('y'));
	}

	#[rstest]
	#[case::ascii('z')]
	#[case::two_byte('é')]
	#[case::four_byte('🦀')]
	fn truncation_respects_character_boundaries(#[case] fill: char) {
		let mut buf = MessageBuf::new();
		let long = String::from(fill).repeat(MAX_MESSAGE);
		assert_eq!(write!(buf, "prefix {long}"), Ok(()));
		assert!(buf.as_str().len() <= MAX_MESSAGE);
		assert!(buf.as_str().starts_with("prefix "));
		// A mid-character cut would have made the buffer invalid UTF-8, which
		// `String` rules out; check the cut landed on a whole fill character.
		assert!(buf.as_str().ends_with(fill));
	}

	#[test]
	fn full_buffer_accepts_further_writes() {
		let mut buf = MessageBuf::new();
		assert_eq!(write!(buf, "{}", "a".repeat(MAX_MESSAGE)), Ok(()));
		assert_eq!(write!(buf, "more"), Ok(()));
		assert_eq!(buf.as_str().len(), MAX_MESSAGE);
	}

	#[cfg(unix)]
	#[test]
	fn last_os_error_reads_errno() {
		// SAFETY: closing a descriptor that was never open has no effect
		// beyond setting errno.
		unsafe { libc::close(-1) };
		let err = super::last_os_error().expect("EBADF should be pending");
		assert_eq!(err.raw_os_error(), Some(libc::EBADF));
	}
}
