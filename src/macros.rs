//! The check macros: vigil's public vocabulary of terminating diagnostics.
//!
//! Each form captures `file!()` and `line!()` at its invocation site and
//! funnels into [`report::fail`](crate::report::fail). The forms differ only
//! in which report mode and termination directive they select, so call sites
//! read as intent: [`require!`] for conditions whose failure is fatal but
//! expected, [`invariant!`] for programmer-error invariants that should crash
//! hard, [`must!`] for environment calls whose cause lives in the system
//! error indicator, and [`trace!`] for non-terminating breadcrumbs.

/// Checks a condition that should cause a controlled process exit.
///
/// When `cond` is false, reports the formatted message — or, in the bare
/// form, the condition's source text — and exits with
/// [`EXIT_FAILURE`](crate::EXIT_FAILURE). When `cond` is true this is a
/// complete no-op, with no output and no side effects.
///
/// ```no_run
/// # let listeners: Vec<u32> = vec![];
/// vigil::require!(!listeners.is_empty(), "no listen addresses configured");
/// ```
#[macro_export]
macro_rules! require {
	($cond:expr $(,)?) => {
		$crate::require!($cond, "{}", ::core::stringify!($cond))
	};
	($cond:expr, $fmt:literal $(, $($args:tt)* )?) => {
		if !($cond) {
			$crate::report::fail(
				::core::file!(),
				::core::line!(),
				$crate::report::Report::Plain,
				$crate::report::Termination::Exit($crate::EXIT_FAILURE),
				::core::format_args!($fmt $(, $($args)* )?),
			)
		}
	};
}

/// Reports an unconditional failure and exits with
/// [`EXIT_FAILURE`](crate::EXIT_FAILURE).
///
/// Equivalent to [`require!`] with a false condition; useful in `match` arms
/// and other spots where the failed state is already known.
#[macro_export]
macro_rules! fatal {
	($fmt:literal $(, $($args:tt)* )?) => {
		$crate::report::fail(
			::core::file!(),
			::core::line!(),
			$crate::report::Report::Plain,
			$crate::report::Termination::Exit($crate::EXIT_FAILURE),
			::core::format_args!($fmt $(, $($args)* )?),
		)
	};
}

/// Checks a program-logic invariant that must crash abnormally on failure.
///
/// When `cond` is false, reports the formatted message — or, in the bare
/// form, the condition's source text — and terminates via
/// [`Termination::Abort`](crate::Termination::Abort), so debug builds leave
/// an abort trap for a debugger or core dump. Use this for corrupted state
/// and impossible branches; use [`require!`] for failures an operator can
/// act on.
#[macro_export]
macro_rules! invariant {
	($cond:expr $(,)?) => {
		$crate::invariant!($cond, "{}", ::core::stringify!($cond))
	};
	($cond:expr, $fmt:literal $(, $($args:tt)* )?) => {
		if !($cond) {
			$crate::report::fail(
				::core::file!(),
				::core::line!(),
				$crate::report::Report::Plain,
				$crate::report::Termination::Abort,
				::core::format_args!($fmt $(, $($args)* )?),
			)
		}
	};
}

/// Reports an unconditional invariant violation and terminates abnormally.
///
/// Equivalent to [`invariant!`] with a false condition.
#[macro_export]
macro_rules! bug {
	($fmt:literal $(, $($args:tt)* )?) => {
		$crate::report::fail(
			::core::file!(),
			::core::line!(),
			$crate::report::Report::Plain,
			$crate::report::Termination::Abort,
			::core::format_args!($fmt $(, $($args)* )?),
		)
	};
}

/// Wraps a call whose failure is signaled by a false return and described by
/// the system error indicator.
///
/// When `call` evaluates false, reports the call's literal source text —
/// with the pending system error's description appended when the indicator
/// is non-zero — and exits with [`EXIT_FAILURE`](crate::EXIT_FAILURE). The
/// indicator is read immediately after the call, before anything else can
/// disturb it.
///
/// ```no_run
/// # fn raise_fd_limit() -> bool { true }
/// vigil::must!(raise_fd_limit());
/// ```
#[macro_export]
macro_rules! must {
	($call:expr $(,)?) => {
		if !($call) {
			$crate::report::fail(
				::core::file!(),
				::core::line!(),
				$crate::report::Report::System($crate::report::last_os_error()),
				$crate::report::Termination::Exit($crate::EXIT_FAILURE),
				::core::format_args!("{}", ::core::stringify!($call)),
			)
		}
	};
}

/// Writes a trace line to standard error and continues execution.
///
/// The line is `<file> (<line>)`, followed by a tab and the formatted
/// message when one is given. Debug builds only; in release builds the call
/// compiles to nothing.
#[macro_export]
macro_rules! trace {
	() => {
		$crate::report::trace(::core::file!(), ::core::line!(), ::core::option::Option::None)
	};
	($fmt:literal $(, $($args:tt)* )?) => {
		$crate::report::trace(
			::core::file!(),
			::core::line!(),
			::core::option::Option::Some(::core::format_args!($fmt $(, $($args)* )?)),
		)
	};
}
