//! Terminating runtime checks with consistent failure reporting.
//!
//! vigil gives a program a small vocabulary of checks for conditions whose
//! failure is fatal to the process: [`require!`] for "report and exit,"
//! [`invariant!`] for "report and abort," [`must!`] for "call and
//! exit-on-failure with the system error," and [`trace!`] for non-terminating
//! breadcrumbs. All of them funnel through one reporting primitive,
//! [`report::fail`], so failure output and termination policy stay consistent
//! across a codebase.
//!
//! # Debug and release personalities
//!
//! The crate compiles one of two personalities per artifact, selected by
//! `debug_assertions`:
//!
//! - **Debug** builds report every failure to standard error as
//!   `<file> (<line>): <message>`, bounded to [`report::MAX_MESSAGE`] bytes,
//!   before terminating. [`trace!`] writes its line and continues.
//!
//! - **Release** builds terminate silently: no formatting, no write, no
//!   diagnostic text in the binary's output. Abort-class failures also relax
//!   to an ordinary exit with [`EXIT_FAILURE`] instead of trapping, trading
//!   the core dump for a deterministic status. [`trace!`] compiles to
//!   nothing.
//!
//! # What vigil is not
//!
//! There is no logger here, no levels, and no recovery: every failed check is
//! terminal for the process, and "handling" a failure means choosing how to
//! terminate, not returning an error. Programs that want to propagate
//! failures to a caller want a `Result`, not a check.

#![deny(
	// Enforce some additional strictness on unsafe code.
	unsafe_op_in_unsafe_fn,
	clippy::undocumented_unsafe_blocks,
	// Deny a number of `as` casts in favor of safer alternatives.
	clippy::as_underscore,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::checked_conversions,
	clippy::unnecessary_cast,
	// More general style-type things.
	clippy::from_over_into,
	clippy::needless_raw_string_hashes,
	clippy::semicolon_if_nothing_returned,
)]
#![warn(
	// Writes to standard error belong in the report module, behind the one
	// primitive, not scattered through the crate.
	clippy::print_stderr,
	clippy::print_stdout,
	// The following macros represent incomplete implementation work.
	clippy::todo,
	clippy::unimplemented,
	// Style-type things that might not need an _immediate_ fix.
	clippy::doc_markdown,
	clippy::similar_names,
)]

mod macros;
pub mod report;

pub use report::{Report, Termination};

/// The catch-all exit status for failed checks.
///
/// The host program owns its wider exit code enumeration; vigil pins only
/// this conventional general-failure value as the default for
/// assertion-style checks. Checks that need a different status can call
/// [`report::fail`] with their own [`Termination::Exit`] code.
pub const EXIT_FAILURE: i32 = 1;
