#![no_main]

use libfuzzer_sys::fuzz_target;

use vigil::report::{MAX_MESSAGE, Report, render_failure};

fuzz_target!(|data: &[u8]| {
	let msg = String::from_utf8_lossy(data);
	let line = render_failure("fuzz.rs", 1, &Report::Plain, format_args!("{msg}"));
	assert!(line.as_str().len() <= MAX_MESSAGE);
});
