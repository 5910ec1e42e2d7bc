use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use vigil::report::{MAX_MESSAGE, Report, render_failure};

criterion_main!(render);

criterion_group! {
	name = render;
	config = Criterion::default();
	targets = short_message, truncated_message, system_error_suffix
}

/// The common case: a short formatted message, well under the buffer bound.
fn short_message(c: &mut Criterion) {
	c.bench_function("short_message", |b| {
		b.iter(|| {
			render_failure(
				black_box("bench.rs"),
				black_box(10),
				&Report::Plain,
				format_args!("x={}", black_box(5)),
			)
		});
	});
}

/// A message several times the buffer bound, exercising the truncation path.
fn truncated_message(c: &mut Criterion) {
	let filler = "y".repeat(MAX_MESSAGE * 4);
	c.bench_function("truncated_message", |b| {
		b.iter(|| {
			render_failure(
				black_box("bench.rs"),
				black_box(10),
				&Report::Plain,
				format_args!("{}", black_box(filler.as_str())),
			)
		});
	});
}

/// A system-error report, including the description lookup's Display cost.
fn system_error_suffix(c: &mut Criterion) {
	c.bench_function("system_error_suffix", |b| {
		b.iter(|| {
			let report = Report::System(Some(std::io::Error::from_raw_os_error(black_box(2))));
			render_failure(black_box("bench.rs"), black_box(10), &report, format_args!("open"))
		});
	});
}
