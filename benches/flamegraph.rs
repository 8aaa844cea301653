//!
//! Use the pprof-rs profiler to write a flamegraph svg per benchmark.
//!
//! Needs to be called with `--profile-time=<seconds>`
//!

use criterion::{criterion_group, criterion_main, Criterion};
use pprof::criterion::{Output, PProfProfiler};
mod common;

criterion_group!{
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = common::scene::all
}
criterion_main!(benches);
