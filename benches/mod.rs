use criterion::{criterion_group, criterion_main};

mod cli;

criterion_group!(
    benches,
    cli::session::bench_receive,
    cli::session::bench_dispatch,
    cli::session::bench_unknown_command,
    cli::session::bench_help
);
criterion_main!(benches);
