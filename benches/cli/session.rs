use criterion::{BatchSize, Criterion, Throughput};
use libcli::cli::{Cli, Config, Console, Sink, Status};
use std::hint::black_box;

struct NullTerminal;

impl Sink for NullTerminal {
    fn put_char(&mut self, byte: u8) -> Status {
        black_box(byte);
        Status::Ok
    }
}

fn add(argc: usize, argv: &[&str], console: &mut Console<'_>) -> Status {
    if argc != 3 {
        return Status::Fail;
    }
    match (argv[1].parse::<i32>(), argv[2].parse::<i32>()) {
        (Ok(a), Ok(b)) => {
            console.print(format_args!("{}", a + b));
            Status::Ok
        }
        _ => Status::Fail,
    }
}

fn setup_cli() -> Cli<'static, NullTerminal> {
    let mut config = Config::default();
    config.banner = None;
    config.clear_on_init = false;
    let mut cli = Cli::with_config(NullTerminal, config);
    cli.init().expect("Failed to init cli");
    cli.register("add", &add, "Adds two numbers")
        .expect("Failed to register add");
    cli
}

pub fn bench_receive(c: &mut Criterion) {
    let mut group = c.benchmark_group("receive");
    let line = b"set led0 brightness 128 fade 250";
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("receive", |b| {
        b.iter_batched_ref(
            setup_cli,
            |cli| {
                for &byte in line.iter() {
                    cli.receive(black_box(byte)).expect("Failed to receive");
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

pub fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let line = b"add 3 4\r\n";
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("add", |b| {
        let mut cli = setup_cli();
        b.iter(|| cli.input(black_box(&line[..])).expect("Failed to dispatch"))
    });
    group.finish();
}

pub fn bench_unknown_command(c: &mut Criterion) {
    let mut group = c.benchmark_group("unknown_command");
    let line = b"reboot now please\n";
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("unknown_command", |b| {
        let mut cli = setup_cli();
        b.iter(|| cli.input(black_box(&line[..])).expect("Failed to dispatch"))
    });
    group.finish();
}

pub fn bench_help(c: &mut Criterion) {
    let mut group = c.benchmark_group("help");
    group.bench_function("help", |b| {
        let mut cli = setup_cli();
        b.iter(|| cli.input(black_box(&b"help\n"[..])).expect("Failed to dispatch"))
    });
    group.finish();
}
