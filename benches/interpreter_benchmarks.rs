use std::hint::black_box;
use std::io;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gcode_interpreter::interpreter::Interpreter;
use gcode_interpreter::machine::{MachineClient, OutputFormat, RecordingController};
use gcode_interpreter::parser::parse_program;

mod common;
use common::generate_program;

/// Benchmark execution against the in-memory controller
fn bench_execute_recording(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("execute_recording");

    for &size in &sizes {
        let program = parse_program(&generate_program(size, "mixed")).expect("valid program");

        group.throughput(Throughput::Elements(program.lines.len() as u64));
        group.bench_with_input(BenchmarkId::new("mixed", size), &program, |b, program| {
            b.iter(|| {
                let mut interpreter = Interpreter::new(RecordingController::new());
                black_box(interpreter.execute(black_box(program)).is_ok());
                black_box(interpreter.into_controller())
            })
        });
    }

    group.finish();
}

/// Benchmark rendering commands through the machine client
fn bench_execute_client(c: &mut Criterion) {
    let program = parse_program(&generate_program(1_000, "movement_heavy")).expect("valid program");

    let mut group = c.benchmark_group("execute_client");
    group.throughput(Throughput::Elements(program.lines.len() as u64));

    for (name, format) in [("text", OutputFormat::Text), ("json", OutputFormat::Json)] {
        group.bench_with_input(BenchmarkId::new("format", name), &program, |b, program| {
            b.iter(|| {
                let client = MachineClient::new(io::sink(), format);
                let mut interpreter = Interpreter::new(client);
                black_box(interpreter.execute(black_box(program)).is_ok())
            })
        });
    }

    group.finish();
}

criterion_group!(interpreter_benches, bench_execute_recording, bench_execute_client);

criterion_main!(interpreter_benches);
