use benchmark::{decimal_strings, operand_pairs, OperandWidth, BATCH_SIZE};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use long_emul::Int64;

fn bench_binary_op<F>(c: &mut Criterion, bench_name: &str, op: F)
where
    F: Fn(Int64, Int64) -> Int64,
{
    let mut bench_group = c.benchmark_group(bench_name);
    bench_group.throughput(Throughput::Elements(BATCH_SIZE as u64));

    for width in OperandWidth::ALL {
        let operands = operand_pairs(width, width);
        bench_group.bench_with_input(
            BenchmarkId::from_parameter(width.name()),
            &operands,
            |b, operands| {
                b.iter(|| {
                    for &(lhs, rhs) in operands {
                        black_box(op(black_box(lhs), black_box(rhs)));
                    }
                })
            },
        );
    }

    bench_group.finish();
}

fn add(c: &mut Criterion) {
    bench_binary_op(c, "int64::add", |a, b| a + b);
}

fn mul(c: &mut Criterion) {
    bench_binary_op(c, "int64::mul", |a, b| a * b);
}

fn shifts(c: &mut Criterion) {
    bench_binary_op(c, "int64::shr", |a, b| a >> b.to_i32() as u32);
}

fn div_rem(c: &mut Criterion) {
    let mut bench_group = c.benchmark_group("int64::div_rem");
    bench_group.throughput(Throughput::Elements(BATCH_SIZE as u64));

    for (dividend, divisor) in [
        (OperandWidth::Full, OperandWidth::Narrow),
        (OperandWidth::Full, OperandWidth::Medium),
        (OperandWidth::Full, OperandWidth::Full),
        (OperandWidth::Medium, OperandWidth::Narrow),
    ] {
        let operands = operand_pairs(dividend, divisor);
        let parameter = format!("{}_by_{}", dividend.name(), divisor.name());

        bench_group.bench_with_input(
            BenchmarkId::new("exact", &parameter),
            &operands,
            |b, operands| {
                b.iter(|| {
                    for &(lhs, rhs) in operands {
                        let _ = black_box(black_box(lhs).div_rem(black_box(rhs)));
                    }
                })
            },
        );

        bench_group.bench_with_input(
            BenchmarkId::new("approx", &parameter),
            &operands,
            |b, operands| {
                b.iter(|| {
                    for &(lhs, rhs) in operands {
                        let _ = black_box(black_box(lhs).div_rem_approx(black_box(rhs)));
                    }
                })
            },
        );
    }

    bench_group.finish();
}

fn decimal(c: &mut Criterion) {
    let mut bench_group = c.benchmark_group("int64::decimal");
    bench_group.throughput(Throughput::Elements(BATCH_SIZE as u64));

    for width in OperandWidth::ALL {
        let strings = decimal_strings(width);
        let values = strings
            .iter()
            .map(|s| s.parse::<Int64>())
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        bench_group.bench_with_input(
            BenchmarkId::new("to_string", width.name()),
            &values,
            |b, values| {
                b.iter(|| {
                    for value in values {
                        black_box(black_box(value).to_decimal_string());
                    }
                })
            },
        );

        bench_group.bench_with_input(
            BenchmarkId::new("parse", width.name()),
            &strings,
            |b, strings| {
                b.iter(|| {
                    for s in strings {
                        let _ = black_box(Int64::from_decimal_str(black_box(s)));
                    }
                })
            },
        );
    }

    bench_group.finish();
}

criterion_group!(arithmetic, add, mul, shifts);
criterion_group!(division, div_rem);
criterion_group!(formatting, decimal);
criterion_main!(arithmetic, division, formatting);
