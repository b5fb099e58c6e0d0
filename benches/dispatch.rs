use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sitepager::{Catalog, Command, Pager};

fn bench_command_parse(c: &mut Criterion) {
    let catalog = Catalog::with_blog();
    let mut group = c.benchmark_group("command_parse");

    for payload in ["exit", "github", "blog", "blog4294967295", "blogxyz", "foobar"] {
        group.bench_with_input(BenchmarkId::from_parameter(payload), payload, |b, p| {
            b.iter(|| {
                let command = Command::parse(black_box(p.as_bytes()), &catalog);
                black_box(command);
            });
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let catalog = Catalog::with_blog();
    let mut group = c.benchmark_group("session");

    // A byte slice yields everything in one read, so each iteration is one
    // command followed by end of input.
    let inputs: [&[u8]; 3] = [b"list\n", b"about\n", b"blog42\n"];
    for input in inputs {
        let label = String::from_utf8_lossy(&input[..input.len() - 1]).into_owned();
        group.bench_with_input(BenchmarkId::new("single_command", &label), input, |b, i| {
            b.iter(|| {
                let mut pager = Pager::new(&catalog, black_box(i), Vec::new(), Vec::new());
                let result = pager.run();
                black_box(result.is_err());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_command_parse, bench_session);
criterion_main!(benches);
