use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zb_installcode::{parse_install_code, InstallCodeFormat};

const TAGGED_HEX: &str = "G$M:1234$A:00124B0009D69F77$I:41FE01030405060708090A0B0C0D0E0F";

const POSITIONAL_HEX: &str =
    "ZB10SG0D83101823480040000000000000000000F4CE36D88AB8B6FDDLK00112233445566778899AABBCCDDEEFF528F";

fn benchmark_parse_install_code(c: &mut Criterion) {
    c.bench_function("parse_tagged", |b| {
        b.iter(|| {
            let _ = black_box(parse_install_code(black_box(TAGGED_HEX)));
        })
    });

    c.bench_function("parse_positional", |b| {
        b.iter(|| {
            let _ = black_box(parse_install_code(black_box(POSITIONAL_HEX)));
        })
    });

    c.bench_function("classify", |b| {
        b.iter(|| black_box(InstallCodeFormat::classify(black_box(POSITIONAL_HEX))))
    });
}

criterion_group!(benches, benchmark_parse_install_code);
criterion_main!(benches);
