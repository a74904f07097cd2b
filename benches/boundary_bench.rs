//! Boundary-conversion micro-benchmarks.
//!
//! The conversions measured here sit on the hot forwarding path: every
//! boolean result, every color argument and every composite buffer goes
//! through one of them.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use raybind::host::{self, color};
use raybind::raw::{self, Vector2};

fn bench_host_bool(c: &mut Criterion) {
    c.bench_function("host_bool_round_trip", |b| {
        b.iter(|| {
            let h = host::to_host_bool(black_box(true));
            host::from_host_bool(black_box(h))
        })
    });
}

fn bench_color_packing(c: &mut Criterion) {
    c.bench_function("color_pack_unpack", |b| {
        b.iter(|| {
            let packed = color::to_rgba(
                black_box(0x12),
                black_box(0x34),
                black_box(0x56),
                black_box(0x78),
            );
            (
                color::red(packed),
                color::green(packed),
                color::blue(packed),
                color::alpha(packed),
            )
        })
    });

    c.bench_function("color_swap_red_blue", |b| {
        b.iter(|| color::swap_red_blue(black_box(0xAABB_CCDD)))
    });
}

fn bench_struct_marshalling(c: &mut Criterion) {
    let v = Vector2 { x: 1.5, y: -2.25 };
    let bytes = raw::pack(&v).to_vec();

    c.bench_function("vector2_unpack", |b| {
        b.iter(|| raw::unpack::<Vector2>(black_box(&bytes)).unwrap())
    });

    c.bench_function("vector2_raw_write", |b| {
        let mut out = [0u8; 8];
        b.iter(|| unsafe { raw::write(black_box(out.as_mut_ptr().cast()), black_box(v)) })
    });
}

criterion_group!(
    benches,
    bench_host_bool,
    bench_color_packing,
    bench_struct_marshalling
);
criterion_main!(benches);
