//! Lookup cost of the linear table scans.
//!
//! The table is consulted as an ordered sequence, so cost grows with row
//! position and a miss pays for the full walk. These benches pin down
//! that envelope in case the scan ever needs replacing with a pre-sorted
//! index.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use bsm_errno::{bsm_to_errno, errno_to_bsm, codes, BsmErrno};

fn bench_lookups(c: &mut Criterion) {
    // First row after the success sentinel.
    c.bench_function("bsm_to_errno/front", |b| {
        b.iter(|| bsm_to_errno(black_box(codes::BSM_EPERM)))
    });

    // Last portable row.
    c.bench_function("bsm_to_errno/back", |b| {
        b.iter(|| bsm_to_errno(black_box(codes::BSM_ESTALE)))
    });

    // Unassigned octet walks the whole table.
    c.bench_function("bsm_to_errno/miss", |b| {
        b.iter(|| bsm_to_errno(black_box(BsmErrno::new(255))))
    });

    c.bench_function("errno_to_bsm/hit", |b| {
        b.iter(|| errno_to_bsm(black_box(libc::ENOENT)))
    });

    // The total direction: a miss still returns the unknown sentinel.
    c.bench_function("errno_to_bsm/miss", |b| {
        b.iter(|| errno_to_bsm(black_box(-999_999)))
    });
}

criterion_group!(benches, bench_lookups);
criterion_main!(benches);
