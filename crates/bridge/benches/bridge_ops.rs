//! Throughput of the marshalling layer around libsecp256k1.
//!
//! Signing, recovery and verification per encoding, plus DER over
//! growing message sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use secp_bridge::{
    derive_public_key, recover_compact, recover_raw, sign_compact, sign_der, sign_raw,
    verify_compact, verify_der,
};

fn keys(rng: &mut StdRng) -> ([u8; 32], [u8; 32]) {
    let mut private = [0u8; 32];
    loop {
        rng.fill(&mut private);
        if derive_public_key(&private).is_ok() {
            break;
        }
    }
    let mut digest = [0u8; 32];
    rng.fill(&mut digest);
    (private, digest)
}

fn bench_recoverable(c: &mut Criterion) {
    let mut group = c.benchmark_group("recoverable");
    let mut rng = StdRng::seed_from_u64(12312421412);
    let (private, digest) = keys(&mut rng);
    let public = derive_public_key(&private).unwrap().to_uncompressed();
    let raw = sign_raw(&digest, &private).unwrap();
    let compact = sign_compact(&digest, &private).unwrap();

    group.bench_function("sign_raw", |b| {
        b.iter(|| black_box(sign_raw(&digest, &private).unwrap()))
    });
    group.bench_function("recover_raw", |b| {
        b.iter(|| black_box(recover_raw(&digest, &raw).unwrap()))
    });
    group.bench_function("sign_compact", |b| {
        b.iter(|| black_box(sign_compact(&digest, &private).unwrap()))
    });
    group.bench_function("recover_compact", |b| {
        b.iter(|| black_box(recover_compact(&digest, compact.as_ref()).unwrap()))
    });
    group.bench_function("verify_compact", |b| {
        b.iter(|| black_box(verify_compact(&digest, compact.as_ref(), &public).unwrap()))
    });

    group.finish();
}

fn bench_der(c: &mut Criterion) {
    let mut group = c.benchmark_group("der");
    let mut rng = StdRng::seed_from_u64(7);
    let (private, _) = keys(&mut rng);
    let public = derive_public_key(&private).unwrap().to_uncompressed();

    for size in [32usize, 128, 1024, 16 * 1024] {
        let message = vec![0x42u8; size];
        let signature = sign_der(&message, &private).unwrap();

        group.bench_with_input(BenchmarkId::new("sign_der", size), &message, |b, message| {
            b.iter(|| black_box(sign_der(message, &private).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("verify_der", size), &message, |b, message| {
            b.iter(|| black_box(verify_der(message, signature.as_ref(), &public).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recoverable, bench_der);
criterion_main!(benches);
