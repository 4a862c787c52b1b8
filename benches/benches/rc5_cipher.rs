use benches::{KEY_LENGTHS, SAMPLE_BLOCK, sample_key};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rc5_cipher::{Parameters, Rc5, expand_key};
use std::hint::black_box;

fn bench_expand_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("rc5_cipher/expand_key");
    let parameters = Parameters::default();

    for length in KEY_LENGTHS {
        let key = sample_key(length);

        group.bench_with_input(BenchmarkId::from_parameter(length), &key, |b, key| {
            b.iter(|| expand_key(black_box(key), &parameters))
        });
    }

    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("rc5_cipher/block");

    for rounds in [12u8, 16, 20] {
        let cipher = Rc5::with_parameters(&sample_key(16), Parameters::with_rounds(rounds))
            .expect("Sample key must be accepted");
        let ciphertext = cipher
            .encrypt(&SAMPLE_BLOCK)
            .expect("Sample block must be 8 bytes");

        group.bench_with_input(BenchmarkId::new("encrypt", rounds), &cipher, |b, cipher| {
            b.iter(|| cipher.encrypt(black_box(&SAMPLE_BLOCK)))
        });

        group.bench_with_input(BenchmarkId::new("decrypt", rounds), &cipher, |b, cipher| {
            b.iter(|| cipher.decrypt(black_box(&ciphertext)))
        });
    }

    group.finish();
}

criterion_group!(rc5_cipher_benches, bench_expand_key, bench_block);
criterion_main!(rc5_cipher_benches);
