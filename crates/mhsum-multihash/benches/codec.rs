use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mhsum_multihash::Multihash;

fn bench_codec(c: &mut Criterion) {
    let mh = Multihash::new(0x12, vec![0x5a; 32]);
    let bytes = mh.to_bytes();

    c.bench_function("encode_sha2_256_container", |b| {
        b.iter(|| black_box(&mh).to_bytes())
    });

    c.bench_function("decode_sha2_256_container", |b| {
        b.iter(|| Multihash::from_bytes(black_box(&bytes)).unwrap())
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
