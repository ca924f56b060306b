//! # Bridge Token Benchmarks
//!
//! | Path | What is measured |
//! |------|------------------|
//! | Ledger | single transfer, batch transfer by width |
//! | Signed authorization | digest + recovery + full relayed transfer |
//! | Upgrade | storage snapshot to JSON and back |

use bridge_token::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_crypto::recover_address;
use std::time::Duration;

fn deploy() -> TokenService<ManualClock, InMemoryEventLog> {
    let config = TokenConfig::default();
    TokenService::initialize(
        &config,
        Address::repeat_byte(0xDE),
        ManualClock::new(1_700_000_000),
        InMemoryEventLog::new(),
    )
    .expect("deployment")
}

// ============================================================================
// LEDGER
// ============================================================================

fn bench_ledger(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger");
    let deployer = Address::repeat_byte(0xDE);

    let token = deploy();
    group.bench_function("transfer", |b| {
        b.iter(|| {
            token
                .transfer(deployer, black_box(Address::repeat_byte(1)), U256::one())
                .expect("transfer");
            token.sink().drain();
        })
    });

    for width in [10usize, 100, 500] {
        let recipients: Vec<Address> = (0..width)
            .map(|i| {
                let mut bytes = [0x20u8; 20];
                bytes[18..].copy_from_slice(&(i as u16).to_be_bytes());
                Address::new(bytes)
            })
            .collect();
        let amounts = vec![U256::one(); width];

        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(BenchmarkId::new("transfer_batch", width), &width, |b, _| {
            b.iter(|| {
                token
                    .transfer_batch(deployer, &recipients, &amounts)
                    .expect("batch");
                token.sink().drain();
            })
        });
    }
    group.finish();
}

// ============================================================================
// SIGNED AUTHORIZATION
// ============================================================================

fn bench_authorization(c: &mut Criterion) {
    let mut group = c.benchmark_group("authorization");
    group.measurement_time(Duration::from_secs(10));

    let token = deploy();
    let signer = Secp256k1KeyPair::generate();
    token
        .transfer(Address::repeat_byte(0xDE), signer.address(), units(1_000, 18))
        .expect("funding");
    let separator = token.domain_separator();

    let template = TransferAuthorization {
        from: signer.address(),
        to: Address::repeat_byte(0x0C),
        value: U256::one(),
        valid_after: U256::zero(),
        valid_before: U256::MAX,
        nonce: Hash::ZERO,
    };
    let template_sig = template.sign(&signer, &separator).expect("sign");

    group.bench_function("signing_digest", |b| {
        b.iter(|| black_box(template.signing_digest(&separator)))
    });

    let digest = template.signing_digest(&separator);
    group.bench_function("recover_signer", |b| {
        b.iter(|| black_box(recover_address(&digest, &template_sig).is_ok()))
    });

    let mut counter = 0u64;
    group.bench_function("transfer_with_authorization", |b| {
        b.iter_batched(
            || {
                counter += 1;
                let mut nonce = [0u8; 32];
                nonce[24..].copy_from_slice(&counter.to_be_bytes());
                let auth = TransferAuthorization {
                    nonce: Hash::new(nonce),
                    ..template.clone()
                };
                let sig = auth.sign(&signer, &separator).expect("sign");
                (auth, sig)
            },
            |(auth, sig)| {
                token
                    .transfer_with_authorization(Address::repeat_byte(0x9E), &auth, &sig)
                    .expect("relayed transfer");
                token.sink().drain();
            },
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}

// ============================================================================
// UPGRADE
// ============================================================================

fn bench_storage_snapshot(c: &mut Criterion) {
    let token = deploy();
    let deployer = Address::repeat_byte(0xDE);
    for i in 0..1_000u16 {
        let mut bytes = [0x30u8; 20];
        bytes[18..].copy_from_slice(&i.to_be_bytes());
        token
            .transfer(deployer, Address::new(bytes), U256::one())
            .expect("seed holder");
    }
    let storage = token.snapshot();

    c.bench_function("storage_json_roundtrip_1k_holders", |b| {
        b.iter(|| {
            let json = storage.to_json().expect("serialize");
            black_box(TokenStorage::from_json(&json).expect("restore"))
        })
    });
}

criterion_group!(benches, bench_ledger, bench_authorization, bench_storage_snapshot);
criterion_main!(benches);
