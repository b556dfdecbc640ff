use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use raknet_sync::protocol::packet::{OnFootSync, SpectatingSync};
use raknet_sync::{Dispatcher, Keys, PacketRegistry, SyncMessage, Vec3};

fn onfoot_message() -> SyncMessage {
    SyncMessage::from(OnFootSync {
        lr_key: 0,
        ud_key: 0xFF80,
        keys: Keys::SPRINT | Keys::JUMP,
        position: Vec3::new(1958.33, 1343.12, 15.36),
        health: 100,
        armour: 45,
        weapon_id: 24,
        special_action: 0,
        velocity: Vec3::new(0.05, -0.02, 0.0),
    })
}

fn spectating_message() -> SyncMessage {
    SyncMessage::from(SpectatingSync {
        lr_key: 0x0001,
        ud_key: 0x0002,
        keys: Keys::from_bits_retain(0xFFFF),
        position: Vec3::new(10.0, -5.5, 0.0),
    })
}

fn bench_encode(c: &mut Criterion) {
    let dispatcher = Dispatcher::new(PacketRegistry::with_default_syncs().unwrap());
    let onfoot = onfoot_message();
    let spectating = spectating_message();

    c.bench_function("encode_onfoot", |b| {
        b.iter(|| dispatcher.encode_outbound(black_box(&onfoot)).unwrap())
    });
    c.bench_function("encode_spectating", |b| {
        b.iter(|| dispatcher.encode_outbound(black_box(&spectating)).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let dispatcher = Dispatcher::new(PacketRegistry::with_default_syncs().unwrap());
    let onfoot = dispatcher.encode_outbound(&onfoot_message()).unwrap();
    let spectating = dispatcher.encode_outbound(&spectating_message()).unwrap();

    c.bench_function("decode_onfoot", |b| {
        b.iter(|| dispatcher.decode_raw(black_box(&onfoot)).unwrap())
    });
    c.bench_function("decode_spectating", |b| {
        b.iter(|| dispatcher.decode_raw(black_box(&spectating)).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
