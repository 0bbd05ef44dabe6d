use criterion::{criterion_group, criterion_main, Criterion};
use optyx_catalog::Catalog;
use optyx_core::{EyePrescription, PowerType, PrescriptionPair, Rx};
use optyx_match::match_prescription;

fn demo_catalog() -> Catalog {
    let bytes = include_bytes!("../../../data/catalog.demo.yaml");
    Catalog::from_yaml_slice(bytes).expect("demo catalog parses")
}

fn bench_match(c: &mut Criterion) {
    let catalog = demo_catalog();
    let pair = PrescriptionPair {
        right: EyePrescription::Single(Rx::new(-3.0, -1.0, 90)),
        left: EyePrescription::Single(Rx::new(0.5, 3.5, 45)),
    };
    c.bench_function("match_single_vision_pair", |b| {
        b.iter(|| {
            let _ = match_prescription(&catalog, &pair, PowerType::WithPower);
        });
    });
}

fn bench_transposed_match(c: &mut Criterion) {
    let catalog = demo_catalog();
    // The right eye only matches after the transposition retry, which is
    // the longest path through the category walk.
    let pair = PrescriptionPair {
        right: EyePrescription::Single(Rx::new(0.5, 3.5, 45)),
        left: EyePrescription::Single(Rx::new(0.5, 3.5, 45)),
    };
    c.bench_function("match_bifocal_transposed", |b| {
        b.iter(|| {
            let _ = match_prescription(&catalog, &pair, PowerType::Bifocal);
        });
    });
}

criterion_group!(benches, bench_match, bench_transposed_match);
criterion_main!(benches);
