use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use timerange_picker::core::{TimeRangeMode, add_units, wire};
use timerange_picker::{RangeController, RangeEvent, RangePickerConfig};

fn bench_wire_round_trip(c: &mut Criterion) {
    let instant = Utc
        .with_ymd_and_hms(2024, 3, 10, 12, 34, 56)
        .single()
        .expect("valid instant");

    c.bench_function("wire_round_trip", |b| {
        b.iter(|| {
            let text = wire::serialize_instant(black_box(&instant));
            let _ = wire::deserialize(Some(&text)).expect("parse");
        })
    });
}

fn bench_month_arithmetic(c: &mut Criterion) {
    let instant = Utc
        .with_ymd_and_hms(2024, 1, 31, 0, 0, 0)
        .single()
        .expect("valid instant");

    c.bench_function("add_units_month_24", |b| {
        b.iter(|| {
            for delta in -12..12 {
                let _ = add_units(black_box(instant), delta, TimeRangeMode::Month).expect("add");
            }
        })
    });
}

fn bench_controller_steps(c: &mut Criterion) {
    let mut controller =
        RangeController::in_memory(RangePickerConfig::default()).expect("controller init");
    controller.from_field().edit(Some("2024-01-15T00:00:00Z"));
    controller.set_range(TimeRangeMode::Week).expect("week");

    c.bench_function("controller_step_forward_back", |b| {
        b.iter(|| {
            controller
                .dispatch(RangeEvent::StepRequested { delta: 1 })
                .expect("forward");
            controller
                .dispatch(RangeEvent::StepRequested { delta: -1 })
                .expect("back");
        })
    });
}

criterion_group!(
    benches,
    bench_wire_round_trip,
    bench_month_arithmetic,
    bench_controller_steps
);
criterion_main!(benches);
