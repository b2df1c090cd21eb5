use crate::buffer::RollingSeriesBuffer;
use crate::sample::{Sample, Timestamp};
use crate::walk::RandomWalk;
use crate::{append, bulk_initialize};

#[test]
fn append_to_empty() {
    let mut walk = RandomWalk::seeded(1);
    let t1 = Timestamp::from_millis(1_500);
    let buffer = append(RollingSeriesBuffer::new(), t1, &mut walk);
    let samples: Vec<&Sample> = buffer.iter().collect();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].timestamp, t1);
    assert!(samples[0].value >= 45. && samples[0].value <= 55.);
}

#[test]
fn append_to_overfull() {
    let mut walk = RandomWalk::seeded(2);
    let buffer = RollingSeriesBuffer::from_samples(
        200,
        (0..201).map(|i| Sample::clamped(Timestamp::from_millis(i), 10.)),
    );
    let t = Timestamp::from_millis(5_000);
    let buffer = append(buffer, t, &mut walk);
    assert_eq!(buffer.len(), 201);
    assert_eq!(buffer.first().unwrap().timestamp, Timestamp::from_millis(1));
    let newest = buffer.last().unwrap();
    assert_eq!(newest.timestamp, t);
    assert!(newest.value >= 5. && newest.value <= 15.);
}

#[test]
fn thousand_appends() {
    let mut walk = RandomWalk::seeded(3);
    let mut buffer = RollingSeriesBuffer::new();
    for call in 1..=1_000 {
        buffer = append(buffer, Timestamp::from_millis(call * 100), &mut walk);
        let expected = if call <= 201 { call as usize } else { 201 };
        assert_eq!(buffer.len(), expected, "call={}", call);
        assert!(buffer.last().map_or(false, |s| s.value >= 0. && s.value <= 100.));
    }
    assert_eq!(
        buffer.first().unwrap().timestamp,
        Timestamp::from_millis(800 * 100)
    );
}

#[test]
fn seeded_chart() {
    // Seed a chart, then keep it live for a while
    let now = Timestamp::from_millis(1_000_000);
    let mut walk = RandomWalk::seeded(4);
    let mut buffer = bulk_initialize(200, now);
    for tick in 1..=50 {
        buffer = buffer.append(now.offset(tick * 100), &mut walk);
    }
    assert_eq!(buffer.len(), 201);
    let pairs = buffer.to_pairs();
    for pair in pairs.windows(2) {
        assert_eq!(pair[1].0 - pair[0].0, 100);
    }
    assert_eq!(pairs.last().unwrap().0, 1_005_000);
}
