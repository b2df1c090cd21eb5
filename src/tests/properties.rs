use crate::buffer::RollingSeriesBuffer;
use crate::sample::{Sample, Timestamp};
use crate::walk::RandomWalk;
use crate::{append, bulk_initialize};

fn check_bounded(buffer: &RollingSeriesBuffer) {
    for sample in buffer {
        assert!(
            sample.value >= 0. && sample.value <= 100.,
            "Out of range sample: {:?}",
            sample
        );
    }
}

fn buffer_of_len(len: usize) -> RollingSeriesBuffer {
    RollingSeriesBuffer::from_samples(
        200,
        (0..len).map(|i| Sample::clamped(Timestamp::from_millis(i as i64 * 100), 50.)),
    )
}

#[test]
fn values_stay_bounded() {
    for seed in 0..20 {
        let mut walk = RandomWalk::seeded(seed);
        let mut buffer = RollingSeriesBuffer::new();
        for t in 0..2_000 {
            buffer = append(buffer, Timestamp::from_millis(t), &mut walk);
        }
        check_bounded(&buffer);
    }
}

#[test]
fn length_grows_by_one_up_to_capacity() {
    let mut walk = RandomWalk::seeded(17);
    for len in vec![0, 1, 2, 100, 199, 200] {
        let buffer = append(buffer_of_len(len), Timestamp::from_millis(1_000_000), &mut walk);
        assert_eq!(buffer.len(), len + 1);
    }
}

#[test]
fn length_is_kept_beyond_capacity() {
    let mut walk = RandomWalk::seeded(17);
    for len in vec![201, 202, 300] {
        let before = buffer_of_len(len);
        let oldest = before.first().unwrap().timestamp;
        let after = append(before, Timestamp::from_millis(1_000_000), &mut walk);
        assert_eq!(after.len(), len);
        assert!(after.iter().all(|sample| sample.timestamp != oldest));
    }
}

#[test]
fn first_value_near_baseline() {
    for seed in 0..200 {
        let mut walk = RandomWalk::seeded(seed);
        let buffer = append(RollingSeriesBuffer::new(), Timestamp::from_millis(0), &mut walk);
        let value = buffer.last().unwrap().value;
        assert!(value >= 45. && value <= 55., "seed={}, value={}", seed, value);
    }
}

#[test]
fn bulk_initialize_is_ordered() {
    let buffer = bulk_initialize(200, Timestamp::now());
    assert_eq!(buffer.len(), 200);
    let timestamps: Vec<Timestamp> = buffer.iter().map(|sample| sample.timestamp).collect();
    for pair in timestamps.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}
