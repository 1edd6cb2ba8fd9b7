use std::{
    hint,
    time::{Duration, Instant},
};

/// Runs `run` once and returns its wall time along with its result.
pub fn time<D>(run: impl FnOnce() -> D) -> (Duration, D) {
    let start = Instant::now();
    let result = hint::black_box(run());
    let elapsed = start.elapsed();

    (elapsed, result)
}

pub fn to_nanos(duration: Duration) -> u64 {
    duration.as_nanos().try_into().unwrap_or(u64::MAX)
}
