use txquery::{Ranked, TransactionId};

pub fn format_time(nanos: u64) -> String {
    if nanos < 10u64.pow(3) {
        format!("{}ns", nanos)
    }
    else if nanos < 10u64.pow(6) {
        format!("{:.2}µs", nanos as f64 / 10usize.pow(3) as f64)
    }
    else if nanos < 10u64.pow(9) {
        format!("{:.2}ms", nanos as f64 / 10usize.pow(6) as f64)
    }
    else {
        format!("{:.4}s", nanos as f64 / 10usize.pow(9) as f64)
    }
}

/// `[0, 2]`
pub fn format_ids(ids: &[TransactionId]) -> String {
    format!("{:?}", ids)
}

/// `[[score, id], ...]`
pub fn format_ranked(ranked: &[Ranked]) -> String {
    let pairs: Vec<String> = ranked
        .iter()
        .map(|r| format!("[{:?}, {}]", r.score, r.id))
        .collect();
    format!("[{}]", pairs.join(", "))
}
