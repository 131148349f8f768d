use rand::Rng;
use ulid::{Generator, MonotonicError, Ulid};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const FALLBACK_LEN: usize = 11;

/// Hands out suggestion ids.
///
/// Ids come from a monotonic ULID generator. When the generator cannot
/// produce a value (more ids requested within one millisecond than its random
/// component can order) a pseudo-random base-36 id is used instead, so id
/// assignment never fails.
pub struct IdGenerator {
    ulids: Generator,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            ulids: Generator::new(),
        }
    }

    pub fn next_id(&mut self) -> String {
        next_id_from(self.ulids.generate())
    }
}

fn next_id_from(generated: Result<Ulid, MonotonicError>) -> String {
    match generated {
        Ok(ulid) => format!("s_{}", ulid.to_string().to_ascii_lowercase()),
        Err(e) => {
            tracing::warn!(error = %e, "ulid generator exhausted; using pseudo-random id");
            fallback_id()
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}

pub fn fallback_id() -> String {
    let mut rng = rand::thread_rng();
    let body: String = (0..FALLBACK_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("s_{}", body)
}

pub fn now_millis() -> i64 {
    let now = time::OffsetDateTime::now_utc();
    (now.unix_timestamp_nanos() / 1_000_000) as i64
}

pub fn now_rfc3339_utc() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default()
}

/// Calendar date (UTC) of a unix-millisecond timestamp, as YYYY-MM-DD.
/// `None` when the timestamp is outside the representable date range.
pub fn date_of_millis(ms: i64) -> Option<String> {
    let nanos = i128::from(ms) * 1_000_000;
    match time::OffsetDateTime::from_unix_timestamp_nanos(nanos) {
        Ok(dt) => {
            let date = dt.date();
            Some(format!(
                "{:04}-{:02}-{:02}",
                date.year(),
                u8::from(date.month()),
                date.day()
            ))
        }
        Err(e) => {
            tracing::warn!(ms, error = %e, "timestamp out of date range");
            None
        }
    }
}
