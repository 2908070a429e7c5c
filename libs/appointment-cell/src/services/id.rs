use chrono::Utc;

/// Issues time-based appointment ids: the wall clock in milliseconds, as a
/// decimal string.
///
/// Ids are strictly increasing within a session even when the clock stalls or
/// steps backwards, and never repeat an id the caller reports as taken.
#[derive(Debug, Default)]
pub struct AppointmentIdGenerator {
    last_issued: i64,
}

impl AppointmentIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue after the highest numeric id already in use.
    pub fn resume_after<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let last_issued = ids
            .into_iter()
            .filter_map(|id| id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);

        Self { last_issued }
    }

    pub fn next_id(&mut self, is_taken: impl Fn(&str) -> bool) -> String {
        self.next_at(Utc::now().timestamp_millis(), is_taken)
    }

    fn next_at(&mut self, now_millis: i64, is_taken: impl Fn(&str) -> bool) -> String {
        // A stored id near i64::MAX leaves no room above it, so restart from the clock
        let mut candidate = match self.last_issued.checked_add(1) {
            Some(floor) => now_millis.max(floor),
            None => now_millis,
        };
        while is_taken(&candidate.to_string()) {
            candidate = candidate.checked_add(1).unwrap_or(now_millis);
        }

        self.last_issued = candidate;
        candidate.to_string()
    }
}
