use chrono::{DateTime, TimeDelta, Utc};

pub type TimePoint = DateTime<Utc>;

/// A closed time range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSpan {
    start: TimePoint,
    end: TimePoint,
}

impl TimeSpan {
    /// Returns `None` when `end` lies before `start`.
    pub fn new(start: TimePoint, end: TimePoint) -> Option<Self> {
        if end < start { None } else { Some(Self { start, end }) }
    }

    /// A zero-length span at `point`.
    pub fn at(point: TimePoint) -> Self {
        Self { start: point, end: point }
    }

    pub fn starting_at(start: TimePoint, length: TimeDelta) -> Option<Self> {
        Self::new(start, start + length)
    }

    pub fn start(&self) -> TimePoint { self.start }
    pub fn end(&self) -> TimePoint { self.end }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn seconds(&self) -> f64 {
        seconds_between(self.start, self.end)
    }

    pub fn millis(&self) -> f64 {
        self.seconds() * 1000.0
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Overlapping or touching spans intersect.
    pub fn intersects(&self, other: &TimeSpan) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Signed distance from `from` to `to` in seconds, nanosecond resolution.
pub fn seconds_between(from: TimePoint, to: TimePoint) -> f64 {
    let delta = to - from;
    match delta.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1e9,
        None => delta.num_milliseconds() as f64 / 1e3,
    }
}
