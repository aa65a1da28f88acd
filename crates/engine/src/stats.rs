use crate::classify::Classified;
use crate::error::EngineError;
use std::path::PathBuf;

/// Running aggregate for integer lines.
///
/// `sum` is an `i128` accumulated from `i64` values, so it cannot overflow
/// before 2^64 lines have been added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerStats {
    count: u64,
    sum: i128,
    min: i64,
    max: i64,
}

impl Default for IntegerStats {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0,
            min: i64::MAX,
            max: i64::MIN,
        }
    }
}

impl IntegerStats {
    pub fn update(&mut self, value: i64) {
        self.count += 1;
        self.sum += i128::from(value);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    #[must_use]
    pub const fn sum(&self) -> i128 {
        self.sum
    }

    #[must_use]
    pub const fn min(&self) -> Option<i64> {
        if self.count == 0 { None } else { Some(self.min) }
    }

    #[must_use]
    pub const fn max(&self) -> Option<i64> {
        if self.count == 0 { None } else { Some(self.max) }
    }

    /// Always a floating-point quotient, never truncated.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum as f64 / self.count as f64)
    }
}

/// Running aggregate for float lines. Plain sequential summation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatStats {
    count: u64,
    sum: f64,
    min: f64,
    max: f64,
}

impl Default for FloatStats {
    fn default() -> Self {
        // f64::MIN is the most negative finite value, not the smallest positive one.
        Self {
            count: 0,
            sum: 0.0,
            min: f64::MAX,
            max: f64::MIN,
        }
    }
}

impl FloatStats {
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    #[must_use]
    pub const fn sum(&self) -> f64 {
        self.sum
    }

    #[must_use]
    pub const fn min(&self) -> Option<f64> {
        if self.count == 0 { None } else { Some(self.min) }
    }

    #[must_use]
    pub const fn max(&self) -> Option<f64> {
        if self.count == 0 { None } else { Some(self.max) }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Running aggregate for string lines. Length is counted in `char`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringStats {
    count: u64,
    min_len: usize,
    max_len: usize,
}

impl Default for StringStats {
    fn default() -> Self {
        Self {
            count: 0,
            min_len: usize::MAX,
            max_len: 0,
        }
    }
}

impl StringStats {
    pub fn update(&mut self, value: &str) {
        let len = value.chars().count();
        self.count += 1;
        self.min_len = self.min_len.min(len);
        self.max_len = self.max_len.max(len);
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    #[must_use]
    pub const fn min_len(&self) -> Option<usize> {
        if self.count == 0 { None } else { Some(self.min_len) }
    }

    #[must_use]
    pub const fn max_len(&self) -> Option<usize> {
        if self.count == 0 { None } else { Some(self.max_len) }
    }
}

/// Per-category aggregates for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    pub integers: IntegerStats,
    pub floats: FloatStats,
    pub strings: StringStats,
}

impl Aggregates {
    pub fn update_integer(&mut self, value: i64) {
        self.integers.update(value);
    }

    pub fn update_float(&mut self, value: f64) {
        self.floats.update(value);
    }

    pub fn update_string(&mut self, value: &str) {
        self.strings.update(value);
    }

    /// Route a classified line to its aggregate.
    pub fn record(&mut self, line: &Classified<'_>) {
        match *line {
            Classified::Integer(v) => self.update_integer(v),
            Classified::Float(v) => self.update_float(v),
            Classified::String(s) => self.update_string(s),
        }
    }

    /// Number of lines classified so far.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.integers.count() + self.floats.count() + self.strings.count()
    }
}

/// Lines contributed by one successfully read input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub path: PathBuf,
    pub lines: u64,
}

/// Outcome of a complete run.
#[derive(Debug, Default)]
pub struct RunResult {
    pub stats: Aggregates,
    pub files: Vec<FileSummary>,
    /// Inputs that could not be read, in the order they were attempted.
    pub errors: Vec<(PathBuf, EngineError)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_aggregates_hide_sentinels() {
        let stats = Aggregates::default();
        assert_eq!(stats.integers.min(), None);
        assert_eq!(stats.integers.max(), None);
        assert_eq!(stats.integers.average(), None);
        assert_eq!(stats.floats.min(), None);
        assert_eq!(stats.floats.average(), None);
        assert_eq!(stats.strings.min_len(), None);
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn integer_scenario() {
        let mut stats = IntegerStats::default();
        stats.update(42);
        stats.update(-7);

        assert_eq!(stats.count(), 2);
        assert_eq!(stats.min(), Some(-7));
        assert_eq!(stats.max(), Some(42));
        assert_eq!(stats.sum(), 35);
        assert_eq!(stats.average(), Some(17.5));
    }

    #[test]
    fn integer_sum_does_not_overflow_i64() {
        let mut stats = IntegerStats::default();
        stats.update(i64::MAX);
        stats.update(i64::MAX);
        assert_eq!(stats.sum(), i128::from(i64::MAX) * 2);
    }

    #[test]
    fn all_negative_floats() {
        let mut stats = FloatStats::default();
        for v in [-1.5, -0.25, -10.0] {
            stats.update(v);
        }

        assert_eq!(stats.min(), Some(-10.0));
        assert_eq!(stats.max(), Some(-0.25));
        assert_eq!(stats.sum(), -11.75);
    }

    #[test]
    fn string_lengths_count_chars() {
        let mut stats = StringStats::default();
        stats.update("hello");
        stats.update("");
        stats.update("日本語");

        assert_eq!(stats.count(), 3);
        assert_eq!(stats.min_len(), Some(0));
        assert_eq!(stats.max_len(), Some(5));
    }

    #[test]
    fn record_routes_by_category() {
        let mut stats = Aggregates::default();
        stats.record(&Classified::Integer(1));
        stats.record(&Classified::Float(0.5));
        stats.record(&Classified::String("x"));
        stats.record(&Classified::String("yy"));

        assert_eq!(stats.integers.count(), 1);
        assert_eq!(stats.floats.count(), 1);
        assert_eq!(stats.strings.count(), 2);
        assert_eq!(stats.total(), 4);
    }
}
