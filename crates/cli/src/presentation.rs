// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::StatsFormat;
use file_filter_engine::error::EngineError;
use file_filter_engine::options::StatsLevel;
use file_filter_engine::stats::{Aggregates, FloatStats, IntegerStats, StringStats};
use serde_json::{Map, Value, json};
use std::io::{self, Write};
use std::path::Path;

/// Report an input that was skipped.
pub fn print_error(path: &Path, err: &EngineError) {
    eprintln!("Error reading file {}: {}", path.display(), root_cause(err));
}

fn root_cause(err: &EngineError) -> String {
    match err {
        EngineError::InputOpen { source, .. } | EngineError::InputRead { source, .. } => {
            source.to_string()
        }
        other => other.to_string(),
    }
}

/// Print the report to stdout.
///
/// # Errors
///
/// Fails if stdout cannot be written or the JSON cannot be rendered.
pub fn print_statistics(stats: &Aggregates, level: StatsLevel, format: StatsFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_statistics(&mut out, stats, level, format)?;
    out.flush()?;
    Ok(())
}

/// Render the report into `out`. Nothing is written for [`StatsLevel::None`].
///
/// # Errors
///
/// Fails if `out` cannot be written or the JSON cannot be rendered.
pub fn write_statistics<W: Write>(
    out: &mut W,
    stats: &Aggregates,
    level: StatsLevel,
    format: StatsFormat,
) -> Result<()> {
    if !level.is_enabled() {
        return Ok(());
    }
    match format {
        StatsFormat::Text => write_text(out, stats, level)?,
        StatsFormat::Json => {
            let json = serde_json::to_string_pretty(&to_json(stats, level))?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

fn write_text<W: Write>(out: &mut W, stats: &Aggregates, level: StatsLevel) -> io::Result<()> {
    let full = level == StatsLevel::Full;
    writeln!(out, "Statistics:")?;

    let ints = &stats.integers;
    if ints.count() > 0 {
        writeln!(out, "Integers: {}", ints.count())?;
        if full {
            write_integer_details(out, ints)?;
        }
    }

    let floats = &stats.floats;
    if floats.count() > 0 {
        writeln!(out, "Floats: {}", floats.count())?;
        if full {
            write_float_details(out, floats)?;
        }
    }

    let strings = &stats.strings;
    if strings.count() > 0 {
        writeln!(out, "Strings: {}", strings.count())?;
        if full {
            write_string_details(out, strings)?;
        }
    }
    Ok(())
}

fn write_integer_details<W: Write>(out: &mut W, s: &IntegerStats) -> io::Result<()> {
    if let (Some(min), Some(max), Some(avg)) = (s.min(), s.max(), s.average()) {
        writeln!(out, "  Min: {min}")?;
        writeln!(out, "  Max: {max}")?;
        writeln!(out, "  Sum: {}", s.sum())?;
        writeln!(out, "  Avg: {avg:?}")?;
    }
    Ok(())
}

// `{:?}` keeps a trailing `.0` on whole values and switches to exponent
// notation for very large or small magnitudes.
fn write_float_details<W: Write>(out: &mut W, s: &FloatStats) -> io::Result<()> {
    if let (Some(min), Some(max), Some(avg)) = (s.min(), s.max(), s.average()) {
        writeln!(out, "  Min: {min:?}")?;
        writeln!(out, "  Max: {max:?}")?;
        writeln!(out, "  Sum: {:?}", s.sum())?;
        writeln!(out, "  Avg: {avg:?}")?;
    }
    Ok(())
}

fn write_string_details<W: Write>(out: &mut W, s: &StringStats) -> io::Result<()> {
    if let (Some(min), Some(max)) = (s.min_len(), s.max_len()) {
        writeln!(out, "  Min Length: {min}")?;
        writeln!(out, "  Max Length: {max}")?;
    }
    Ok(())
}

fn to_json(stats: &Aggregates, level: StatsLevel) -> Value {
    let full = level == StatsLevel::Full;
    let mut report = Map::new();

    let ints = &stats.integers;
    if ints.count() > 0 {
        let mut entry = json!({ "count": ints.count() });
        if full {
            // i128 sums beyond the i64 range are kept exact as strings.
            let sum = i64::try_from(ints.sum())
                .map_or_else(|_| Value::from(ints.sum().to_string()), Value::from);
            entry["min"] = json!(ints.min());
            entry["max"] = json!(ints.max());
            entry["sum"] = sum;
            entry["average"] = json!(ints.average());
        }
        report.insert("integers".into(), entry);
    }

    let floats = &stats.floats;
    if floats.count() > 0 {
        let mut entry = json!({ "count": floats.count() });
        if full {
            entry["min"] = json!(floats.min());
            entry["max"] = json!(floats.max());
            entry["sum"] = json!(floats.sum());
            entry["average"] = json!(floats.average());
        }
        report.insert("floats".into(), entry);
    }

    let strings = &stats.strings;
    if strings.count() > 0 {
        let mut entry = json!({ "count": strings.count() });
        if full {
            entry["min_length"] = json!(strings.min_len());
            entry["max_length"] = json!(strings.max_len());
        }
        report.insert("strings".into(), entry);
    }

    Value::Object(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Aggregates {
        let mut stats = Aggregates::default();
        for v in [42, -7] {
            stats.update_integer(v);
        }
        stats.update_float(3.5);
        stats.update_string("hello");
        stats.update_string("");
        stats
    }

    fn render(stats: &Aggregates, level: StatsLevel, format: StatsFormat) -> String {
        let mut buf = Vec::new();
        write_statistics(&mut buf, stats, level, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn none_prints_nothing() {
        assert_eq!(render(&sample(), StatsLevel::None, StatsFormat::Text), "");
        assert_eq!(render(&sample(), StatsLevel::None, StatsFormat::Json), "");
    }

    #[test]
    fn short_omits_empty_categories() {
        let mut stats = Aggregates::default();
        for v in [1, 2, 3] {
            stats.update_integer(v);
        }
        stats.update_string("a");
        stats.update_string("b");

        let text = render(&stats, StatsLevel::Short, StatsFormat::Text);
        assert_eq!(text, "Statistics:\nIntegers: 3\nStrings: 2\n");
    }

    #[test]
    fn full_report() {
        let text = render(&sample(), StatsLevel::Full, StatsFormat::Text);
        let expected = "\
Statistics:
Integers: 2
  Min: -7
  Max: 42
  Sum: 35
  Avg: 17.5
Floats: 1
  Min: 3.5
  Max: 3.5
  Sum: 3.5
  Avg: 3.5
Strings: 2
  Min Length: 0
  Max Length: 5
";
        assert_eq!(text, expected);
    }

    #[test]
    fn integer_average_is_not_truncated() {
        let mut stats = Aggregates::default();
        stats.update_integer(1);
        stats.update_integer(2);
        let text = render(&stats, StatsLevel::Full, StatsFormat::Text);
        assert!(text.contains("  Avg: 1.5\n"), "{text}");
    }

    #[test]
    fn json_short_has_counts_only() {
        let text = render(&sample(), StatsLevel::Short, StatsFormat::Json);
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["integers"], json!({ "count": 2 }));
        assert_eq!(value["floats"], json!({ "count": 1 }));
        assert_eq!(value["strings"], json!({ "count": 2 }));
    }

    #[test]
    fn json_full_omits_empty_categories() {
        let mut stats = Aggregates::default();
        stats.update_integer(10);
        let text = render(&stats, StatsLevel::Full, StatsFormat::Json);
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["integers"]["sum"], json!(10));
        assert_eq!(value["integers"]["average"], json!(10.0));
        assert!(value.get("floats").is_none());
        assert!(value.get("strings").is_none());
    }
}
