use super::{Settings, Source};
use crate::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use srcpos::{range_over, ByteSpan, Range};
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Comparison {
    a: Range,
    b: Range,
    overlaps: bool,
    overlap_ab: Range,
    overlap_ba: Range,
    range_over: Range,
}

impl Comparison {
    fn new(a: Range, b: Range) -> Self {
        Self {
            overlaps: a.overlaps(&b),
            overlap_ab: a.overlap(&b),
            overlap_ba: b.overlap(&a),
            range_over: range_over(&a, &b),
            a,
            b,
        }
    }

    fn rows(&self) -> [(&'static str, &Range); 5] {
        [
            ("a", &self.a),
            ("b", &self.b),
            ("overlap(a,b)", &self.overlap_ab),
            ("overlap(b,a)", &self.overlap_ba),
            ("range_over", &self.range_over),
        ]
    }
}

pub fn run(
    settings: &Settings,
    file: &Path,
    a: ByteSpan,
    b: ByteSpan,
    format: OutputFormat,
) -> Result<()> {
    let source = Source::read(settings, file)?;
    let index = source.index(settings);
    let comparison = Comparison::new(source.resolve(&index, a)?, source.resolve(&index, b)?);

    match format {
        OutputFormat::Human => {
            let width = comparison
                .rows()
                .iter()
                .map(|(_, range)| range.start.byte.max(range.end.byte))
                .max()
                .unwrap_or(0)
                .min(Range::VISUALIZE_WIDTH + 1);

            for (label, range) in comparison.rows() {
                println!(
                    "{} |{}| {}  {}",
                    format!("{label:<12}").cyan(),
                    format!("{:<width$}", range.visualize()).green(),
                    range,
                    format!("{:?}", source.snippet(range)).dimmed()
                );
            }

            if comparison.overlaps {
                println!("{}", "✓ ranges overlap".green());
            } else {
                println!("{}", "✗ ranges do not overlap".yellow());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use srcpos::LineIndex;

    #[test]
    fn test_disjoint_comparison() {
        let index = LineIndex::new("ab  ef");
        let a = index.range("f", 0, 2).unwrap();
        let b = index.range("f", 4, 6).unwrap();

        let comparison = Comparison::new(a.clone(), b.clone());
        assert!(!comparison.overlaps);
        assert_eq!(comparison.overlap_ab, Range::empty_at("f", a.start));
        assert_eq!(comparison.overlap_ba, Range::empty_at("f", b.start));
        assert_eq!(comparison.range_over, index.range("f", 0, 6).unwrap());
    }

    #[test]
    fn test_json_shape() {
        let index = LineIndex::new("abcdef");
        let comparison = Comparison::new(
            index.range("f", 2, 6).unwrap(),
            index.range("f", 1, 5).unwrap(),
        );

        let json = serde_json::to_value(&comparison).unwrap();
        assert_eq!(json["overlaps"], true);
        assert_eq!(json["overlapAb"]["start"]["byte"], 2);
        assert_eq!(json["overlapAb"]["end"]["byte"], 5);
        assert_eq!(json["rangeOver"]["start"]["column"], 2);
        assert_eq!(json["rangeOver"]["end"]["column"], 7);
    }
}
