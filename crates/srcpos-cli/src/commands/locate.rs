use super::{Settings, Source};
use crate::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use srcpos::{ByteSpan, ColumnUnit, Pos, Range};
use std::path::Path;

pub fn run(settings: &Settings, file: &Path, span: ByteSpan, format: OutputFormat) -> Result<()> {
    let source = Source::read(settings, file)?;
    let index = source.index(settings);
    let range = source.resolve(&index, span)?;
    let text = source.snippet(&range);

    match format {
        OutputFormat::Human => {
            println!("{}", range.to_string().bold());
            println!("  {}  {}", "start".cyan(), describe(range.start));
            println!("  {}    {}", "end".cyan(), describe(range.end));
            if range.end.byte < range.start.byte {
                println!("  {}", "⚠ range is inverted".yellow());
            }
            println!("  {}   {text:?}", "text".cyan());
            println!(
                "  {}  {}",
                "units".cyan(),
                format!("columns count {:?}", index.unit()).dimmed()
            );
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report(&range, &text, index.unit()))?
            );
        }
    }

    Ok(())
}

fn report(range: &Range, text: &str, unit: ColumnUnit) -> serde_json::Value {
    serde_json::json!({
        "range": range,
        "text": text,
        "columnUnit": unit,
    })
}

fn describe(pos: Pos) -> String {
    format!("byte {}, line {}, column {}", pos.byte, pos.line, pos.column)
}
