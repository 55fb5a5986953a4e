//! Output formatting for sorted records.
//!
//! [`OutputFormat`] selects how each record is written: one `Display` line or
//! one JSON object per line.

use std::io::Write;

use clap::ValueEnum;
use multisort::Record;

/// Controls how records are printed.
///
/// This is the user-facing enum for the `--format` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `{age: 22, name: "Eve", score: 88}`
    #[default]
    Text,
    /// `{"age":22,"name":"Eve","score":88}`
    Json,
}

/// Writes `records` to `out`, one per line.
pub fn write_records<W: Write>(
    out: &mut W,
    records: &[Record],
    format: OutputFormat,
) -> anyhow::Result<()> {
    for record in records {
        match format {
            OutputFormat::Text => writeln!(out, "{}", record)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[Record], format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_records(&mut buf, records, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_lines() {
        let records = vec![
            Record::new().with("name", "Eve").with("age", 22),
            Record::new().with("name", "Bob"),
        ];
        assert_eq!(
            render(&records, OutputFormat::Text),
            "{age: 22, name: \"Eve\"}\n{name: \"Bob\"}\n"
        );
    }

    #[test]
    fn json_lines() {
        let records = vec![Record::new().with("name", "Eve").with("score", 88)];
        assert_eq!(
            render(&records, OutputFormat::Json),
            "{\"name\":\"Eve\",\"score\":88}\n"
        );
    }

    #[test]
    fn empty_input_writes_nothing() {
        assert_eq!(render(&[], OutputFormat::Json), "");
    }
}
