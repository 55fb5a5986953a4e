//! multisort: sorts a fixed sample dataset and prints the result.

use std::io::Write;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use multisort::{SortKey, SortOptions, SortSpec, Strategy};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod demo;
mod output;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "multisort")]
#[command(about = "Sort a sample dataset by several fields and print it", long_about = None)]
struct Cli {
    /// Sort keys as FIELD[:asc|desc], highest priority first (default: age:asc,score:desc)
    #[arg(long, value_delimiter = ',')]
    by: Vec<SortKey>,

    /// Merge strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::BottomUp)]
    strategy: StrategyArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    TopDown,
    BottomUp,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::TopDown => Strategy::TopDown,
            StrategyArg::BottomUp => Strategy::BottomUp,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let spec: SortSpec = if cli.by.is_empty() {
        demo::default_spec()
    } else {
        cli.by.iter().cloned().collect()
    };
    let options = SortOptions::new().strategy(cli.strategy.into());
    let people = demo::people();

    info!(%spec, strategy = %options.strategy, records = people.len(), "sorting sample dataset");

    let sorted = multisort::try_sort_with(&people, &spec, &options)
        .with_context(|| format!("cannot sort sample dataset by '{}'", spec))?;
    output::write_records(out, &sorted, cli.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("multisort").chain(args.iter().copied()))?;
        let mut buf = Vec::new();
        run(&cli, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn default_run_prints_expected_order() {
        let text = run_args(&[]).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                r#"{age: 22, name: "Eve", score: 88}"#,
                r#"{age: 25, name: "Charlie", score: 95}"#,
                r#"{age: 25, name: "Alice", score: 90}"#,
                r#"{age: 30, name: "Bob", score: 85}"#,
                r#"{age: 30, name: "David", score: 80}"#,
            ]
        );
    }

    #[test]
    fn top_down_matches_default() {
        assert_eq!(
            run_args(&["--strategy", "top-down"]).unwrap(),
            run_args(&[]).unwrap()
        );
    }

    #[test]
    fn custom_keys_and_json() {
        let text = run_args(&["--by", "name:desc", "--format", "json"]).unwrap();
        let first = text.lines().next().unwrap();
        assert_eq!(first, r#"{"age":22,"name":"Eve","score":88}"#);
    }

    #[test]
    fn repeated_and_delimited_keys() {
        let cli = Cli::try_parse_from(["multisort", "--by", "age", "--by", "score:desc,name"]).unwrap();
        assert_eq!(
            cli.by,
            vec![SortKey::asc("age"), SortKey::desc("score"), SortKey::asc("name")]
        );
    }

    #[test]
    fn bad_key_is_rejected() {
        assert!(Cli::try_parse_from(["multisort", "--by", "age:up"]).is_err());
    }
}
