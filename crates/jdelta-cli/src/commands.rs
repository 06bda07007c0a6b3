use std::io::Read;

use anyhow::{bail, Context};
use colored::Colorize;
use jdelta_diff::{compare, ChangeKind, DiffResult};
use jdelta_report::{format_change, header};
use jdelta_types::{normalize, Input, Value, ValueError, PARSE_DEPTH_LIMIT};
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::config::CliConfig;

/// Run one comparison. Returns `true` when the documents differ.
pub fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = CliConfig::resolve(cli)?;
    if !config.color {
        colored::control::set_override(false);
    }
    if !cli.inline && cli.old == "-" && cli.new == "-" {
        bail!("only one of OLD and NEW can be read from stdin");
    }

    let old = load_side("old", &cli.old, cli.inline, config.max_depth)?;
    let new = load_side("new", &cli.new, cli.inline, config.max_depth)?;

    let result = compare(&old, &new);
    debug!(
        changes = result.len(),
        added = result.additions(),
        removed = result.removals(),
        modified = result.modifications(),
        "comparison finished"
    );

    println!("{}", render(&result, cli.format, &config)?);
    Ok(result.is_modified())
}

// Parse strictly first: a document past the parser's nesting limit must be
// rejected, not degraded to a text leaf by the normalizer.
fn load_side(side: &str, arg: &str, inline: bool, max_depth: usize) -> anyhow::Result<Value> {
    let value = match read_input(arg, inline)? {
        Input::Text(text) => match text.parse::<Value>() {
            Ok(value) => value,
            Err(ValueError::TooDeep) => bail!(
                "{side} document is nested more than {PARSE_DEPTH_LIMIT} levels deep (limit {})",
                max_depth.min(PARSE_DEPTH_LIMIT)
            ),
            Err(_) => normalize(text),
        },
        input => normalize(input),
    };
    check_depth(side, &value, max_depth)?;
    Ok(value)
}

fn read_input(arg: &str, inline: bool) -> anyhow::Result<Input> {
    if inline {
        return Ok(Input::Text(arg.to_owned()));
    }
    let text = if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(arg).with_context(|| format!("reading {arg}"))?
    };
    Ok(Input::Text(text))
}

fn check_depth(side: &str, value: &Value, max_depth: usize) -> anyhow::Result<()> {
    let depth = value.depth();
    if depth > max_depth {
        bail!("{side} document is nested {depth} levels deep (limit {max_depth})");
    }
    Ok(())
}

fn render(result: &DiffResult, format: OutputFormat, config: &CliConfig) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).context("serializing diff result")
        }
        OutputFormat::Text => Ok(render_text(result, config)),
    }
}

fn render_text(result: &DiffResult, config: &CliConfig) -> String {
    let labels = config.report_config().labels();
    if !result.is_modified() {
        return labels.no_differences.green().to_string();
    }

    let mut lines = vec![header(result.len(), &labels).bold().to_string()];
    for change in result {
        let line = format_change(change, &labels);
        let styled = match change.kind() {
            ChangeKind::Added => line.green(),
            ChangeKind::Removed => line.red(),
            ChangeKind::Modified => line.yellow(),
        };
        lines.push(styled.to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use jdelta_diff::normalize_and_compare;
    use jdelta_report::{format_with, Locale};
    use std::io::Write;

    fn plain_config() -> CliConfig {
        CliConfig {
            color: false,
            ..CliConfig::default()
        }
    }

    #[test]
    fn inline_input_is_text() {
        assert_eq!(
            read_input("{\"a\":1}", true).unwrap(),
            Input::Text("{\"a\":1}".into())
        );
    }

    #[test]
    fn file_input_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2]").unwrap();
        let path = file.path().to_str().unwrap().to_owned();
        let value = load_side("old", &path, false, 128).unwrap();
        assert_eq!(value, Value::from(serde_json::json!([1, 2])));
    }

    #[test]
    fn missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(read_input(path.to_str().unwrap(), false).is_err());
    }

    #[test]
    fn nesting_past_parser_limit_is_rejected() {
        let deep = format!("{}1{}", "[".repeat(200), "]".repeat(200));
        let err = load_side("old", &deep, true, 128).unwrap_err();
        assert!(err.to_string().contains("limit 128"));
        assert!(load_side("old", &deep, true, 1000).is_err());
    }

    #[test]
    fn non_json_text_still_loads_as_string() {
        let value = load_side("old", "plain words", true, 128).unwrap();
        assert_eq!(value, Value::from("plain words"));
    }

    #[test]
    fn depth_limit_enforced() {
        let value = normalize("[[[1]]]");
        assert!(check_depth("old", &value, 4).is_ok());
        let err = check_depth("new", &value, 3).unwrap_err();
        assert!(err.to_string().contains("limit 3"));
    }

    #[test]
    fn text_render_matches_report() {
        colored::control::set_override(false);
        let config = CliConfig {
            locale: Locale::Zh,
            ..plain_config()
        };
        let result = normalize_and_compare("{\"a\":1}", "{\"a\":2,\"b\":[]}");
        assert_eq!(
            render_text(&result, &config),
            format_with(&result, &config.report_config())
        );
    }

    #[test]
    fn json_render() {
        let result = normalize_and_compare("[1]", "[1, 2]");
        let out = render(&result, OutputFormat::Json, &plain_config()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["isModified"], serde_json::json!(true));
        assert_eq!(parsed["changes"][0]["path"], serde_json::json!("[1]"));
        assert_eq!(parsed["changes"][0]["kind"], serde_json::json!("added"));
    }

    #[test]
    fn run_inline_reports_modified() {
        let cli = Cli::try_parse_from(["jdelta", "--inline", "--no-color", "{\"a\":1}", "{\"a\":1}"])
            .unwrap();
        assert!(!run(&cli).unwrap());

        let cli = Cli::try_parse_from(["jdelta", "--inline", "--no-color", "1", "2"]).unwrap();
        assert!(run(&cli).unwrap());
    }

    #[test]
    fn run_rejects_two_stdin_sides() {
        let cli = Cli::try_parse_from(["jdelta", "--no-color", "-", "-"]).unwrap();
        assert!(run(&cli).is_err());
    }
}
