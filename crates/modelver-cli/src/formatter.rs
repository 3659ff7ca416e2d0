//! Output formatters for comparisons and deltas.

use clap::ValueEnum;
use comfy_table::{Cell, Table};
use modelver_core::{ModelVersionDelta, VersionComparison};

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format
    Table,
    /// JSON format
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Trait for formatting output.
pub trait Formatter: Send + Sync {
    /// Format a version map comparison.
    fn format_comparison(&self, comparison: &VersionComparison) -> String;

    /// Format a model version delta.
    fn format_delta(&self, delta: &ModelVersionDelta) -> String;

    /// Format an error message.
    fn format_error(&self, error: &str) -> String;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Table formatter using comfy-table.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_comparison(&self, comparison: &VersionComparison) -> String {
        let details = &comparison.details;
        let mut table = Table::new();
        table.set_header(vec!["Type", "Target vs current"]);

        let rows = details
            .greater
            .iter()
            .map(|name| (name, "greater"))
            .chain(details.lesser.iter().map(|name| (name, "lesser")))
            .chain(details.equal.iter().map(|name| (name, "equal")));
        let mut count = 0;
        for (name, result) in rows {
            table.add_row(vec![Cell::new(name), Cell::new(result)]);
            count += 1;
        }

        if count == 0 {
            return format!("Status: {}\nNo types", comparison.status);
        }
        format!("Status: {}\n{}\n{} type(s)", comparison.status, table, count)
    }

    fn format_delta(&self, delta: &ModelVersionDelta) -> String {
        if delta.is_empty() {
            return format!("Status: {}\nNo changes", delta.status);
        }

        let mut table = Table::new();
        table.set_header(vec!["Type", "Current", "Target"]);
        for change in &delta.diff {
            table.add_row(vec![
                Cell::new(&change.name),
                Cell::new(change.current),
                Cell::new(change.target),
            ]);
        }

        format!(
            "Status: {}\n{}\n{} type(s) changed",
            delta.status,
            table,
            delta.len()
        )
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_comparison(&self, comparison: &VersionComparison) -> String {
        serde_json::to_string_pretty(comparison).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_delta(&self, delta: &ModelVersionDelta) -> String {
        serde_json::to_string_pretty(delta).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_error(&self, error: &str) -> String {
        serde_json::json!({
            "error": error
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelver_core::{
        get_model_version_delta, SemverComparator, VersionComparator, VirtualVersion,
        VirtualVersionMap,
    };

    fn maps() -> (VirtualVersionMap, VirtualVersionMap) {
        let current = VirtualVersionMap::new()
            .with("dashboard", VirtualVersion::from_model_version(2))
            .with("tag", VirtualVersion::from_model_version(1));
        let target = VirtualVersionMap::new()
            .with("dashboard", VirtualVersion::from_model_version(3))
            .with("tag", VirtualVersion::from_model_version(1));
        (current, target)
    }

    #[test]
    fn test_table_delta() {
        let (current, target) = maps();
        let delta = get_model_version_delta(&current, &target, &[]).unwrap();

        let output = TableFormatter.format_delta(&delta);
        assert!(output.starts_with("Status: upward"));
        assert!(output.contains("dashboard"));
        assert!(output.contains("10.2.0"));
        assert!(output.contains("10.3.0"));
        assert!(!output.contains("tag"));
        assert!(output.ends_with("1 type(s) changed"));
    }

    #[test]
    fn test_table_noop_delta() {
        let (current, _) = maps();
        let delta = get_model_version_delta(&current, &current, &[]).unwrap();
        assert_eq!(
            TableFormatter.format_delta(&delta),
            "Status: noop\nNo changes"
        );
    }

    #[test]
    fn test_table_comparison() {
        let (current, target) = maps();
        let comparison = SemverComparator.compare(&current, &target, &[]);

        let output = TableFormatter.format_comparison(&comparison);
        assert!(output.starts_with("Status: greater"));
        assert!(output.contains("dashboard"));
        assert!(output.contains("equal"));
        assert!(output.ends_with("2 type(s)"));
    }

    #[test]
    fn test_json_delta() {
        let (current, target) = maps();
        let delta = get_model_version_delta(&current, &target, &[]).unwrap();

        let output = JsonFormatter.format_delta(&delta);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "upward");
        assert_eq!(value["diff"][0]["name"], "dashboard");
        assert_eq!(value["diff"][0]["target"], "10.3.0");
    }

    #[test]
    fn test_json_error() {
        let output = JsonFormatter.format_error("boom");
        assert_eq!(output, r#"{"error":"boom"}"#);
        assert_eq!(TableFormatter.format_error("boom"), "Error: boom");
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
