//! Subcommand execution.

use crate::config::Command;
use crate::error::CliError;
use crate::formatter::Formatter;
use crate::loader::load_version_map;
use modelver_core::{SemverComparator, VersionComparator, VersionDeltaCalculator};

/// Execute a subcommand and render its result.
pub fn execute(command: &Command, formatter: &dyn Formatter) -> Result<String, CliError> {
    let maps = command.maps();
    let current = load_version_map(&maps.current)?;
    let target = load_version_map(&maps.target)?;

    match command {
        Command::Compare(_) => {
            let comparison = SemverComparator.compare(&current, &target, &maps.deleted_types);
            tracing::info!(status = %comparison.status, "compared version maps");
            Ok(formatter.format_comparison(&comparison))
        }
        Command::Delta { .. } => {
            let calculator =
                VersionDeltaCalculator::with_config(SemverComparator, command.delta_config());
            let delta = calculator.compute_delta(&current, &target, &maps.deleted_types)?;
            tracing::info!(status = %delta.status, types = delta.len(), "computed delta");
            Ok(formatter.format_delta(&delta))
        }
    }
}
