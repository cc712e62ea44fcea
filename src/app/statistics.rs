//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};

/// Prints non-zero error, warning, and info counters at the end of a run.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    if total_errors > 0 {
        info!("Errors encountered ({total_errors} total):");
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                info!("  {}: {}", error_type.as_str(), count);
            }
        }
    }

    let total_warnings = error_stats.total_warnings();
    if total_warnings > 0 {
        info!("Warnings ({total_warnings} total):");
        for warning_type in WarningType::iter() {
            let count = error_stats.get_warning_count(warning_type);
            if count > 0 {
                info!("  {}: {}", warning_type.as_str(), count);
            }
        }
    }

    for info_type in InfoType::iter() {
        let count = error_stats.get_info_count(info_type);
        if count > 0 {
            info!("{}: {}", info_type.as_str(), count);
        }
    }
}
