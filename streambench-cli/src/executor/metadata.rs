//! System Metadata Collection

use chrono::Utc;
use streambench_core::HAS_CYCLE_COUNTER;
use streambench_report::{ReportConfig, ReportMeta, SCHEMA_VERSION, SystemInfo};

/// Build report metadata for a run with the given configuration
pub fn build_report_meta(config: ReportConfig) -> ReportMeta {
    let cpu_cores = std::thread::available_parallelism()
        .map(|n| u32::try_from(n.get()).unwrap_or(u32::MAX))
        .unwrap_or(1);

    ReportMeta {
        schema_version: SCHEMA_VERSION,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        system: SystemInfo {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpu_cores,
            has_cycle_counter: HAS_CYCLE_COUNTER,
        },
        config,
    }
}
