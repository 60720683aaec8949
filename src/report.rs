//! Report export for calculation results
//!
//! Plain-text summaries for display, pretty JSON for a single result, and a
//! flat CSV for a history.

use crate::calculation::CalculationResult;
use crate::capacity::ComplianceCheck;
use crate::physics::WindLoading;
use crate::policy::LoadPolicy;
use crate::types::*;
use serde::Serialize;
use std::io;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn mark(passed: bool) -> &'static str {
    if passed { "PASS" } else { "FAIL" }
}

/// Human-readable report for one result
pub fn summary(result: &CalculationResult, policy: &LoadPolicy) -> String {
    let crane = &result.inputs.crane;
    let load = &result.inputs.load;
    let wind = WindLoading {
        wind_speed: crane.environmental.wind_speed,
        wind_factor: result.wind_factor,
        wind_load: result.wind_load,
    };

    let mut s = String::new();
    s.push_str("Load Calculation Report:\n");
    s.push_str(&format!(
        "Type: {}  ({})\n",
        result.calculation_type,
        result.timestamp.to_rfc3339()
    ));

    s.push_str("\nCrane:\n");
    s.push_str(&format!(
        "  {:?}, gross capacity {}\n",
        crane.crane_type,
        DisplayMass(crane.gross_capacity)
    ));
    s.push_str(&format!("  Radius: {}\n", DisplayLength(crane.load_radius)));
    match crane.boom_length {
        Some(boom) => s.push_str(&format!("  Boom: {}\n", DisplayLength(boom))),
        None if crane.crane_type.has_boom() => s.push_str("  Boom: not given\n"),
        None => {}
    }
    s.push_str(&format!("  Counterweight: {}\n", DisplayMass(crane.counterweight)));

    s.push_str("\nLoad:\n");
    s.push_str(&format!("  Weight: {}\n", DisplayMass(load.weight)));
    s.push_str(&format!("  Rigging: {}\n", DisplayMass(load.rigging_weight)));
    s.push_str(&format!("  Lifting points: {}\n", load.lifting_points));
    s.push_str(&format!("  Total static load: {}\n", DisplayMass(result.total_static_load)));
    s.push_str(&format!("  Effective load: {}\n", DisplayMass(result.effective_load)));

    s.push_str("\nWind:\n");
    s.push_str(&format!(
        "  {} ({:?}), factor {:.2}, wind load {}\n",
        DisplayVelocity(wind.wind_speed),
        wind.condition(policy),
        wind.wind_factor,
        DisplayMass(wind.wind_load)
    ));

    s.push_str("\nCapacity:\n");
    s.push_str(&format!("  Deductions: {}\n", DisplayMass(result.deductions)));
    s.push_str(&format!("  Net capacity: {}\n", DisplayMass(result.net_capacity)));
    s.push_str(&format!("  Utilization: {:.2}%\n", result.utilization_percentage));
    s.push_str(&format!("  Safety margin: {}\n", DisplayMass(result.safety_margin)));

    s.push_str("\nStability:\n");
    s.push_str(&format!("  Load moment: {:.2} t·m\n", result.load_moment));
    s.push_str(&format!("  Restoring moment: {:.2} t·m\n", result.restoring_moment));
    s.push_str(&format!("  Stability ratio: {}\n", result.stability_ratio));

    if let Some(multi) = &result.multi_crane {
        s.push_str("\nMulti-crane:\n");
        let shares = multi.load_distribution.iter().zip(&multi.crane_loads);
        for (i, (share, carried)) in shares.enumerate() {
            s.push_str(&format!(
                "  Crane {}: {:.1}% ({})\n",
                i + 1,
                share,
                DisplayMass(*carried)
            ));
        }
        s.push_str(&format!(
            "  Coordination factor: {:.2}{}\n",
            multi.coordination_factor,
            if multi.coordination_factor_applied { " (applied)" } else { " (not applied)" }
        ));
        s.push_str(&format!("  Synchronization risk: {}\n", multi.synchronization_risk));
    }

    s.push_str("\nCompliance:\n");
    for check in ComplianceCheck::ALL {
        s.push_str(&format!("  {} {}\n", mark(result.compliance.passed(check)), check));
    }
    s.push_str(&format!(
        "  Overall: {}\n",
        if result.compliance.overall_status { "SAFE TO LIFT" } else { "NOT SAFE TO LIFT" }
    ));

    s
}

pub fn to_json(result: &CalculationResult) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// One CSV row per result, in display units
#[derive(Debug, Serialize)]
struct HistoryRow {
    timestamp: String,
    calculation_type: &'static str,
    crane_type: String,
    total_static_load_t: f64,
    effective_load_t: f64,
    wind_load_t: f64,
    net_capacity_t: f64,
    utilization_percent: f64,
    safety_margin_t: f64,
    load_moment_tm: f64,
    restoring_moment_tm: f64,
    stability_ratio: String,
    capacity_check: bool,
    stability_check: bool,
    utilization_check: bool,
    wind_check: bool,
    overall_status: bool,
}

impl From<&CalculationResult> for HistoryRow {
    fn from(result: &CalculationResult) -> Self {
        Self {
            timestamp: result.timestamp.to_rfc3339(),
            calculation_type: result.calculation_type.label(),
            crane_type: format!("{:?}", result.inputs.crane.crane_type).to_lowercase(),
            total_static_load_t: tonnes(result.total_static_load),
            effective_load_t: tonnes(result.effective_load),
            wind_load_t: tonnes(result.wind_load),
            net_capacity_t: tonnes(result.net_capacity),
            utilization_percent: result.utilization_percentage,
            safety_margin_t: tonnes(result.safety_margin),
            load_moment_tm: result.load_moment,
            restoring_moment_tm: result.restoring_moment,
            stability_ratio: result.stability_ratio.to_string(),
            capacity_check: result.compliance.capacity_check,
            stability_check: result.compliance.stability_check,
            utilization_check: result.compliance.utilization_check,
            wind_check: result.compliance.wind_check,
            overall_status: result.compliance.overall_status,
        }
    }
}

pub fn write_history_csv<'a, W: io::Write>(
    results: impl IntoIterator<Item = &'a CalculationResult>,
    writer: W,
) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for result in results {
        csv_writer.serialize(HistoryRow::from(result))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_history_csv<'a>(
    results: impl IntoIterator<Item = &'a CalculationResult>,
    path: impl AsRef<Path>,
) -> Result<(), ReportError> {
    let file = std::fs::File::create(path.as_ref())?;
    write_history_csv(results, io::BufWriter::new(file))?;
    tracing::info!(path = %path.as_ref().display(), "exported calculation history");
    Ok(())
}
