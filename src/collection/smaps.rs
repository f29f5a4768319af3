//! The precise measurement path: summing one memory category over
//! `/proc/<PID>/smaps`.
//!
//! The report enumerates every mapped region followed by `Label: value unit`
//! lines describing that region's contribution to various categories. We
//! don't walk it region by region; the relevant lines are selected by a flat
//! scan over the whole report.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use super::{
    MemType,
    error::{CollectionResult, ReportError},
};
use crate::utils::data_units::unit_multiplier;

/// Reads the smaps report at `path` and sums the category matching
/// `mem_type` across all regions, in bytes.
pub(crate) fn report_total(path: &Path, mem_type: &MemType) -> CollectionResult<f64> {
    let label = mem_type.smaps_label().ok_or(ReportError::UnsupportedKind)?;
    let reader = BufReader::new(File::open(path)?);

    sum_category(
        reader.lines(),
        label,
        matches!(*mem_type, MemType::Proportional),
    )
}

/// Sums every line containing `label` over the report.
///
/// A line is expected to split into exactly three whitespace-separated
/// fields (label, value, unit). Any line that doesn't aborts the entire
/// summation: a partially-parsed report is untrustworthy, and returning an
/// error here lets the caller fall back to `ps` instead of silently
/// reporting a wrong number.
///
/// Note the label match is a substring check, so a `Pss` scan also picks up
/// `SwapPss` lines. That matches how smaps consumers have historically read
/// the report, and the debias below assumes it.
fn sum_category(
    lines: impl Iterator<Item = io::Result<String>>, label: &str, debias: bool,
) -> CollectionResult<f64> {
    let mut sum = 0.0;
    let mut matched = false;

    for line in lines {
        let line = line?;
        if !line.contains(label) {
            continue;
        }
        matched = true;

        let mut parts = line.split_whitespace();
        let (Some(_label), Some(value), Some(unit), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ReportError::MalformedLine);
        };

        // Pss values are truncated by the kernel; adding half a unit per
        // line averages the rounding error out across many small regions.
        let mut value = value.parse::<f64>().unwrap_or(0.0);
        if debias {
            value += 0.5;
        }

        let multiplier = unit_multiplier(unit).ok_or(ReportError::MalformedLine)?;
        sum += value * multiplier;
    }

    if !matched {
        return Err(ReportError::NoData);
    }

    Ok(sum)
}
