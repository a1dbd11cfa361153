//! Normalization of raw treatment lines
//!
//! Every field-name fallback lives here so that graph construction only ever
//! sees `TreatmentLine`.

use crate::config::DateFormatConfig;
use crate::models::treatment_line::{PositionSource, RawTreatmentLine, TreatmentLine};
use crate::utils::date_utils::parse_date_string;
use chrono::NaiveDate;

/// Normalize a diagnosis's raw lines, in input order
///
/// Positions come from `linenumber`, then `line_number`, then the record's
/// 1-based index in `records`.
#[must_use]
pub fn normalize_lines(records: &[RawTreatmentLine], dates: &DateFormatConfig) -> Vec<TreatmentLine> {
    let lines: Vec<TreatmentLine> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| normalize_line(record, idx + 1, dates))
        .collect();

    let ordinal_fallbacks = lines
        .iter()
        .filter(|line| line.position_source == PositionSource::Ordinal)
        .count();
    if ordinal_fallbacks > 0 {
        log::warn!(
            "{ordinal_fallbacks} of {} treatment lines had no usable line number; using input order",
            lines.len()
        );
    }

    lines
}

/// Normalize one raw line found at 1-based `ordinal` in its input
#[must_use]
pub fn normalize_line(record: &RawTreatmentLine, ordinal: usize, dates: &DateFormatConfig) -> TreatmentLine {
    let (position, position_source) = resolve_position(record, ordinal);

    TreatmentLine {
        patient_id: record.patientid.clone(),
        name: record
            .linename
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        position,
        position_source,
        start: parse_timestamp(record.linestart.as_deref(), dates),
        end: parse_timestamp(record.lineend.as_deref(), dates),
    }
}

/// Resolve the sequence position; zero, negative and oversized values count as absent
#[must_use]
pub fn resolve_position(record: &RawTreatmentLine, ordinal: usize) -> (u32, PositionSource) {
    if let Some(position) = record.linenumber.and_then(positive_position) {
        return (position, PositionSource::Primary);
    }
    if let Some(position) = record.line_number.and_then(positive_position) {
        return (position, PositionSource::Alternate);
    }
    (
        u32::try_from(ordinal.max(1)).unwrap_or(u32::MAX),
        PositionSource::Ordinal,
    )
}

fn positive_position(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|&p| p > 0)
}

fn parse_timestamp(raw: Option<&str>, dates: &DateFormatConfig) -> Option<NaiveDate> {
    let raw = raw?;
    let parsed = parse_date_string(raw, dates);
    if parsed.is_none() && !raw.trim().is_empty() {
        log::warn!("Ignoring unparsable treatment line timestamp: {raw:?}");
    }
    parsed
}
