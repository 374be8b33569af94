//! Pure chart geometry shared by the SVG panels.

use crate::core::pivot::TemporalRow;
use crate::core::records::StateKey;

/// Maps a numeric domain linearly onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < f64::EPSILON {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }
}

/// Value domain for the line chart: always includes the Rt = 1 threshold and is padded
/// by 5% so lines never touch the frame.
pub fn value_domain(rows: &[TemporalRow]) -> (f64, f64) {
    let (lo, hi) = rows
        .iter()
        .flat_map(|row| row.values.values().filter_map(|v| *v))
        .filter(|v| v.is_finite())
        .fold((1.0f64, 1.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let pad = ((hi - lo) * 0.05).max(0.05);
    ((lo - pad).max(0.0), hi + pad)
}

/// Julian-day domain of the rows (first and last date).
pub fn date_domain(rows: &[TemporalRow]) -> Option<(f64, f64)> {
    let first = rows.first()?.date.date().to_julian_day();
    let last = rows.last()?.date.date().to_julian_day();
    Some((f64::from(first), f64::from(last)))
}

/// SVG `points` strings for one state. Missing values split the line so gaps stay visible.
pub fn line_segments(
    rows: &[TemporalRow],
    state: &StateKey,
    x: &LinearScale,
    y: &LinearScale,
) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for row in rows {
        match row.value(state) {
            Some(value) if value.is_finite() => {
                let px = x.map(f64::from(row.date.date().to_julian_day()));
                let py = y.map(value);
                current.push(format!("{px:.1},{py:.1}"));
            }
            _ => {
                if !current.is_empty() {
                    segments.push(current.join(" "));
                    current.clear();
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current.join(" "));
    }
    segments
}

/// Evenly spaced ticks across `domain`, rounded to a step of 1, 2, or 5 times a power of ten.
pub fn ticks(domain: (f64, f64), target: usize) -> Vec<f64> {
    let (lo, hi) = domain;
    if !(hi > lo) || target == 0 {
        return vec![lo];
    }
    let raw_step = (hi - lo) / target as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw_step)
        .unwrap_or(10.0 * magnitude);

    let start = (lo / step).ceil() as i64;
    let end = (hi / step).floor() as i64;
    (start..=end).map(|i| i as f64 * step).collect()
}

/// CSS class for a map tile or bar, banded around the Rt = 1 threshold.
pub fn fill_band(value: Option<f64>) -> &'static str {
    match value {
        None => "rt-band--none",
        Some(v) if !v.is_finite() => "rt-band--none",
        Some(v) if v < 0.9 => "rt-band--falling",
        Some(v) if v < 1.0 => "rt-band--slowing",
        Some(v) if v < 1.1 => "rt-band--steady",
        Some(v) if v < 1.3 => "rt-band--growing",
        Some(_) => "rt-band--surging",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pivot::pivot;
    use crate::core::records::{Metric, RawRecord};
    use time::macros::date;

    fn rows() -> Vec<TemporalRow> {
        let al = StateKey::parse("AL").unwrap();
        let co = StateKey::parse("CO").unwrap();
        let records = vec![
            RawRecord::new(date!(2021 - 01 - 01), al.clone(), Some(1.2)),
            RawRecord::new(date!(2021 - 01 - 02), al.clone(), None),
            RawRecord::new(date!(2021 - 01 - 03), al.clone(), Some(1.0)),
            RawRecord::new(date!(2021 - 01 - 04), al, Some(0.8)),
            RawRecord::new(date!(2021 - 01 - 01), co, Some(0.9)),
        ];
        pivot(&records, Metric::Median)
    }

    #[test]
    fn linear_scale_maps_and_inverts_ranges() {
        let scale = LinearScale::new((0.0, 2.0), (100.0, 0.0));
        assert_eq!(scale.map(0.0), 100.0);
        assert_eq!(scale.map(1.0), 50.0);
        assert_eq!(scale.map(2.0), 0.0);
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new((3.0, 3.0), (0.0, 10.0));
        assert_eq!(scale.map(3.0), 5.0);
    }

    #[test]
    fn value_domain_contains_threshold_and_data() {
        let (lo, hi) = value_domain(&rows());
        assert!(lo < 0.8 && lo >= 0.0);
        assert!(hi > 1.2);
    }

    #[test]
    fn missing_values_split_segments() {
        let rows = rows();
        let (d0, d1) = date_domain(&rows).unwrap();
        let x = LinearScale::new((d0, d1), (0.0, 30.0));
        let y = LinearScale::new((0.0, 2.0), (100.0, 0.0));

        let segments = line_segments(&rows, &StateKey::parse("AL").unwrap(), &x, &y);
        assert_eq!(segments, ["0.0,40.0", "20.0,50.0 30.0,60.0"]);

        let co = line_segments(&rows, &StateKey::parse("CO").unwrap(), &x, &y);
        assert_eq!(co.len(), 1);
    }

    #[test]
    fn ticks_use_round_steps() {
        assert_eq!(ticks((0.0, 2.0), 4), [0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(ticks((0.3, 1.7), 3), [0.5, 1.0, 1.5]);
        assert_eq!(ticks((1.0, 1.0), 4), [1.0]);
    }

    #[test]
    fn bands() {
        assert_eq!(fill_band(None), "rt-band--none");
        assert_eq!(fill_band(Some(0.7)), "rt-band--falling");
        assert_eq!(fill_band(Some(0.95)), "rt-band--slowing");
        assert_eq!(fill_band(Some(1.0)), "rt-band--steady");
        assert_eq!(fill_band(Some(1.2)), "rt-band--growing");
        assert_eq!(fill_band(Some(1.6)), "rt-band--surging");
    }
}
