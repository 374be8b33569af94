//! Chart-agnostic series descriptors, one per state.

use serde::Serialize;

use super::records::StateKey;
use super::selection::Selection;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesDescriptor {
    pub key: StateKey,
    pub label: String,
    pub highlighted: bool,
}

/// Builds exactly one descriptor per state, in the order given. The selected state (if it
/// is among `states`) is flagged rather than appended a second time.
pub fn build_series(states: &[StateKey], selection: &Selection) -> Vec<SeriesDescriptor> {
    let mut series: Vec<SeriesDescriptor> = states
        .iter()
        .map(|state| SeriesDescriptor {
            key: state.clone(),
            label: state.to_string(),
            highlighted: false,
        })
        .collect();
    apply_selection(&mut series, selection);
    series
}

/// Re-derives highlight flags in place.
pub fn apply_selection(series: &mut [SeriesDescriptor], selection: &Selection) {
    for descriptor in series.iter_mut() {
        descriptor.highlighted = selection.is_selected(&descriptor.key);
    }
}

/// The highlighted descriptor, if any.
pub fn highlighted(series: &[SeriesDescriptor]) -> Option<&SeriesDescriptor> {
    series.iter().find(|descriptor| descriptor.highlighted)
}
