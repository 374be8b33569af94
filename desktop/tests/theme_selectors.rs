#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Every class the dashboard components emit must exist in the shared theme
(`ui/assets/theme/main.css`), otherwise the packaged desktop build silently renders
unstyled panels. A substring check is enough as an early warning.

When a component starts emitting a new structural class, add it to REQUIRED_SELECTORS.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".navbar__links",
    ".navbar__link",
    // Dashboard shell
    ".dash__header",
    ".dash__grid",
    ".dash__error",
    ".dash__report",
    ".dash-card",
    ".dash-card__header",
    ".dash-card__meta",
    ".dash-card__placeholder",
    // Line chart
    ".dash-line__threshold",
    ".dash-line__series",
    ".dash-line__series--active",
    ".dash-line__series--muted",
    // Bars and map
    ".dash-bars__bar",
    ".dash-bars__bar--active",
    ".dash-map__tile",
    ".dash-map__tile--active",
    ".dash-map__legend",
    // Readout and inspector
    ".dash-readout",
    ".dash-inspector__body",
    // Responsive block
    "@media (max-width: 720px)",
];

/// Classes returned by the band classifier in `ui::dashboard::scale::fill_band`.
const BANDS: &[&str] = &[
    "rt-band--none",
    "rt-band--falling",
    "rt-band--slowing",
    "rt-band--steady",
    "rt-band--growing",
    "rt-band--surging",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn every_band_has_a_rule() {
    for value in [None, Some(0.5), Some(0.95), Some(1.05), Some(1.2), Some(2.0)] {
        let class = ui::dashboard::scale::fill_band(value);
        assert!(BANDS.contains(&class), "unexpected band `{class}`");
        assert!(
            THEME_CSS.contains(&format!(".{class} {{")),
            "band `{class}` has no rule in the theme"
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars), \
         did the file get truncated or the path change?"
    );
}
