//! Starter documents for `vitae new`.

/// `(name, description, source)` for every preset.
const PRESETS: &[(&str, &str, &str)] = &[
    (
        "empty-resume",
        "Minimal resume skeleton",
        include_str!("../presets/empty-resume.yml"),
    ),
    (
        "ats-resume",
        "Plain resume tuned for applicant tracking systems",
        include_str!("../presets/ats-resume.yml"),
    ),
    (
        "cover-letter",
        "Contact header and a cover letter",
        include_str!("../presets/cover-letter.yml"),
    ),
];

/// Source text of the named preset.
pub fn preset(name: &str) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|(candidate, _, _)| *candidate == name.trim())
        .map(|(_, _, source)| *source)
}

/// `(name, description)` pairs in display order.
pub fn list_presets() -> Vec<(&'static str, &'static str)> {
    PRESETS
        .iter()
        .map(|(name, description, _)| (*name, *description))
        .collect()
}
