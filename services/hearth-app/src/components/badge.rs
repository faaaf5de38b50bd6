//! Badge primitive

use crate::status::Severity;
use leptos::prelude::*;

const BADGE_SHAPE: &str = "display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; \
                           font-size: 0.85em; font-weight: 600;";

impl Severity {
    /// Foreground and background colors for this severity
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            Severity::Success => ("#155724", "#d4edda"),
            Severity::Danger => ("#721c24", "#f8d7da"),
            Severity::Warning => ("#856404", "#fff3cd"),
            Severity::Neutral => ("#383d41", "#e2e3e5"),
        }
    }

    /// Inline CSS for a badge of this severity
    pub fn badge_style(&self) -> String {
        let (color, bg) = self.colors();
        format!("{} color: {}; background-color: {};", BADGE_SHAPE, color, bg)
    }
}

/// Append a caller supplied style to a base style.
///
/// The base declarations always stay in the result; a blank override leaves
/// the base untouched.
pub fn merge_style(base: &str, style_override: Option<&str>) -> String {
    match style_override.map(str::trim) {
        Some(extra) if !extra.is_empty() => {
            let base = base.trim_end();
            if base.is_empty() {
                extra.to_string()
            } else if base.ends_with(';') {
                format!("{} {}", base, extra)
            } else {
                format!("{}; {}", base, extra)
            }
        }
        _ => base.to_string(),
    }
}

/// A colored pill rendering its children with the style for `severity`
#[component]
pub fn Badge(
    severity: Severity,
    #[prop(optional_no_strip)] style_override: Option<String>,
    children: Children,
) -> impl IntoView {
    let style = merge_style(&severity.badge_style(), style_override.as_deref());

    view! {
        <span style=style data-severity=severity.as_str()>{children()}</span>
    }
}
