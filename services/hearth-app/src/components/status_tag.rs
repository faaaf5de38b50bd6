//! Payment status tag component

use crate::components::badge::{merge_style, Badge};
use crate::status::classify;
use leptos::prelude::*;

/// Final inline style of the tag rendered for `status`
pub fn status_tag_style(status: &str, style_override: Option<&str>) -> String {
    merge_style(&classify(status).severity.badge_style(), style_override)
}

/// Badge showing the label for a bill's payment status: Paid (green),
/// Overdue (red), Upcoming Due (amber), anything else echoed in gray
#[component]
pub fn StatusTag(
    #[prop(into)] status: String,
    #[prop(optional, into)] style_override: Option<String>,
) -> impl IntoView {
    let presentation = classify(&status);

    view! {
        <Badge severity=presentation.severity style_override=style_override>
            {presentation.label}
        </Badge>
    }
}


#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;
    use crate::status::Severity;

    fn render(status: &str, style_override: Option<&str>) -> String {
        let status = status.to_string();
        let style_override = style_override.map(str::to_string);
        Owner::new().with(move || match style_override {
            Some(extra) => view! { <StatusTag status=status style_override=extra /> }.to_html(),
            None => view! { <StatusTag status=status /> }.to_html(),
        })
    }

    #[test]
    fn renders_label_severity_and_merged_style() {
        let html = render("UpcomingDue", Some("margin-left: 4px;"));
        assert!(html.contains(">Upcoming Due</span>"), "{}", html);
        assert!(html.contains(r#"data-severity="warning""#), "{}", html);
        assert!(html.contains("background-color: #fff3cd;"), "{}", html);
        assert!(html.contains("border-radius: 0.25rem;"), "{}", html);
        assert!(html.contains("margin-left: 4px;"), "{}", html);
    }

    #[test]
    fn renders_unknown_status_as_neutral_echo() {
        let html = render("unknown_value", Some("opacity: 0.5;"));
        assert!(html.contains(">unknown_value</span>"), "{}", html);
        assert!(html.contains(r#"data-severity="neutral""#), "{}", html);
        let (color, bg) = Severity::Neutral.colors();
        assert!(html.contains(&format!("color: {};", color)), "{}", html);
        assert!(html.contains(&format!("background-color: {};", bg)), "{}", html);
        assert!(html.contains("opacity: 0.5;"), "{}", html);
    }

    #[test]
    fn renders_without_override() {
        let html = render("Paid", None);
        assert!(html.contains(">Paid</span>"), "{}", html);
        assert!(html.contains(r#"data-severity="success""#), "{}", html);
        assert!(html.contains("background-color: #d4edda;"), "{}", html);
    }
}
