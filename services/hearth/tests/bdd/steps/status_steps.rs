//! BDD step definitions for status classification feature

use cucumber::{given, then, when};
use hearth_app::components::status_tag::status_tag_style;
use hearth_app::{classify, Severity};

use crate::world::HearthWorld;

fn parse_severity(s: &str) -> Severity {
    match s {
        "Success" => Severity::Success,
        "Danger" => Severity::Danger,
        "Warning" => Severity::Warning,
        "Neutral" => Severity::Neutral,
        other => panic!("Unknown severity: {}", other),
    }
}

#[given(expr = "a payment status {string}")]
fn payment_status(world: &mut HearthWorld, status: String) {
    world.status_input = Some(status);
}

#[when("the status is classified")]
fn classify_status(world: &mut HearthWorld) {
    let status = world.status_input.as_ref().expect("status not set");
    world.presentation = Some(classify(status));
}

#[when(expr = "the status tag is rendered with style override {string}")]
fn render_with_override(world: &mut HearthWorld, style_override: String) {
    let status = world.status_input.as_ref().expect("status not set");
    world.presentation = Some(classify(status));
    world.rendered_style = Some(status_tag_style(status, Some(&style_override)));
}

#[then(expr = "the label should be {string}")]
fn label_is(world: &mut HearthWorld, expected: String) {
    let presentation = world.presentation.as_ref().expect("not classified");
    assert_eq!(presentation.label, expected);
}

#[then(expr = "the severity should be {string}")]
fn severity_is(world: &mut HearthWorld, expected: String) {
    let presentation = world.presentation.as_ref().expect("not classified");
    assert_eq!(presentation.severity, parse_severity(&expected));
}

#[then("classifying it again gives the same result")]
fn classify_again(world: &mut HearthWorld) {
    let status = world.status_input.as_ref().expect("status not set");
    let presentation = world.presentation.as_ref().expect("not classified");
    assert_eq!(&classify(status), presentation);
}

#[then(expr = "the style should contain the {string} badge style")]
fn style_contains_severity(world: &mut HearthWorld, severity: String) {
    let style = world.rendered_style.as_ref().expect("not rendered");
    let base = parse_severity(&severity).badge_style();
    assert!(
        style.contains(&base),
        "Expected style '{}' to contain '{}'",
        style,
        base
    );
}

#[then(expr = "the style should contain {string}")]
fn style_contains(world: &mut HearthWorld, expected: String) {
    let style = world.rendered_style.as_ref().expect("not rendered");
    assert!(
        style.contains(&expected),
        "Expected style '{}' to contain '{}'",
        style,
        expected
    );
}
