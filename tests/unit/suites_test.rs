// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use smokrs::checks::outcome::Requirement;
use smokrs::suites::{lenient, strict};
use std::collections::HashSet;

#[test]
fn test_strict_suite_requires_everything() {
    let suite = strict::suite();

    assert_eq!(suite.name, "strict");
    assert!(!suite.capture_evidence);
    assert_eq!(suite.checks.len(), 7);
    assert!(suite
        .checks
        .iter()
        .all(|c| c.requirement == Requirement::Required));
}

#[test]
fn test_lenient_suite_marks_optional_features() {
    let suite = lenient::suite();

    assert_eq!(suite.name, "lenient");
    assert!(suite.capture_evidence);
    assert_eq!(suite.checks.len(), 6);

    let required: Vec<&str> = suite
        .checks
        .iter()
        .filter(|c| c.requirement == Requirement::Required)
        .map(|c| c.check.name())
        .collect();
    let optional: Vec<&str> = suite
        .checks
        .iter()
        .filter(|c| c.requirement == Requirement::Optional)
        .map(|c| c.check.name())
        .collect();

    assert_eq!(required, ["page_title", "heading_exists", "navigation_bar"]);
    assert_eq!(optional, ["button_click", "login_form", "chart_widget"]);
}

#[test]
fn test_check_names_are_unique_within_each_suite() {
    // Evidence files are keyed by check name, duplicates would overwrite
    for suite in [strict::suite(), lenient::suite()] {
        let names: HashSet<&str> = suite.checks.iter().map(|c| c.check.name()).collect();
        assert_eq!(names.len(), suite.checks.len(), "suite {}", suite.name);
    }
}
