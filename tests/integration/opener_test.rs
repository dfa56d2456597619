// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use smokrs::report::opener::open_report;
use std::path::Path;

#[test]
fn test_missing_report_is_a_noop() {
    let missing = Path::new("definitely-not-written-report.html");
    assert!(!missing.exists());
    assert!(!open_report(missing));
}
