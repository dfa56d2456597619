// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use smokrs::checks::locator::{Locator, Selector};

#[test]
fn test_tag_translates_to_bare_css() {
    assert_eq!(
        Locator::tag("h1").selector(),
        Selector::Css("h1".to_string())
    );
}

#[test]
fn test_name_attribute_translates_to_attribute_selector() {
    assert_eq!(
        Locator::name("email").selector(),
        Selector::Css("[name=\"email\"]".to_string())
    );
}

#[test]
fn test_class_translates_to_dot_selector() {
    assert_eq!(
        Locator::class_name("recharts-wrapper").selector(),
        Selector::Css(".recharts-wrapper".to_string())
    );
}

#[test]
fn test_id_translates_to_hash_selector() {
    assert_eq!(
        Locator::id("dashboard").selector(),
        Selector::Css("#dashboard".to_string())
    );
}

#[test]
fn test_xpath_passes_through_untouched() {
    let expr = "//button[contains(text(),'Login')]";
    assert_eq!(
        Locator::xpath(expr).selector(),
        Selector::XPath(expr.to_string())
    );
}

#[test]
fn test_display_names_the_strategy() {
    assert_eq!(Locator::tag("nav").to_string(), "tag <nav>");
    assert_eq!(Locator::name("email").to_string(), "name \"email\"");
    assert_eq!(Locator::id("dashboard").to_string(), "id \"dashboard\"");
}
