//! Header and sidebar rendering from button descriptors.

use dioxus::prelude::*;
use hackathon_app::frontend::components::buttons::{
    HEADER_LABELS, NavButton, SIDEBAR_LABELS, header_buttons,
};
use hackathon_app::frontend::components::layout::header::{CustomHeaderProps, header_offset};
use hackathon_app::frontend::components::layout::sidebar::{SideBarProps, sidebar_offset};
use hackathon_app::frontend::components::layout::{CustomHeader, SideBar};
use std::cell::Cell;
use std::rc::Rc;

mod common;

fn render_header(buttons: Vec<NavButton>) -> String {
    let mut dom = VirtualDom::new_with_props(
        CustomHeader,
        CustomHeaderProps::builder().buttons(buttons).build(),
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_sidebar(props: SideBarProps) -> String {
    let mut dom = VirtualDom::new_with_props(SideBar, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Byte positions of `needles` in `haystack`, panicking on any that is missing.
fn positions(haystack: &str, needles: &[String]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            haystack
                .find(needle.as_str())
                .unwrap_or_else(|| panic!("`{needle}` not found in {haystack}"))
        })
        .collect()
}

fn assert_increasing(values: &[usize]) {
    assert!(
        values.windows(2).all(|pair| pair[0] < pair[1]),
        "not in order: {values:?}"
    );
}

#[test]
fn header_renders_one_button_per_descriptor_at_170px_steps() {
    let html = render_header(header_buttons());

    assert_eq!(html.matches(r#"class="header-button""#).count(), 6);

    let offsets: Vec<String> = (0..6).map(|i| format!("left: {}px;", i * 170)).collect();
    assert_increasing(&positions(&html, &offsets));

    let labels: Vec<String> = HEADER_LABELS.iter().map(|l| l.to_string()).collect();
    assert_increasing(&positions(&html, &labels));
}

#[test]
fn header_offsets_follow_index() {
    assert_eq!(header_offset(0), 0);
    assert_eq!(header_offset(1), 170);
    assert_eq!(header_offset(5), 850);
}

#[test]
fn header_sits_right_of_the_sidebar() {
    let html = render_header(vec![NavButton::new("おすすめ")]);
    assert!(html.contains(r#"class="site-header""#));
    assert!(html.contains("left: 270px;"));
}

#[test]
fn header_with_no_descriptors_renders_no_buttons() {
    let html = render_header(Vec::new());
    assert!(html.contains(r#"class="site-header""#));
    assert_eq!(html.matches(r#"class="header-button""#).count(), 0);
}

#[test]
fn header_renders_icon_before_label() {
    let html = render_header(vec![NavButton::new("通知").with_icon("🔔")]);

    let icon = html.find(r#"class="icon""#).expect("icon span missing");
    let label = html.find("通知").expect("label missing");
    assert!(icon < label);
    assert!(html.contains("🔔"));
}

#[test]
fn header_without_icon_renders_no_icon_span() {
    let html = render_header(vec![NavButton::new("通知")]);
    assert!(!html.contains(r#"class="icon""#));
}

#[test]
fn activating_descriptors_counts_exactly_once_each() {
    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let buttons = vec![
        NavButton::new("検索").on_click(move || counter.set(counter.get() + 1)),
        NavButton::new("設定"),
    ];

    buttons[0].activate();
    assert_eq!(clicks.get(), 1);

    buttons[1].activate();
    assert_eq!(clicks.get(), 1);

    buttons[0].activate();
    assert_eq!(clicks.get(), 2);
}

#[test]
fn clicking_a_rendered_header_button_runs_its_action() {
    common::install_event_converter();

    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let buttons = vec![
        NavButton::new("検索").on_click(move || counter.set(counter.get() + 1)),
        NavButton::new("設定"),
    ];

    let mut dom = VirtualDom::new_with_props(
        CustomHeader,
        CustomHeaderProps::builder().buttons(buttons).build(),
    );
    let mutations = dom.rebuild_to_vec();
    let targets = common::listeners(&mutations, "click");
    assert_eq!(targets.len(), 2);

    for id in &targets {
        common::click(&dom, *id);
    }
    assert_eq!(clicks.get(), 1);

    for id in &targets {
        common::click(&dom, *id);
    }
    assert_eq!(clicks.get(), 2);
}

#[test]
fn sidebar_without_descriptors_shows_the_default_six() {
    let html = render_sidebar(SideBarProps::builder().build());

    assert!(html.contains(r#"class="sidebar""#));
    assert_eq!(html.matches(r#"class="sidebar-button""#).count(), 6);

    let labels: Vec<String> = SIDEBAR_LABELS.iter().map(|l| l.to_string()).collect();
    assert_eq!(
        labels,
        ["ホーム", "検索", "通知", "メッセージ", "設定", "プロフィール"]
    );
    assert_increasing(&positions(&html, &labels));

    let offsets: Vec<String> = [150, 250, 350, 450, 550, 650]
        .iter()
        .map(|top| format!("top: {top}px;"))
        .collect();
    assert_increasing(&positions(&html, &offsets));
}

#[test]
fn sidebar_renders_supplied_descriptors() {
    let html = render_sidebar(
        SideBarProps::builder()
            .buttons(vec![NavButton::new("A"), NavButton::new("B")])
            .build(),
    );

    assert_eq!(html.matches(r#"class="sidebar-button""#).count(), 2);
    assert!(html.contains("top: 150px;"));
    assert!(html.contains("top: 250px;"));
    assert!(!html.contains("top: 350px;"));
}

#[test]
fn sidebar_offsets_follow_index() {
    assert_eq!(sidebar_offset(0), 150);
    assert_eq!(sidebar_offset(5), 650);
}
