// SPDX-License-Identifier: MPL-2.0

//! End-to-end scenarios through the widget state, as the demo app drives it.

use cascade::cascader::{CascaderOption, Change, OptionKey, Summary};
use cascade::widgets::cascader::{CascaderConfig, CascaderMessage, CascaderState};

/// `A { a1 { x }, a2 { y } }`, keyed by label.
fn tree() -> Vec<CascaderOption> {
    vec![CascaderOption::new("A").with_children([
        CascaderOption::new("a1").with_children([CascaderOption::new("x")]),
        CascaderOption::new("a2").with_children([CascaderOption::new("y")]),
    ])]
}

fn keys(parts: &[&str]) -> Vec<OptionKey> {
    parts.iter().map(|p| OptionKey::from(*p)).collect()
}

fn click(state: &mut CascaderState, level: usize, index: usize) -> Option<Change> {
    let target = state.cascader.option_ref(level, index);
    state.update(CascaderMessage::Activate(target))
}

#[test]
fn single_select_through_two_levels() {
    let mut state = CascaderState::new(tree(), CascaderConfig::default());
    state.update(CascaderMessage::Toggle);

    assert_eq!(click(&mut state, 0, 0), None);
    assert_eq!(state.cascader.menus().len(), 2);
    assert_eq!(click(&mut state, 1, 0), None);
    assert_eq!(state.cascader.menus().len(), 3);

    let change = click(&mut state, 2, 0);
    assert_eq!(change, Some(Change::Single(keys(&["A", "a1", "x"]))));
    assert!(!state.is_open());
}

#[test]
fn multiple_select_toggles_the_same_leaf() {
    let config = CascaderConfig {
        multiple: true,
        ..CascaderConfig::default()
    };
    let mut state = CascaderState::new(tree(), config);
    state.update(CascaderMessage::Toggle);
    click(&mut state, 0, 0);
    click(&mut state, 1, 0);

    let first = click(&mut state, 2, 0);
    assert_eq!(first, Some(Change::Multiple(vec![keys(&["A", "a1", "x"])])));
    assert!(state.is_open());

    let second = click(&mut state, 2, 0);
    assert_eq!(second, Some(Change::Multiple(Vec::new())));
    assert!(state.cascader.selected_paths().is_empty());
}

#[test]
fn display_follows_show_all_levels() {
    let mut state = CascaderState::new(tree(), CascaderConfig::default());
    state.cascader.set_selected_path(keys(&["A", "a1", "x"]));
    assert_eq!(state.summary(), Summary::Single("A / a1 / x".to_string()));

    state.set_config(CascaderConfig {
        show_all_levels: false,
        ..CascaderConfig::default()
    });
    assert_eq!(state.summary(), Summary::Single("x".to_string()));
}

#[test]
fn clear_after_single_select() {
    let config = CascaderConfig {
        clearable: true,
        ..CascaderConfig::default()
    };
    let mut state = CascaderState::new(tree(), config);
    state.update(CascaderMessage::Toggle);
    click(&mut state, 0, 0);
    click(&mut state, 1, 0);
    click(&mut state, 2, 0);
    assert!(state.show_clear());

    let change = state.update(CascaderMessage::Clear);
    assert_eq!(change, Some(Change::Single(Vec::new())));
    assert_eq!(state.summary(), Summary::Placeholder);
    assert!(!state.show_clear());
}

#[test]
fn reopening_starts_from_the_root_column() {
    let mut state = CascaderState::new(tree(), CascaderConfig::default());
    state.update(CascaderMessage::Toggle);
    click(&mut state, 0, 0);
    click(&mut state, 1, 1);
    assert_eq!(state.cascader.menus().len(), 3);

    state.update(CascaderMessage::Dismiss);
    state.update(CascaderMessage::Toggle);
    assert!(state.is_open());
    assert_eq!(state.cascader.menus().len(), 1);
    assert!(state.cascader.selected_path().is_empty());
}
