// SPDX-License-Identifier: MPL-2.0

//! Property tests for selection semantics.

use proptest::prelude::*;

use cascade::cascader::{Cascader, CascaderOption, Change, Mode, OptionKey, Outcome};

use super::strategies::{clicks, tree, visible_target};

/// Replays the clicks, pairing each committed change with the keys of the
/// chosen prefix followed by the clicked option.
fn drive(cascader: &mut Cascader, clicks: &[(usize, usize)]) -> Vec<(Change, Vec<OptionKey>)> {
    let mut commits = Vec::new();
    for &(level, index) in clicks {
        let target = visible_target(cascader, level, index);
        let expected: Vec<OptionKey> = cascader
            .current_path()
            .into_iter()
            .take(target.level)
            .map(CascaderOption::key)
            .chain(cascader.resolve(target).ok().map(CascaderOption::key))
            .collect();
        if let Outcome::Committed { change, .. } = cascader.activate(target) {
            commits.push((change, expected));
        }
    }
    commits
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a single-mode commit is the chosen prefix followed by the leaf.
    #[test]
    fn property_single_commit_is_prefix_plus_leaf(
        options in tree(),
        clicks in clicks(),
    ) {
        let mut cascader = Cascader::new(options);
        for (change, expected) in drive(&mut cascader, &clicks) {
            prop_assert_eq!(change, Change::Single(expected));
        }
    }

    /// PROPERTY: committed paths end at a leaf and resolve to labels.
    #[test]
    fn property_committed_paths_end_at_leaves(
        options in tree(),
        clicks in clicks(),
    ) {
        let mut cascader = Cascader::new(options);
        drive(&mut cascader, &clicks);

        let path = cascader.selected_path().to_vec();
        if !path.is_empty() {
            let mut column = cascader.options();
            let mut last = None;
            for key in &path {
                let option = column.iter().find(|o| o.matches(key));
                prop_assert!(option.is_some(), "key {} not found", key);
                let option = option.unwrap();
                column = &option.children;
                last = Some(option);
            }
            prop_assert!(last.is_some_and(CascaderOption::is_leaf));
        }
    }

    /// PROPERTY: in multiple mode, committing the same leaf twice restores the selection.
    #[test]
    fn property_double_toggle_is_identity(
        options in tree(),
        clicks in clicks(),
        level in 0usize..8,
        index in 0usize..8,
    ) {
        let mut cascader = Cascader::new(options).with_mode(Mode::Multiple);
        drive(&mut cascader, &clicks);
        let before = cascader.selected_paths().to_vec();

        let target = visible_target(&cascader, level, index);
        if let Outcome::Committed { close, .. } = cascader.activate(target) {
            prop_assert!(!close);
            cascader.activate(target);
        }

        prop_assert_eq!(cascader.selected_paths(), before.as_slice());
    }

    /// PROPERTY: multiple-mode paths never contain the same path twice.
    #[test]
    fn property_multiple_paths_are_unique(
        options in tree(),
        clicks in clicks(),
    ) {
        let mut cascader = Cascader::new(options).with_mode(Mode::Multiple);
        drive(&mut cascader, &clicks);

        let paths = cascader.selected_paths();
        for (i, path) in paths.iter().enumerate() {
            prop_assert!(!paths[..i].contains(path));
        }
    }

    /// PROPERTY: replacing the tree keeps the selection and resets navigation.
    #[test]
    fn property_tree_replacement_keeps_selection(
        options in tree(),
        replacement in tree(),
        clicks in clicks(),
    ) {
        let mut cascader = Cascader::new(options);
        drive(&mut cascader, &clicks);
        let before = cascader.snapshot();

        cascader.set_options(replacement);

        prop_assert_eq!(cascader.snapshot(), before);
        prop_assert_eq!(cascader.navigation().depth(), 0);
        prop_assert_eq!(cascader.menus().len(), 1);
    }

    /// PROPERTY: preset paths are rejected exactly when one repeats or is empty.
    #[test]
    fn property_preset_paths_validate(
        paths in prop::collection::vec(prop::collection::vec(0i64..3, 0..3), 0..5),
    ) {
        let paths: Vec<Vec<OptionKey>> = paths
            .into_iter()
            .map(|p| p.into_iter().map(OptionKey::from).collect())
            .collect();
        let valid = paths.iter().enumerate().all(|(i, p)| !p.is_empty() && !paths[..i].contains(p));

        let mut cascader = Cascader::default().with_mode(Mode::Multiple);
        let result = cascader.set_selected_paths(paths.clone());

        prop_assert_eq!(result.is_ok(), valid);
        if valid {
            prop_assert_eq!(cascader.selected_paths(), paths.as_slice());
        } else {
            prop_assert!(cascader.selected_paths().is_empty());
        }
    }
}
