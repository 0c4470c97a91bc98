// SPDX-License-Identifier: MPL-2.0

//! Property tests for column navigation.

use proptest::prelude::*;

use cascade::cascader::{Cascader, CascaderError, Outcome};

use super::strategies::{clicks, tree, visible_target};

/// Checks that the visible columns are exactly the children of the chosen branches.
fn assert_columns_follow_path(cascader: &Cascader) -> Result<(), TestCaseError> {
    let menus = cascader.menus();
    let path = cascader.current_path();

    prop_assert!(std::ptr::eq(menus[0].options, cascader.options()));
    for (menu, parent) in menus.iter().skip(1).zip(&path) {
        prop_assert!(parent.is_branch());
        prop_assert!(std::ptr::eq(menu.options, parent.children.as_slice()));
    }

    let expected = match path.last() {
        Some(last) if last.is_leaf() => path.len(),
        _ => path.len() + 1,
    };
    prop_assert_eq!(menus.len(), expected);

    for (level, menu) in menus.iter().enumerate() {
        prop_assert_eq!(menu.level, level);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after any click sequence, column N+1 holds the children of the choice in column N.
    #[test]
    fn property_columns_follow_the_chosen_path(
        options in tree(),
        clicks in clicks(),
    ) {
        let mut cascader = Cascader::new(options);
        assert_columns_follow_path(&cascader)?;

        for (level, index) in clicks {
            let target = visible_target(&cascader, level, index);
            cascader.activate(target);
            assert_columns_follow_path(&cascader)?;
        }
    }

    /// PROPERTY: clicking a disabled option changes neither navigation nor selection.
    #[test]
    fn property_disabled_options_are_inert(
        options in tree(),
        clicks in clicks(),
    ) {
        let mut cascader = Cascader::new(options);

        for (level, index) in clicks {
            let target = visible_target(&cascader, level, index);
            let disabled = cascader.resolve(target).map(|o| o.disabled).unwrap_or(false);
            let navigation = cascader.navigation().clone();
            let snapshot = cascader.snapshot();

            let outcome = cascader.activate(target);

            if disabled {
                prop_assert!(matches!(outcome, Outcome::Ignored(CascaderError::Disabled(_))));
                prop_assert_eq!(cascader.navigation(), &navigation);
                prop_assert_eq!(cascader.snapshot(), snapshot);
            }
        }
    }

    /// PROPERTY: only enabled options ever appear on the navigation path.
    #[test]
    fn property_path_holds_only_enabled_options(
        options in tree(),
        clicks in clicks(),
    ) {
        let mut cascader = Cascader::new(options);
        for (level, index) in clicks {
            let target = visible_target(&cascader, level, index);
            cascader.activate(target);
        }
        prop_assert!(cascader.current_path().iter().all(|option| !option.disabled));
    }

    /// PROPERTY: handles taken before a tree replacement are always rejected.
    #[test]
    fn property_stale_handles_are_rejected(
        options in tree(),
        level in 0usize..8,
        index in 0usize..8,
    ) {
        let mut cascader = Cascader::new(options.clone());
        let target = visible_target(&cascader, level, index);
        cascader.set_options(options);

        prop_assert_eq!(
            cascader.activate(target),
            Outcome::Ignored(CascaderError::StaleReference)
        );
        prop_assert_eq!(cascader.navigation().depth(), 0);
    }

    /// PROPERTY: arbitrary handles never panic.
    #[test]
    fn property_arbitrary_handles_never_panic(
        options in tree(),
        level in 0usize..16,
        index in 0usize..16,
    ) {
        let mut cascader = Cascader::new(options);
        let target = cascader.option_ref(level, index);
        let _ = cascader.activate(target);
        let _ = cascader.expand(target);
        let _ = cascader.select_leaf(target);
    }
}
