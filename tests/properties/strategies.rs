// SPDX-License-Identifier: MPL-2.0

//! Generators shared by the property tests.

use cascade::cascader::{Cascader, CascaderOption, OptionRef};
use proptest::prelude::*;

fn node() -> impl Strategy<Value = CascaderOption> {
    ("[a-z]{1,6}", 0u32..1000, prop::bool::weighted(0.15)).prop_map(|(label, n, disabled)| {
        CascaderOption::leaf(label.clone(), format!("{label}-{n}")).disabled(disabled)
    })
}

/// Option trees up to four levels deep. Branches always have children.
pub fn tree() -> impl Strategy<Value = Vec<CascaderOption>> {
    let option = node().prop_recursive(4, 48, 4, |inner| {
        (node(), prop::collection::vec(inner, 1..4))
            .prop_map(|(option, children)| option.with_children(children))
    });
    prop::collection::vec(option, 1..5)
}

/// Raw click coordinates, folded onto visible columns by [`visible_target`].
pub fn clicks() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..8, 0usize..8), 0..24)
}

/// Maps raw coordinates onto an option in a visible column.
pub fn visible_target(cascader: &Cascader, level: usize, index: usize) -> OptionRef {
    let menus = cascader.menus();
    let menu = &menus[level % menus.len()];
    cascader.option_ref(menu.level, index % menu.options.len())
}
