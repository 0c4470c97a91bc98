// SPDX-License-Identifier: MPL-2.0

//! Option tree nodes for the cascader.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifies an option independently of where it lives in memory.
///
/// This is the option's `value` when one is set, and its label otherwise.
/// Keys are what a selection stores, so a rebuilt tree keeps matching
/// selections made against the old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionKey(Value);

impl OptionKey {
    /// Creates a key from any JSON value.
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// Returns the underlying value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Returns the key as a string slice if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            Value::Null => Ok(()),
            other => write!(f, "{}", other),
        }
    }
}

impl From<&str> for OptionKey {
    fn from(s: &str) -> Self {
        Self(Value::String(s.to_string()))
    }
}

impl From<String> for OptionKey {
    fn from(s: String) -> Self {
        Self(Value::String(s))
    }
}

impl From<i64> for OptionKey {
    fn from(n: i64) -> Self {
        Self(Value::from(n))
    }
}

impl From<Value> for OptionKey {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A node in the option tree.
///
/// A node without children is a leaf and is the only kind of node that can
/// be selected. Nodes with children can only be navigated into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascaderOption {
    /// Text shown for the option.
    pub label: String,
    /// Value stored in a selection. Falls back to `label` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Disabled options ignore every interaction.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    /// Child options, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CascaderOption>,
}

impl CascaderOption {
    /// Creates an enabled leaf with only a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            disabled: false,
            children: Vec::new(),
        }
    }

    /// Creates an enabled leaf with a value.
    pub fn leaf(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(label).with_value(value)
    }

    /// Creates an enabled node with a value and children.
    pub fn branch(
        label: impl Into<String>,
        value: impl Into<Value>,
        children: impl IntoIterator<Item = CascaderOption>,
    ) -> Self {
        Self::new(label).with_value(value).with_children(children)
    }

    /// Sets the value.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Replaces the children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = CascaderOption>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Marks the option as disabled or enabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Returns the selection key of this option.
    pub fn key(&self) -> OptionKey {
        match self.explicit_value() {
            Some(value) => OptionKey(value.clone()),
            None => OptionKey(Value::String(self.label.clone())),
        }
    }

    /// Returns true if `key` identifies this option.
    pub fn matches(&self, key: &OptionKey) -> bool {
        match self.explicit_value() {
            Some(value) => value == key.as_value(),
            None => key.as_str() == Some(self.label.as_str()),
        }
    }

    /// A null value counts as no value.
    fn explicit_value(&self) -> Option<&Value> {
        self.value.as_ref().filter(|value| !value.is_null())
    }

    /// Returns true if this option has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if this option has children.
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }
}

impl fmt::Display for CascaderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_falls_back_to_label() {
        let option = CascaderOption::new("Guide");
        assert_eq!(option.key(), OptionKey::from("Guide"));
        assert!(option.matches(&OptionKey::from("Guide")));

        let option = CascaderOption::leaf("Guide", "guide");
        assert_eq!(option.key(), OptionKey::from("guide"));
        assert!(!option.matches(&OptionKey::from("Guide")));
    }

    #[test]
    fn null_value_falls_back_to_label() {
        let option = CascaderOption::new("Guide").with_value(Value::Null);
        assert_eq!(option.key(), OptionKey::from("Guide"));
        assert!(option.matches(&OptionKey::from("Guide")));
        assert!(!option.matches(&OptionKey::new(Value::Null)));

        let options: Vec<CascaderOption> =
            serde_json::from_str(r#"[{"label": "Plain", "value": null}]"#).unwrap();
        assert_eq!(options[0].key(), OptionKey::from("Plain"));
    }

    #[test]
    fn non_string_values_compare_by_value() {
        let option = CascaderOption::leaf("Seven", 7);
        assert!(option.matches(&OptionKey::from(7)));
        assert!(!option.matches(&OptionKey::from("7")));
        assert_eq!(option.key().to_string(), "7");
    }

    #[test]
    fn leaf_and_branch() {
        let leaf = CascaderOption::leaf("x", "x");
        let branch = CascaderOption::branch("a", "a", [leaf.clone()]);
        assert!(leaf.is_leaf());
        assert!(branch.is_branch());
        assert!(!branch.is_leaf());
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"[
            {"label": "A", "value": "a", "children": [
                {"label": "a1", "disabled": true},
                {"label": "a2", "value": 2}
            ]}
        ]"#;
        let options: Vec<CascaderOption> = serde_json::from_str(json).unwrap();

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].children.len(), 2);
        assert!(options[0].children[0].disabled);
        assert_eq!(options[0].children[0].value, None);
        assert_eq!(options[0].children[1].key(), OptionKey::from(2));
        assert!(!options[0].disabled);
    }
}
