//! Hierarchical settings: built-in defaults overlaid with command-line values.

use serde_json::{json, Map, Value};

/// A read-only tree of settings addressed by path segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    settings: Value,
}

impl Default for Settings {
    fn default() -> Self {
        Self { settings: Value::Object(Map::new()) }
    }
}

impl Settings {
    pub fn new(settings: Value) -> Self {
        Self { settings }
    }

    /// Looks up a nested value. Returns an owned copy; `None` if any segment is missing.
    pub fn get(&self, path: &[&str]) -> Option<Value> {
        path.iter()
            .try_fold(&self.settings, |node, key| node.as_object()?.get(*key))
            .filter(|value| !value.is_null())
            .cloned()
    }

    /// Convenience lookup for string values.
    pub fn get_str(&self, path: &[&str]) -> Option<String> {
        self.get(path).and_then(|value| value.as_str().map(str::to_string))
    }

    pub fn get_bool(&self, path: &[&str]) -> Option<bool> {
        self.get(path).and_then(|value| value.as_bool())
    }

    /// Overlays `other` on top of `self`. Objects merge key by key; nulls never overwrite.
    pub fn merge(&self, other: &Settings) -> Settings {
        let mut merged = self.settings.clone();
        merge_into(&mut merged, &other.settings);
        Settings::new(merged)
    }
}

fn merge_into(target: &mut Value, source: &Value) {
    let Value::Object(source) = source else {
        return;
    };
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    let Value::Object(target) = target else {
        return;
    };

    for (key, value) in source {
        match value {
            Value::Null => {}
            Value::Object(_) => {
                let slot = target.entry(key.clone()).or_insert(Value::Null);
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                merge_into(slot, value);
            }
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Effective configuration of one invocation.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub settings: Settings,
}

impl Configuration {
    /// Settings that apply when nothing else is given.
    pub fn defaults() -> Settings {
        Settings::new(json!({
            "template": crate::constants::DEFAULT_TEMPLATE,
            "canUseNetwork": true,
            "generateOnly": false,
        }))
    }

    pub fn new(command_line: Settings) -> Self {
        Self { settings: Self::defaults().merge(&command_line) }
    }
}
