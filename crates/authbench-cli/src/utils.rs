use serde_json::{Map, Value};

/// Drops unset CLI values so they don't shadow lower figment layers.
/// Nulls go away, and so do objects left empty after pruning.
pub fn prune_unset(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(map) => {
            let pruned: Map<String, Value> = map
                .into_iter()
                .filter_map(|(k, v)| prune_unset(v).map(|v| (k, v)))
                .collect();
            (!pruned.is_empty()).then_some(Value::Object(pruned))
        }
        other => Some(other),
    }
}
