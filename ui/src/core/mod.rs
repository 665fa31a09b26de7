pub mod contact;
pub mod embed;
pub mod platform;
pub mod site;
pub mod storage;

use serde::Serialize;
use tracing::warn;

/// Serialize `value` to a JSON string. Failures are logged and yield `None`.
pub fn encode_json<T: Serialize + ?Sized>(value: &T, what: &'static str) -> Option<String> {
    serde_json::to_string(value)
        .map_err(|err| warn!(%err, what, "could not encode json"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn encodes_plain_values() {
        assert_eq!(encode_json(&["a", "b"], "pair").as_deref(), Some(r#"["a","b"]"#));
    }

    #[test]
    fn unencodable_value_yields_none() {
        let mut grid = BTreeMap::new();
        grid.insert((0u8, 1u8), "cell");
        assert_eq!(encode_json(&grid, "grid"), None);
    }
}
