//! # Canonical Payload Encoding
//!
//! The digest of a block covers its payload, so two structurally equal
//! payloads must encode to byte-identical strings no matter how they were
//! built. This module is that guarantee — the serialization boundary of
//! the ledger.
//!
//! ## Why this is not incidental
//!
//! Most languages stringify structured data in insertion order, which means
//! `{a: 1, b: 2}` and `{b: 2, a: 1}` can hash differently despite being the
//! same logical content. Strata refuses to inherit that footgun: payloads
//! are normalized into [`serde_json::Value`], whose object representation
//! is a `BTreeMap` (we do not enable the `preserve_order` feature), so
//! object keys are always emitted in sorted order. The tests at the bottom
//! pin this property; if a future dependency bump breaks it, they fail.
//!
//! Numbers, strings, and arrays already have exactly one JSON encoding
//! each under `serde_json`'s compact writer, so sorted keys are the only
//! degree of freedom to eliminate.

use serde::Serialize;
use serde_json::Value;

use crate::error::LedgerError;

/// Normalize an arbitrary serializable payload into a [`Value`].
///
/// This is the hardened admission check: anything that cannot be expressed
/// as JSON (maps with non-string keys, types with failing `Serialize`
/// impls) is rejected here, before it ever reaches a block, rather than
/// surfacing as a hashing surprise later.
///
/// # Errors
///
/// Returns [`LedgerError::PayloadSerialization`] when the payload has no
/// JSON representation.
pub fn to_canonical_value<T: Serialize>(payload: T) -> Result<Value, LedgerError> {
    serde_json::to_value(payload).map_err(LedgerError::PayloadSerialization)
}

/// Render a payload [`Value`] as its canonical string form.
///
/// Compact (no whitespace), object keys in sorted order. Structurally
/// equal values produce byte-identical output — the property the entire
/// digest scheme stands on.
pub fn canonical_json(value: &Value) -> String {
    // `Value`'s Display is the compact writer; with sorted-key maps this
    // is the canonical form. Serializing a Value cannot fail.
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_insertion_order_is_irrelevant() {
        // Build the same object two ways; the canonical form must agree.
        let mut forward = serde_json::Map::new();
        forward.insert("amount".to_string(), json!(10));
        forward.insert("currency".to_string(), json!("STR"));

        let mut backward = serde_json::Map::new();
        backward.insert("currency".to_string(), json!("STR"));
        backward.insert("amount".to_string(), json!(10));

        assert_eq!(
            canonical_json(&Value::Object(forward)),
            canonical_json(&Value::Object(backward)),
        );
    }

    #[test]
    fn keys_are_emitted_sorted() {
        let value = json!({"zebra": 1, "aardvark": 2, "mongoose": 3});
        assert_eq!(
            canonical_json(&value),
            r#"{"aardvark":2,"mongoose":3,"zebra":1}"#
        );
    }

    #[test]
    fn canonical_form_is_compact() {
        let value = json!({"amount": 10});
        assert_eq!(canonical_json(&value), r#"{"amount":10}"#);
    }

    #[test]
    fn nested_objects_are_sorted_too() {
        let value = json!({"outer": {"z": 1, "a": 2}});
        assert_eq!(canonical_json(&value), r#"{"outer":{"a":2,"z":1}}"#);
    }

    #[test]
    fn plain_strings_and_numbers_pass_through() {
        assert_eq!(canonical_json(&json!("Genesis Block")), r#""Genesis Block""#);
        assert_eq!(canonical_json(&json!(42)), "42");
    }

    #[test]
    fn serializable_payloads_are_admitted() {
        #[derive(Serialize)]
        struct Transfer {
            amount: u64,
        }
        let value = to_canonical_value(Transfer { amount: 10 }).unwrap();
        assert_eq!(value, json!({"amount": 10}));
    }

    #[test]
    fn non_string_map_keys_are_rejected() {
        use std::collections::BTreeMap;
        // JSON object keys must be strings; a map keyed by byte arrays has
        // no JSON representation and must be refused at the boundary.
        let mut map: BTreeMap<[u8; 2], u64> = BTreeMap::new();
        map.insert([1, 2], 10);
        assert!(to_canonical_value(&map).is_err());
    }
}
