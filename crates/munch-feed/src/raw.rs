//! Loosely typed upstream restaurant records.
//!
//! The remote API is not consistent about field names (`Name` vs `name`,
//! `avgrating` vs `rating`, `distance` vs `distance_km`) or value types
//! (numbers arrive as strings and vice versa). [`RawRestaurant`] keeps the
//! original JSON object and answers "first present value among these keys",
//! where present means JSON-truthy: not `null`, `false`, `0`, or `""`.

use munch_core::leading_number;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRestaurant {
    fields: Map<String, Value>,
}

/// JSON truthiness: `null`, `false`, `0`, `NaN`, and `""` are absent.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl RawRestaurant {
    /// Wraps a JSON value. Non-object values become an empty record.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// First truthy value among `keys`, in order.
    #[must_use]
    pub fn first_present(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|k| self.fields.get(*k))
            .find(|v| is_truthy(v))
    }

    /// First truthy value rendered as text. Numbers are formatted, other
    /// non-string values are skipped.
    #[must_use]
    pub fn text(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|k| self.fields.get(*k))
            .filter(|v| is_truthy(v))
            .find_map(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    }

    /// First truthy value that reads as a finite number. Strings contribute
    /// their leading number, so `"0.5 mi"` is `0.5`.
    #[must_use]
    pub fn number(&self, keys: &[&str]) -> Option<f64> {
        keys.iter()
            .filter_map(|k| self.fields.get(*k))
            .filter(|v| is_truthy(v))
            .find_map(|v| match v {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => leading_number(s),
                _ => None,
            })
            .filter(|f| f.is_finite())
    }

    /// First truthy value that is a non-negative whole number.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn count(&self, keys: &[&str]) -> Option<u32> {
        self.number(keys)
            .filter(|f| *f >= 0.0)
            .and_then(|f| u32::try_from(f.trunc() as u64).ok())
    }

    /// The record's raw `isOpen` flag, if any.
    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.fields.get(key).and_then(Value::as_bool)
    }

    /// `true` when any of `keys` is truthy.
    #[must_use]
    pub fn any_truthy(&self, keys: &[&str]) -> bool {
        self.first_present(keys).is_some()
    }

    /// Cuisine tags from `restaurantType`, which arrives either as plain
    /// strings or as objects carrying `restaurentType` / `restaurantType` / `name`.
    #[must_use]
    pub fn type_tags(&self) -> Vec<String> {
        let Some(Value::Array(entries)) = self.fields.get("restaurantType") else {
            return Vec::new();
        };
        entries
            .iter()
            .filter_map(|entry| match entry {
                Value::String(s) => Some(s.clone()),
                Value::Object(obj) => ["restaurentType", "restaurantType", "name"]
                    .iter()
                    .filter_map(|k| obj.get(*k))
                    .find_map(|v| v.as_str().filter(|s| !s.is_empty()))
                    .map(str::to_owned),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: Value) -> RawRestaurant {
        RawRestaurant::from_value(value)
    }

    #[test]
    fn zero_and_empty_string_are_absent() {
        let r = raw(json!({ "distance": 0, "distance_km": "", "distanceMiles": 4.2 }));
        assert_eq!(r.number(&["distance", "distance_km", "distanceMiles"]), Some(4.2));
    }

    #[test]
    fn numeric_strings_parse() {
        let r = raw(json!({ "reviewCount": "12" }));
        assert_eq!(r.count(&["reviewCount"]), Some(12));
    }

    #[test]
    fn unparseable_string_is_not_a_number() {
        let r = raw(json!({ "distance": "near" }));
        assert_eq!(r.number(&["distance"]), None);
    }

    #[test]
    fn unit_suffixed_strings_keep_their_number() {
        let r = raw(json!({ "distance": "0.5 mi", "reviewCount": "37 reviews" }));
        assert_eq!(r.number(&["distance"]), Some(0.5));
        assert_eq!(r.count(&["reviewCount"]), Some(37));
    }

    #[test]
    fn text_formats_numbers() {
        let r = raw(json!({ "rating": 4.5 }));
        assert_eq!(r.text(&["avgrating", "rating"]).as_deref(), Some("4.5"));
    }

    #[test]
    fn type_tags_accept_objects_and_strings() {
        let r = raw(json!({
            "restaurantType": [
                { "restaurentType": "Thai" },
                { "name": "Noodles" },
                "Vegan",
                { "other": 1 }
            ]
        }));
        assert_eq!(r.type_tags(), vec!["Thai", "Noodles", "Vegan"]);
    }

    #[test]
    fn non_object_is_empty() {
        let r = raw(json!(42));
        assert_eq!(r.text(&["Name"]), None);
        assert!(r.type_tags().is_empty());
    }
}
