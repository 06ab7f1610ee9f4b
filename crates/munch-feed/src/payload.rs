//! Classification of restaurant-list responses.
//!
//! The restaurant endpoint has been observed to answer with
//! `{"success": true, "data": [...]}`, with `{"data": [...]}`, or with a bare
//! array. A response is classified once, here, and every caller works with
//! the resulting [`ListingPayload`] rather than sniffing the JSON again.

use serde_json::Value;

use crate::raw::{is_truthy, RawRestaurant};

#[derive(Debug, Clone, PartialEq)]
pub enum ListingPayload {
    /// `{"success": true, "data": [...]}`.
    Envelope { records: Vec<RawRestaurant> },
    /// `{"data": [...]}` with a missing or falsy `success`.
    Data(Vec<RawRestaurant>),
    /// A top-level JSON array.
    Bare(Vec<RawRestaurant>),
    /// Anything else: no restaurant collection could be found.
    Unrecognized,
}

impl ListingPayload {
    #[must_use]
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Bare(to_records(items)),
            Value::Object(mut obj) => {
                let success = obj.get("success").is_some_and(is_truthy);
                match obj.remove("data") {
                    Some(Value::Array(items)) if success => Self::Envelope {
                        records: to_records(items),
                    },
                    Some(Value::Array(items)) => Self::Data(to_records(items)),
                    _ => Self::Unrecognized,
                }
            }
            _ => Self::Unrecognized,
        }
    }

    /// `true` only for the `{"success": true, ...}` envelope.
    #[must_use]
    pub fn is_success_envelope(&self) -> bool {
        matches!(self, Self::Envelope { .. })
    }

    /// The ordered raw records; empty for [`ListingPayload::Unrecognized`].
    #[must_use]
    pub fn into_records(self) -> Vec<RawRestaurant> {
        match self {
            Self::Envelope { records } | Self::Data(records) | Self::Bare(records) => records,
            Self::Unrecognized => Vec::new(),
        }
    }
}

fn to_records(items: Vec<Value>) -> Vec<RawRestaurant> {
    items.into_iter().map(RawRestaurant::from_value).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_envelope_is_classified() {
        let p = ListingPayload::classify(json!({ "success": true, "data": [{ "Name": "A" }] }));
        assert!(p.is_success_envelope());
        assert_eq!(p.into_records().len(), 1);
    }

    #[test]
    fn data_without_success_still_yields_records() {
        let p = ListingPayload::classify(json!({ "success": false, "data": [{}, {}] }));
        assert!(matches!(p, ListingPayload::Data(ref r) if r.len() == 2));
    }

    #[test]
    fn bare_array_yields_records() {
        let p = ListingPayload::classify(json!([{ "name": "A" }, { "name": "B" }, { "name": "C" }]));
        assert!(matches!(p, ListingPayload::Bare(_)));
        assert_eq!(p.into_records().len(), 3);
    }

    #[test]
    fn malformed_shapes_yield_empty() {
        for value in [
            json!({ "success": true, "data": { "rows": [] } }),
            json!({ "restaurants": [] }),
            json!("oops"),
            json!(null),
            json!(7),
        ] {
            let p = ListingPayload::classify(value);
            assert_eq!(p, ListingPayload::Unrecognized);
            assert!(p.into_records().is_empty());
        }
    }
}
