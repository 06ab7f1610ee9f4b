//! JSON request bodies for the upstream API.

use serde::Serialize;

/// Where and for whom the feed is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub latitude: String,
    pub longitude: String,
    pub customer_id: u64,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self {
            latitude: "12.9234082".to_owned(),
            longitude: "77.6492223".to_owned(),
            customer_id: 172,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RestaurantsRequest<'a> {
    pub latitude: &'a str,
    pub longitude: &'a str,
    pub customer_id: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MenuRequest<'a> {
    pub restaurant_id: serde_json::Value,
    pub latitude: &'a str,
    pub longitude: &'a str,
    pub customer_id: u64,
}

/// Listing ids are numeric upstream; send them back as numbers when they parse.
pub(crate) fn restaurant_id_value(id: &str) -> serde_json::Value {
    id.parse::<u64>()
        .map_or_else(|_| serde_json::Value::from(id), serde_json::Value::from)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MenuSearchRequest<'a> {
    pub restaurant_id: u64,
    pub is_available: u8,
    pub search_term: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub phone: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateCustomerRequest<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "DOB")]
    pub dob: &'a str,
    #[serde(rename = "Email")]
    pub email: &'a str,
    pub phone: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restaurants_request_uses_camel_case() {
        let ctx = RequestContext::default();
        let body = serde_json::to_value(RestaurantsRequest {
            latitude: &ctx.latitude,
            longitude: &ctx.longitude,
            customer_id: ctx.customer_id,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "latitude": "12.9234082",
                "longitude": "77.6492223",
                "customerId": 172
            })
        );
    }

    #[test]
    fn numeric_ids_are_sent_as_numbers() {
        assert_eq!(restaurant_id_value("20"), serde_json::json!(20));
        assert_eq!(restaurant_id_value("abc"), serde_json::json!("abc"));
    }

    #[test]
    fn create_customer_request_uses_upstream_field_names() {
        let body = serde_json::to_value(CreateCustomerRequest {
            name: "Asha",
            dob: "1990-01-01",
            email: "",
            phone: "5550100",
        })
        .unwrap();
        assert_eq!(body["Name"], "Asha");
        assert_eq!(body["DOB"], "1990-01-01");
        assert_eq!(body["Email"], "");
        assert_eq!(body["phone"], "5550100");
    }
}
