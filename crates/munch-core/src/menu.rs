use serde::{Deserialize, Serialize};

/// One dish from a restaurant menu or a menu search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(default, alias = "id")]
    pub menu_id: Option<i64>,
    #[serde(default, alias = "Name", alias = "name")]
    pub menu_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Price as sent by the API (`"299"`, `"1.0000"`).
    #[serde(default, deserialize_with = "string_or_number")]
    pub amount: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// The first `data` entry of a `restaurantMenu` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantMenu {
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

pub const ALL_CATEGORIES: &str = "All";

impl RestaurantMenu {
    /// `"All"` followed by each distinct item category, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut out = vec![ALL_CATEGORIES.to_string()];
        for category in self.menu.iter().filter_map(|m| m.category.as_deref()) {
            if !out.iter().any(|c| c == category) {
                out.push(category.to_string());
            }
        }
        out
    }

    /// Items in `category`; `"All"` returns the whole menu.
    #[must_use]
    pub fn items_in(&self, category: &str) -> Vec<&MenuItem> {
        if category == ALL_CATEGORIES {
            return self.menu.iter().collect();
        }
        self.menu
            .iter()
            .filter(|m| m.category.as_deref() == Some(category))
            .collect()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
