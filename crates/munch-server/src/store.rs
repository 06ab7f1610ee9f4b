//! In-memory data behind the mock API.
//!
//! Handlers reach the data only through [`MockStore`], so the seeded
//! collections live in one injected value instead of process-wide globals.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Body of a create or update request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostInput {
    pub title: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Catalogue entry served by `GET /api/restaurants`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub rating: f64,
    pub category: String,
    pub image: String,
}

/// Surplus-bag listing in the upstream wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurplusListing {
    pub id: u64,
    #[serde(rename = "Name")]
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub image_url: String,
    pub preparation_time: String,
    #[serde(rename = "avgrating")]
    pub avg_rating: String,
    pub review_count: u32,
    pub distance: f64,
    pub description: String,
    pub address: String,
    pub restaurant_status_id: u32,
    pub restaurant_status: String,
    pub favourite: Vec<Value>,
    pub restaurant_offers: Vec<Value>,
    pub munch_magic_admin_offer: Vec<Value>,
    pub restaurant_type: Vec<Value>,
    pub restaurant_timing: Vec<Value>,
    pub restaurant_operation_status: bool,
    pub restaurant_opening_status: bool,
}

#[async_trait]
pub trait MockStore: Send + Sync {
    async fn list_posts(&self) -> Vec<Post>;

    async fn create_post(&self, input: PostInput) -> Post;

    /// Replaces title and body; `None` when no post has `id`.
    async fn update_post(&self, id: u64, input: PostInput) -> Option<Post>;

    /// `false` when no post has `id`.
    async fn delete_post(&self, id: u64) -> bool;

    async fn list_users(&self) -> Vec<User>;

    async fn find_user(&self, username: &str, password: &str) -> Option<User>;

    async fn list_restaurants(&self) -> Vec<Restaurant>;

    async fn list_surplus(&self) -> Vec<SurplusListing>;
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    posts: RwLock<Vec<Post>>,
    users: Vec<User>,
    restaurants: Vec<Restaurant>,
    surplus: Vec<SurplusListing>,
}

impl InMemoryStore {
    /// A store holding the demo posts, users, catalogue, and surplus listings.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            posts: RwLock::new(seed_posts()),
            users: seed_users(),
            restaurants: seed_restaurants(),
            surplus: seed_surplus(),
        }
    }
}

#[async_trait]
impl MockStore for InMemoryStore {
    async fn list_posts(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    async fn create_post(&self, input: PostInput) -> Post {
        let mut posts = self.posts.write().await;
        // Next id after the highest live one, so ids stay unique after deletes.
        let id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let post = Post {
            id,
            title: input.title,
            body: input.body,
        };
        posts.push(post.clone());
        post
    }

    async fn update_post(&self, id: u64, input: PostInput) -> Option<Post> {
        let mut posts = self.posts.write().await;
        let post = posts.iter_mut().find(|p| p.id == id)?;
        post.title = input.title;
        post.body = input.body;
        Some(post.clone())
    }

    async fn delete_post(&self, id: u64) -> bool {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        posts.len() != before
    }

    async fn list_users(&self) -> Vec<User> {
        self.users.clone()
    }

    async fn find_user(&self, username: &str, password: &str) -> Option<User> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned()
    }

    async fn list_restaurants(&self) -> Vec<Restaurant> {
        self.restaurants.clone()
    }

    async fn list_surplus(&self) -> Vec<SurplusListing> {
        self.surplus.clone()
    }
}

fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: Some("Welcome Post".into()),
            body: Some("This is the first post".into()),
        },
        Post {
            id: 2,
            title: Some("Second Post".into()),
            body: Some("This is the second post".into()),
        },
    ]
}

fn seed_users() -> Vec<User> {
    [
        (1, "admin", "password", "demo-token-123"),
        (2, "user", "123456", "demo-token-456"),
    ]
    .into_iter()
    .map(|(id, username, password, token)| User {
        id,
        username: username.into(),
        password: password.into(),
        token: token.into(),
    })
    .collect()
}

fn seed_restaurants() -> Vec<Restaurant> {
    const CATALOGUE: [(&str, &str, f64, &str, &str); 10] = [
        ("McDonald's", "Fast food restaurant serving burgers, fries, and more", 4.2, "Fast Food", "https://i.ibb.co/4fJ8K2x/mcdonalds.jpg"),
        ("Pizza Hut", "Pizza delivery and dine-in restaurant", 4.5, "Pizza", "https://i.ibb.co/5K8Q9Lx/pizzahut.jpg"),
        ("KFC", "Fried chicken and sides restaurant", 4.1, "Fast Food", "https://i.ibb.co/3yJ7K9x/kfc.jpg"),
        ("Subway", "Fresh sandwiches and salads", 4.3, "Sandwiches", "https://i.ibb.co/2vJ8K2x/subway.jpg"),
        ("Starbucks", "Coffee and light snacks", 4.4, "Coffee", "https://i.ibb.co/4fJ8K2x/starbucks.jpg"),
        ("Burger King", "Flame-grilled burgers and fries", 4.0, "Fast Food", "https://i.ibb.co/5K8Q9Lx/burgerking.jpg"),
        ("Taco Bell", "Mexican-inspired fast food", 3.9, "Mexican", "https://i.ibb.co/3yJ7K9x/tacobell.jpg"),
        ("Domino's", "Pizza delivery and carryout", 4.2, "Pizza", "https://i.ibb.co/2vJ8K2x/dominos.jpg"),
        ("Chipotle", "Mexican grill with fresh ingredients", 4.6, "Mexican", "https://i.ibb.co/4fJ8K2x/chipotle.jpg"),
        ("Panera Bread", "Bakery-cafe with soups, salads, and sandwiches", 4.3, "Bakery", "https://i.ibb.co/5K8Q9Lx/panera.jpg"),
    ];

    CATALOGUE
        .iter()
        .enumerate()
        .map(|(i, (name, description, rating, category, image))| Restaurant {
            id: (i + 1).to_string(),
            name: (*name).to_owned(),
            description: (*description).to_owned(),
            rating: *rating,
            category: (*category).to_owned(),
            image: (*image).to_owned(),
        })
        .collect()
}

struct SurplusSeed {
    id: u64,
    name: &'static str,
    latitude: &'static str,
    longitude: &'static str,
    image_url: &'static str,
    preparation_time: &'static str,
    avg_rating: &'static str,
    review_count: u32,
    distance: f64,
    description: &'static str,
    address: &'static str,
}

const SURPLUS: [SurplusSeed; 4] = [
    SurplusSeed {
        id: 20,
        name: "Wingstop",
        latitude: "12.9135943",
        longitude: "77.6345245",
        image_url: "https://munch-n-give-app.s3.amazonaws.com/Restaurant/Dominos.png",
        preparation_time: "15-20 min",
        avg_rating: "4.5",
        review_count: 138,
        distance: 1.2,
        description: "Wing restaurant chain serving bone-in & boneless wings plus sides",
        address: "123 Wings Street, Downtown",
    },
    SurplusSeed {
        id: 21,
        name: "Barrique Version",
        latitude: "12.9230384",
        longitude: "77.64426",
        image_url: "https://munch-n-give-app.s3.amazonaws.com/Restaurant/Mustardfoodcourt.png",
        preparation_time: "8-10 min",
        avg_rating: "4.2",
        review_count: 127,
        distance: 0.8,
        description: "BBQ restaurant with smoky flavors and grilled specialties",
        address: "456 BBQ Lane, Midtown",
    },
    SurplusSeed {
        id: 22,
        name: "Pizza Palace",
        latitude: "12.9230384",
        longitude: "77.64426",
        image_url: "https://munch-n-give-app.s3.amazonaws.com/last.png",
        preparation_time: "20-25 min",
        avg_rating: "4.3",
        review_count: 95,
        distance: 1.5,
        description: "Authentic Italian pizza with fresh ingredients",
        address: "789 Pizza Avenue, Uptown",
    },
    SurplusSeed {
        id: 23,
        name: "Burger Joint",
        latitude: "12.9230384",
        longitude: "77.64426",
        image_url: "https://munch-n-give-app.s3.amazonaws.com/Restaurant/Dominos.png",
        preparation_time: "12-18 min",
        avg_rating: "4.1",
        review_count: 82,
        distance: 1.8,
        description: "Gourmet burgers with premium ingredients and fresh fries",
        address: "321 Burger Street, West Side",
    },
];

fn seed_surplus() -> Vec<SurplusListing> {
    SURPLUS
        .iter()
        .map(|s| SurplusListing {
            id: s.id,
            name: s.name.to_owned(),
            latitude: s.latitude.to_owned(),
            longitude: s.longitude.to_owned(),
            image_url: s.image_url.to_owned(),
            preparation_time: s.preparation_time.to_owned(),
            avg_rating: s.avg_rating.to_owned(),
            review_count: s.review_count,
            distance: s.distance,
            description: s.description.to_owned(),
            address: s.address.to_owned(),
            restaurant_status_id: 1,
            restaurant_status: "Active".to_owned(),
            favourite: Vec::new(),
            restaurant_offers: Vec::new(),
            munch_magic_admin_offer: Vec::new(),
            restaurant_type: Vec::new(),
            restaurant_timing: Vec::new(),
            restaurant_operation_status: true,
            restaurant_opening_status: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, body: &str) -> PostInput {
        PostInput {
            title: Some(title.into()),
            body: Some(body.into()),
        }
    }

    #[tokio::test]
    async fn seeded_store_has_demo_collections() {
        let store = InMemoryStore::seeded();
        assert_eq!(store.list_posts().await.len(), 2);
        assert_eq!(store.list_users().await.len(), 2);
        assert_eq!(store.list_restaurants().await.len(), 10);
        let surplus = store.list_surplus().await;
        assert_eq!(surplus.len(), 4);
        assert_eq!(surplus[0].name, "Wingstop");
    }

    #[tokio::test]
    async fn created_ids_stay_unique_after_delete() {
        let store = InMemoryStore::seeded();
        assert!(store.delete_post(1).await);
        let post = store.create_post(input("Third", "x")).await;
        assert_eq!(post.id, 3);
        let ids: Vec<_> = store.list_posts().await.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_posts() {
        let store = InMemoryStore::seeded();
        assert!(store.update_post(99, input("a", "b")).await.is_none());
        assert!(!store.delete_post(99).await);

        let updated = store.update_post(2, input("Edited", "New body")).await.expect("post 2");
        assert_eq!(updated.title.as_deref(), Some("Edited"));
    }

    #[tokio::test]
    async fn find_user_requires_both_credentials_to_match() {
        let store = InMemoryStore::seeded();
        assert_eq!(
            store.find_user("admin", "password").await.map(|u| u.token),
            Some("demo-token-123".to_owned())
        );
        assert!(store.find_user("admin", "123456").await.is_none());
    }

    #[test]
    fn surplus_serializes_in_upstream_shape() {
        let json = serde_json::to_value(&seed_surplus()[1]).expect("serialize");
        assert_eq!(json["Name"], "Barrique Version");
        assert_eq!(json["avgrating"], "4.2");
        assert_eq!(json["imageUrl"], "https://munch-n-give-app.s3.amazonaws.com/Restaurant/Mustardfoodcourt.png");
        assert_eq!(json["reviewCount"], 127);
        assert_eq!(json["restaurantOpeningStatus"], true);
        assert!(json["restaurantType"].as_array().is_some_and(Vec::is_empty));
    }

    #[test]
    fn catalogue_uses_underscore_id() {
        let json = serde_json::to_value(&seed_restaurants()[0]).expect("serialize");
        assert_eq!(json["_id"], "1");
        assert_eq!(json["name"], "McDonald's");
    }
}
