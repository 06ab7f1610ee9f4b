//! Literal demo fixtures shown when the upstream API has nothing to offer.
//!
//! These values are not derived from anything; they exist so the feed is
//! never blank during development or an outage.

use munch_core::{MenuItem, RestaurantListing};

struct Fixture {
    id: u32,
    name: &'static str,
    image_url: &'static str,
    avg_rating: &'static str,
    preparation_time: &'static str,
    distance_miles: f64,
    bags_left: u32,
    pickup_time_window: &'static str,
    review_count: u32,
    restaurant_type: &'static str,
}

impl Fixture {
    fn listing(&self) -> RestaurantListing {
        RestaurantListing {
            id: self.id.to_string(),
            name: self.name.to_owned(),
            image_url: self.image_url.to_owned(),
            avg_rating: self.avg_rating.to_owned(),
            preparation_time: self.preparation_time.to_owned(),
            distance_miles: self.distance_miles,
            bags_left: self.bags_left,
            pickup_time_window: self.pickup_time_window.to_owned(),
            review_count: self.review_count,
            restaurant_type: if self.restaurant_type.is_empty() {
                Vec::new()
            } else {
                vec![self.restaurant_type.to_owned()]
            },
            description: None,
            address: None,
            has_deals: false,
            is_open: None,
        }
    }
}

const FEED_FALLBACK: [Fixture; 3] = [
    Fixture {
        id: 1,
        name: "zudio",
        image_url: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=300&h=200&fit=crop&auto=format&q=75",
        avg_rating: "4.5",
        preparation_time: "12-17 min",
        distance_miles: 2.5,
        bags_left: 3,
        pickup_time_window: "11:00 AM - 10:00 PM",
        review_count: 25,
        restaurant_type: "",
    },
    Fixture {
        id: 2,
        name: "Test Restaurant 2",
        image_url: "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=300&h=200&fit=crop&auto=format&q=75",
        avg_rating: "4.2",
        preparation_time: "15-20 min",
        distance_miles: 3.1,
        bags_left: 5,
        pickup_time_window: "12:00 PM - 11:00 PM",
        review_count: 18,
        restaurant_type: "",
    },
    Fixture {
        id: 3,
        name: "Test Restaurant 3",
        image_url: "https://images.unsplash.com/photo-1551218808-94e220e084d2?w=300&h=200&fit=crop&auto=format&q=75",
        avg_rating: "4.8",
        preparation_time: "8-12 min",
        distance_miles: 1.8,
        bags_left: 2,
        pickup_time_window: "10:00 AM - 9:00 PM",
        review_count: 42,
        restaurant_type: "",
    },
];

const PLACEHOLDER: [Fixture; 3] = [
    Fixture {
        id: 1,
        name: "zudio",
        image_url: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=300&h=200&fit=crop&auto=format&q=75",
        avg_rating: "4.5",
        preparation_time: "12-17 min",
        distance_miles: 2.5,
        bags_left: 3,
        pickup_time_window: "11:00 AM - 10:00 PM",
        review_count: 25,
        restaurant_type: "",
    },
    Fixture {
        id: 2,
        name: "Thai Garden",
        image_url: "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=300&h=200&fit=crop&auto=format&q=75",
        avg_rating: "4.2",
        preparation_time: "15-20 min",
        distance_miles: 3.1,
        bags_left: 5,
        pickup_time_window: "12:00 PM - 11:00 PM",
        review_count: 18,
        restaurant_type: "",
    },
    Fixture {
        id: 3,
        name: "American Diner",
        image_url: "https://images.unsplash.com/photo-1551218808-94e220e084d2?w=300&h=200&fit=crop&auto=format&q=75",
        avg_rating: "4.8",
        preparation_time: "8-12 min",
        distance_miles: 1.8,
        bags_left: 2,
        pickup_time_window: "10:00 AM - 9:00 PM",
        review_count: 42,
        restaurant_type: "",
    },
];

// Category fixtures carry no reviews.
const CATEGORY_FALLBACK: [Fixture; 5] = [
    Fixture {
        id: 1,
        name: "Burger Palace",
        image_url: "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=400&h=200&fit=crop",
        avg_rating: "4.5",
        preparation_time: "10-15 min",
        distance_miles: 2.5,
        bags_left: 3,
        pickup_time_window: "11:00 AM - 10:00 PM",
        review_count: 0,
        restaurant_type: "Burgers",
    },
    Fixture {
        id: 2,
        name: "Thai Garden",
        image_url: "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=400&h=200&fit=crop",
        avg_rating: "4.2",
        preparation_time: "15-20 min",
        distance_miles: 3.1,
        bags_left: 5,
        pickup_time_window: "12:00 PM - 11:00 PM",
        review_count: 0,
        restaurant_type: "Thai",
    },
    Fixture {
        id: 3,
        name: "American Diner",
        image_url: "https://images.unsplash.com/photo-1551218808-94e220e084d2?w=400&h=200&fit=crop",
        avg_rating: "4.8",
        preparation_time: "8-12 min",
        distance_miles: 1.8,
        bags_left: 2,
        pickup_time_window: "10:00 AM - 9:00 PM",
        review_count: 0,
        restaurant_type: "American",
    },
    Fixture {
        id: 4,
        name: "Fast Bites",
        image_url: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=400&h=200&fit=crop",
        avg_rating: "4.0",
        preparation_time: "5-10 min",
        distance_miles: 1.2,
        bags_left: 8,
        pickup_time_window: "9:00 AM - 11:00 PM",
        review_count: 0,
        restaurant_type: "Fast Food",
    },
    Fixture {
        id: 5,
        name: "Sandwich Central",
        image_url: "https://images.unsplash.com/photo-1539252554453-80ab65ce3586?w=400&h=200&fit=crop",
        avg_rating: "4.3",
        preparation_time: "12-18 min",
        distance_miles: 2.8,
        bags_left: 4,
        pickup_time_window: "10:30 AM - 9:30 PM",
        review_count: 0,
        restaurant_type: "Sandwiches",
    },
];

/// The feed shown whenever a load yields nothing.
#[must_use]
pub fn feed_fallback() -> Vec<RestaurantListing> {
    FEED_FALLBACK.iter().map(Fixture::listing).collect()
}

/// What a fresh feed shows before the first load completes.
#[must_use]
pub fn placeholder_feed() -> Vec<RestaurantListing> {
    PLACEHOLDER.iter().map(Fixture::listing).collect()
}

/// Development fixtures whose cuisine tag matches `category`.
#[must_use]
pub fn category_fallback(category: &str) -> Vec<RestaurantListing> {
    CATEGORY_FALLBACK
        .iter()
        .map(Fixture::listing)
        .filter(|l| l.has_type(category))
        .collect()
}

struct Dish {
    id: i64,
    name: &'static str,
    category: &'static str,
    description: &'static str,
    amount: &'static str,
    image_url: &'static str,
}

impl Dish {
    fn item(&self) -> MenuItem {
        MenuItem {
            menu_id: Some(self.id),
            menu_name: self.name.to_owned(),
            category: Some(self.category.to_owned()),
            description: Some(self.description.to_owned()),
            amount: Some(self.amount.to_owned()),
            image_url: Some(self.image_url.to_owned()),
        }
    }
}

const PIZZA_DISHES: [Dish; 3] = [
    Dish {
        id: 1,
        name: "Margherita Pizza",
        category: "Pizza",
        description: "Classic pizza with tomato, mozzarella, and fresh basil",
        amount: "299",
        image_url: "https://images.unsplash.com/photo-1574071318508-1cdbab80d002?w=300&h=300&fit=crop",
    },
    Dish {
        id: 2,
        name: "Pepperoni Pizza",
        category: "Pizza",
        description: "Pizza topped with pepperoni and cheese",
        amount: "349",
        image_url: "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=300&h=300&fit=crop",
    },
    Dish {
        id: 3,
        name: "Veggie Supreme Pizza",
        category: "Pizza",
        description: "Loaded with fresh vegetables and cheese",
        amount: "399",
        image_url: "https://images.unsplash.com/photo-1593560708920-61dd98c46a4e?w=300&h=300&fit=crop",
    },
];

const BURGER_DISHES: [Dish; 3] = [
    Dish {
        id: 4,
        name: "Classic Burger",
        category: "Burgers",
        description: "Juicy beef patty with lettuce, tomato, and cheese",
        amount: "249",
        image_url: "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=300&h=300&fit=crop",
    },
    Dish {
        id: 5,
        name: "Chicken Burger",
        category: "Burgers",
        description: "Grilled chicken breast with fresh vegetables",
        amount: "229",
        image_url: "https://images.unsplash.com/photo-1571091718767-18b5b1457add?w=300&h=300&fit=crop",
    },
    Dish {
        id: 6,
        name: "Veggie Burger",
        category: "Burgers",
        description: "Plant-based patty with fresh toppings",
        amount: "199",
        image_url: "https://images.unsplash.com/photo-1525059696034-4967a729002e?w=300&h=300&fit=crop",
    },
];

const HALAL_DISHES: [Dish; 2] = [
    Dish {
        id: 7,
        name: "Halal Chicken Shawarma",
        category: "Halal",
        description: "Authentic halal chicken shawarma with garlic sauce",
        amount: "179",
        image_url: "https://images.unsplash.com/photo-1529006557810-274b9b2fc783?w=300&h=300&fit=crop",
    },
    Dish {
        id: 8,
        name: "Halal Beef Kebab",
        category: "Halal",
        description: "Grilled halal beef kebab with rice",
        amount: "329",
        image_url: "https://images.unsplash.com/photo-1544025162-d76694265947?w=300&h=300&fit=crop",
    },
];

const HEALTHY_DISHES: [Dish; 2] = [
    Dish {
        id: 9,
        name: "Quinoa Salad Bowl",
        category: "Healthy",
        description: "Fresh quinoa with mixed vegetables and herbs",
        amount: "219",
        image_url: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=300&h=300&fit=crop",
    },
    Dish {
        id: 10,
        name: "Keto Avocado Bowl",
        category: "Keto",
        description: "Low-carb bowl with avocado, eggs, and greens",
        amount: "249",
        image_url: "https://images.unsplash.com/photo-1518843875459-f738682238a6?w=300&h=300&fit=crop",
    },
];

/// Keyword-driven menu results used when a search returns nothing.
#[must_use]
pub fn search_results(term: &str) -> Vec<MenuItem> {
    let t = term.to_lowercase();
    let groups: [(bool, &[Dish]); 4] = [
        (t.contains("piz"), &PIZZA_DISHES[..]),
        (t.contains("bur"), &BURGER_DISHES[..]),
        (t.contains("halal"), &HALAL_DISHES[..]),
        (t.contains("healthy") || t.contains("keto"), &HEALTHY_DISHES[..]),
    ];

    let items: Vec<MenuItem> = groups
        .iter()
        .filter(|(matched, _)| *matched)
        .flat_map(|(_, dishes)| dishes.iter().map(Dish::item))
        .collect();
    if !items.is_empty() {
        return items;
    }

    vec![
        MenuItem {
            menu_id: Some(11),
            menu_name: format!("{term} Special"),
            category: Some("Food".to_owned()),
            description: Some(format!("Delicious {term} prepared fresh for you")),
            amount: Some("199".to_owned()),
            image_url: Some(
                "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=300&h=300&fit=crop"
                    .to_owned(),
            ),
        },
        MenuItem {
            menu_id: Some(12),
            menu_name: format!("{term} Deluxe"),
            category: Some("Food".to_owned()),
            description: Some(format!("Premium {term} with extra toppings")),
            amount: Some("249".to_owned()),
            image_url: Some(
                "https://images.unsplash.com/photo-1567620905732-2d1ec7ab7445?w=300&h=300&fit=crop"
                    .to_owned(),
            ),
        },
    ]
}
