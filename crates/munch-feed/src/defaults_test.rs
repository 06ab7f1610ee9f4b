use serde_json::json;

use super::*;

fn raw(value: serde_json::Value) -> RawRestaurant {
    RawRestaurant::from_value(value)
}

// -----------------------------------------------------------------------
// HeuristicDefaults
// -----------------------------------------------------------------------

#[test]
fn rating_base_follows_keyword_order() {
    assert!((rating_base("hari kitchen") - 4.0).abs() < 1e-9);
    assert!((rating_base("create cafe") - 4.2).abs() < 1e-9);
    assert!((rating_base("zudio") - 4.5).abs() < 1e-9);
    assert!((rating_base("thai garden") - 4.2).abs() < 1e-9);
    assert!((rating_base("american diner") - 4.8).abs() < 1e-9);
    assert!((rating_base("wingstop") - 4.0).abs() < 1e-9);
    // "restaurant" is checked before "zudio" and "american".
    assert!((rating_base("zudio restaurant") - 4.2).abs() < 1e-9);
    assert!((rating_base("american restaurant") - 4.2).abs() < 1e-9);
    // "zudio" is checked before "thai".
    assert!((rating_base("thai zudio") - 4.5).abs() < 1e-9);
}

#[test]
fn defaults_for_first_position() {
    let d = HeuristicDefaults::for_position(0, "Wingstop");
    assert_eq!(d.rating, "4.0");
    assert_eq!(d.preparation_time, "8-12 min");
    assert!((d.distance_miles - 2.5).abs() < 1e-9);
    assert_eq!(d.bags_left, 8);
    assert_eq!(d.pickup_time_window, "11:00 AM - 10:00 PM");
    assert_eq!(d.review_count, 15);
}

#[test]
fn defaults_scale_with_index() {
    let d = HeuristicDefaults::for_position(3, "American Diner");
    assert_eq!(d.rating, "5.1");
    assert_eq!(d.preparation_time, "15-20 min");
    assert!((d.distance_miles - 4.9).abs() < 1e-9);
    assert_eq!(d.bags_left, 5);
    assert_eq!(d.pickup_time_window, "9:00 AM - 11:00 PM");
    assert_eq!(d.review_count, 39);
}

#[test]
fn tables_wrap_around() {
    let d = HeuristicDefaults::for_position(6, "x");
    assert_eq!(d.preparation_time, "10-15 min");
    assert_eq!(d.pickup_time_window, "12:00 PM - 11:00 PM");
}

#[test]
fn bags_left_never_drops_below_one() {
    assert_eq!(HeuristicDefaults::for_position(7, "x").bags_left, 1);
    assert_eq!(HeuristicDefaults::for_position(8, "x").bags_left, 1);
    assert_eq!(HeuristicDefaults::for_position(40, "x").bags_left, 1);
}

#[test]
fn distance_increases_and_bags_decrease_with_index() {
    let mut prev = HeuristicDefaults::for_position(0, "x");
    for index in 1..12 {
        let next = HeuristicDefaults::for_position(index, "x");
        assert!(next.distance_miles > prev.distance_miles);
        assert!(next.bags_left <= prev.bags_left);
        prev = next;
    }
}

#[test]
fn name_matching_is_case_insensitive() {
    assert_eq!(HeuristicDefaults::for_position(0, "ZUDIO").rating, "4.5");
}

// -----------------------------------------------------------------------
// synthesize
// -----------------------------------------------------------------------

#[test]
fn synthesize_is_deterministic() {
    let record = raw(json!({ "id": 4, "Name": "Thai Garden" }));
    for index in [0, 1, 5, 17] {
        assert_eq!(synthesize(index, &record), synthesize(index, &record));
    }
}

#[test]
fn source_values_win_over_defaults() {
    let record = raw(json!({
        "id": 20,
        "Name": "Wingstop",
        "imageUrl": "https://cdn.example.com/Restaurant/Dominos.png",
        "preparationTime": "15-20 min",
        "avgrating": "4.5",
        "reviewCount": 138,
        "distance": 1.2,
        "bagsLeft": 2,
        "pickupTime": "5:00 PM - 6:00 PM",
        "description": "Wings",
        "address": "123 Wings Street"
    }));
    let l = synthesize(4, &record);
    assert_eq!(l.id, "20");
    assert_eq!(l.name, "Wingstop");
    assert_eq!(l.image_url, "https://cdn.example.com/Restaurant/Dominos.png");
    assert_eq!(l.avg_rating, "4.5");
    assert_eq!(l.preparation_time, "15-20 min");
    assert!((l.distance_miles - 1.2).abs() < 1e-9);
    assert_eq!(l.bags_left, 2);
    assert_eq!(l.pickup_time_window, "5:00 PM - 6:00 PM");
    assert_eq!(l.review_count, 138);
    assert_eq!(l.description.as_deref(), Some("Wings"));
    assert_eq!(l.address.as_deref(), Some("123 Wings Street"));
}

#[test]
fn alternate_field_names_are_honoured() {
    let record = raw(json!({
        "_id": "abc",
        "name": "Pizza Hut",
        "image": "https://cdn.example.com/pizzahut.jpg",
        "rating": 4.5,
        "preparation_time": "20 min",
        "distance_km": "3.3",
        "bags_left": "4",
        "pickup_time": "noon",
        "review_count": "9"
    }));
    let l = synthesize(0, &record);
    assert_eq!(l.id, "abc");
    assert_eq!(l.name, "Pizza Hut");
    assert_eq!(l.image_url, "https://cdn.example.com/pizzahut.jpg");
    assert_eq!(l.avg_rating, "4.5");
    assert_eq!(l.preparation_time, "20 min");
    assert!((l.distance_miles - 3.3).abs() < 1e-9);
    assert_eq!(l.bags_left, 4);
    assert_eq!(l.pickup_time_window, "noon");
    assert_eq!(l.review_count, 9);
}

#[test]
fn falsy_source_values_fall_back_to_defaults() {
    let record = raw(json!({
        "Name": "zudio",
        "avgrating": "",
        "reviewCount": 0,
        "distance": 0,
        "bagsLeft": null
    }));
    let l = synthesize(2, &record);
    assert_eq!(l.avg_rating, "4.7");
    assert_eq!(l.review_count, 31);
    assert!((l.distance_miles - 4.1).abs() < 1e-9);
    assert_eq!(l.bags_left, 6);
}

#[test]
fn missing_everything_still_fills_display_fields() {
    let l = synthesize(1, &raw(json!({})));
    assert_eq!(l.id, "2");
    assert_eq!(l.name, "Restaurant 2");
    assert!(!l.image_url.is_empty());
    assert!(!l.avg_rating.is_empty());
    assert!(!l.preparation_time.is_empty());
    assert!(!l.pickup_time_window.is_empty());
    assert!(l.bags_left >= 1);
    assert!(l.distance_miles > 0.0);
}

#[test]
fn broken_default_jpg_is_replaced_with_derived_fallback() {
    let record = raw(json!({
        "id": 9,
        "Name": "Thai Palace",
        "imageUrl": "https://munch-n-give-app.s3.amazonaws.com/Restaurant/default.jpg"
    }));
    let l = synthesize(0, &record);
    assert!(!l.image_url.contains("default.jpg"));
    assert_eq!(l.image_url, default_image_for(Some("Thai Palace"), 0));
}

#[test]
fn missing_image_uses_index_rotation() {
    let l0 = synthesize(0, &raw(json!({ "Name": "Wingstop" })));
    let l1 = synthesize(1, &raw(json!({ "Name": "Wingstop" })));
    assert_ne!(l0.image_url, l1.image_url);
}

#[test]
fn deal_and_open_flags_are_read() {
    let l = synthesize(0, &raw(json!({ "Name": "A", "discount": 10, "isOpen": false })));
    assert!(l.has_deals);
    assert_eq!(l.is_open, Some(false));

    let l = synthesize(0, &raw(json!({ "Name": "B", "offer": "" })));
    assert!(!l.has_deals);
    assert_eq!(l.is_open, None);
}

#[test]
fn synthesize_all_uses_positions() {
    let records = vec![raw(json!({ "Name": "A" })), raw(json!({ "Name": "B" }))];
    let listings = synthesize_all(&records);
    assert_eq!(listings[0].bags_left, 8);
    assert_eq!(listings[1].bags_left, 7);
}

#[test]
fn unit_suffixed_source_values_are_kept() {
    let l = synthesize(
        0,
        &raw(json!({ "Name": "A", "distance": "0.5 mi", "avgrating": "4.9/5" })),
    );
    assert!((l.distance_miles - 0.5).abs() < 1e-9);
    assert_eq!(l.avg_rating, "4.9/5");
    assert!((l.rating_value() - 4.9).abs() < 1e-9);
}

#[test]
fn suffixed_values_order_the_feed() {
    use crate::filter::{apply, FeedFilter};

    let records = vec![
        raw(json!({ "Name": "A", "distance": "0.5 mi", "avgrating": "4.9/5" })),
        raw(json!({ "Name": "B" })),
        raw(json!({ "Name": "C" })),
        raw(json!({ "Name": "D" })),
        raw(json!({ "Name": "E", "distance": "1.1 mi" })),
    ];
    let listings = synthesize_all(&records);
    let order = |filter| {
        apply(filter, &listings)
            .into_iter()
            .map(|l| l.name)
            .collect::<Vec<_>>()
    };

    assert_eq!(order(FeedFilter::Nearest), vec!["A", "E", "B", "C", "D"]);
    assert_eq!(order(FeedFilter::Rating), vec!["A", "E", "D", "C", "B"]);
}
