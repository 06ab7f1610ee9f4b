use super::*;

fn listing(name: &str, distance: f64, rating: &str, reviews: u32) -> RestaurantListing {
    RestaurantListing {
        id: name.to_lowercase(),
        name: name.to_owned(),
        image_url: "https://example.com/img.png".to_owned(),
        avg_rating: rating.to_owned(),
        preparation_time: "8-12 min".to_owned(),
        distance_miles: distance,
        bags_left: 3,
        pickup_time_window: "11:00 AM - 10:00 PM".to_owned(),
        review_count: reviews,
        restaurant_type: Vec::new(),
        description: None,
        address: None,
        has_deals: false,
        is_open: None,
    }
}

fn names(list: &[RestaurantListing]) -> Vec<&str> {
    list.iter().map(|l| l.name.as_str()).collect()
}

// -----------------------------------------------------------------------
// parsing
// -----------------------------------------------------------------------

#[test]
fn parses_labels_and_cli_spellings() {
    assert_eq!("Nearest".parse::<FeedFilter>().unwrap(), FeedFilter::Nearest);
    assert_eq!("Open Now".parse::<FeedFilter>().unwrap(), FeedFilter::OpenNow);
    assert_eq!("open-now".parse::<FeedFilter>().unwrap(), FeedFilter::OpenNow);
    assert_eq!("RATING".parse::<FeedFilter>().unwrap(), FeedFilter::Rating);
    assert!("cheapest".parse::<FeedFilter>().is_err());
}

#[test]
fn labels_round_trip_through_from_str() {
    for filter in FeedFilter::ALL {
        assert_eq!(filter.label().parse::<FeedFilter>().unwrap(), filter);
    }
}

// -----------------------------------------------------------------------
// Nearest
// -----------------------------------------------------------------------

#[test]
fn nearest_sorts_by_distance() {
    let snapshot = vec![listing("X", 3.0, "4.0", 1), listing("Y", 1.0, "4.0", 1)];
    assert_eq!(names(&apply(FeedFilter::Nearest, &snapshot)), vec!["Y", "X"]);
}

#[test]
fn nearest_puts_unknown_distance_last() {
    let snapshot = vec![
        listing("Zero", 0.0, "4.0", 1),
        listing("Far", 50.0, "4.0", 1),
        listing("Near", 0.5, "4.0", 1),
    ];
    assert_eq!(
        names(&apply(FeedFilter::Nearest, &snapshot)),
        vec!["Near", "Far", "Zero"]
    );
}

#[test]
fn nearest_is_stable_for_ties() {
    let snapshot = vec![
        listing("A", 2.0, "4.0", 1),
        listing("B", 2.0, "4.0", 1),
        listing("C", 1.0, "4.0", 1),
    ];
    assert_eq!(names(&apply(FeedFilter::Nearest, &snapshot)), vec!["C", "A", "B"]);
}

// -----------------------------------------------------------------------
// Rating
// -----------------------------------------------------------------------

#[test]
fn rating_sorts_descending_with_review_tie_break() {
    let snapshot = vec![
        listing("Low", 1.0, "3.9", 100),
        listing("TopFew", 1.0, "4.8", 2),
        listing("TopMany", 1.0, "4.8", 40),
        listing("Unrated", 1.0, "", 500),
    ];
    assert_eq!(
        names(&apply(FeedFilter::Rating, &snapshot)),
        vec!["TopMany", "TopFew", "Low", "Unrated"]
    );
}

#[test]
fn rating_reads_suffixed_text() {
    let snapshot = vec![
        listing("Plain", 1.0, "4.5", 10),
        listing("OutOfFive", 1.0, "4.9/5", 1),
        listing("Words", 1.0, "great", 90),
    ];
    assert_eq!(
        names(&apply(FeedFilter::Rating, &snapshot)),
        vec!["OutOfFive", "Plain", "Words"]
    );
}

#[test]
fn rating_order_is_consistent_for_all_pairs() {
    let snapshot = vec![
        listing("A", 1.0, "4.1", 3),
        listing("B", 1.0, "4.5", 1),
        listing("C", 1.0, "4.1", 9),
        listing("D", 1.0, "2.0", 0),
    ];
    let sorted = apply(FeedFilter::Rating, &snapshot);
    for pair in sorted.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.rating_value() >= b.rating_value());
        if (a.rating_value() - b.rating_value()).abs() < f64::EPSILON {
            assert!(a.review_count >= b.review_count);
        }
    }
}

// -----------------------------------------------------------------------
// Iconic
// -----------------------------------------------------------------------

#[test]
fn iconic_keeps_reviewed_and_brand_names() {
    let snapshot = vec![
        listing("Corner Cafe", 1.0, "2.0", 0),
        listing("Reviewed Spot", 1.0, "2.0", 1),
        listing("KFC Downtown", 1.0, "", 0),
        listing("Well Rated", 1.0, "4.0", 6),
    ];
    assert_eq!(
        names(&apply(FeedFilter::Iconic, &snapshot)),
        vec!["Reviewed Spot", "KFC Downtown", "Well Rated"]
    );
}

#[test]
fn iconic_reverts_to_snapshot_when_nothing_qualifies() {
    let snapshot = vec![listing("Corner Cafe", 2.0, "3.0", 0), listing("Deli", 1.0, "4.9", 0)];
    assert_eq!(apply(FeedFilter::Iconic, &snapshot), snapshot);
}

// -----------------------------------------------------------------------
// Deals / Open Now
// -----------------------------------------------------------------------

#[test]
fn deals_keeps_listings_with_deals() {
    let mut with_deal = listing("Deal", 1.0, "4.0", 1);
    with_deal.has_deals = true;
    let snapshot = vec![listing("Plain", 1.0, "4.0", 1), with_deal];
    assert_eq!(names(&apply(FeedFilter::Deals, &snapshot)), vec!["Deal"]);
}

#[test]
fn deals_reverts_when_no_listing_has_deals() {
    let snapshot = vec![listing("A", 1.0, "4.0", 1), listing("B", 2.0, "4.0", 1)];
    assert_eq!(apply(FeedFilter::Deals, &snapshot), snapshot);
}

#[test]
fn open_now_treats_missing_flag_as_open() {
    let mut closed = listing("Closed", 1.0, "4.0", 1);
    closed.is_open = Some(false);
    let mut open = listing("Open", 1.0, "4.0", 1);
    open.is_open = Some(true);
    let snapshot = vec![closed, open, listing("Unknown", 1.0, "4.0", 1)];
    assert_eq!(
        names(&apply(FeedFilter::OpenNow, &snapshot)),
        vec!["Open", "Unknown"]
    );
}

#[test]
fn open_now_reverts_when_everything_is_closed() {
    let mut a = listing("A", 1.0, "4.0", 1);
    a.is_open = Some(false);
    let snapshot = vec![a];
    assert_eq!(apply(FeedFilter::OpenNow, &snapshot), snapshot);
}

// -----------------------------------------------------------------------
// laws
// -----------------------------------------------------------------------

#[test]
fn no_filter_empties_a_non_empty_snapshot() {
    let mut closed = listing("Closed Cafe", 0.0, "", 0);
    closed.is_open = Some(false);
    let snapshot = vec![closed];
    for filter in FeedFilter::ALL {
        assert_eq!(apply(filter, &snapshot).len(), 1, "{filter} emptied the feed");
    }
}

#[test]
fn filters_do_not_compound() {
    let snapshot = vec![
        listing("Near Unreviewed", 1.0, "3.0", 0),
        listing("Far Reviewed", 9.0, "4.5", 20),
    ];
    let iconic = apply(FeedFilter::Iconic, &snapshot);
    assert_eq!(iconic.len(), 1);
    // Nearest is applied to the snapshot, not to the Iconic view.
    let nearest = apply(FeedFilter::Nearest, &snapshot);
    assert_eq!(names(&nearest), vec!["Near Unreviewed", "Far Reviewed"]);
}

#[test]
fn empty_snapshot_stays_empty() {
    for filter in FeedFilter::ALL {
        assert!(apply(filter, &[]).is_empty());
    }
}
