use crate::status::{OpenStatus, StatusMessage};
use crate::{datetime, open_now, Context, Venue};

fn venue(slug: &str, hours: Option<&str>) -> Venue {
    Venue {
        slug: slug.to_string(),
        name: slug.to_uppercase(),
        hours: hours.map(str::to_string),
        ..Default::default()
    }
}

fn sample() -> Vec<Venue> {
    vec![
        venue("bean-there", Some("Monday - Friday 7 AM to 3 PM, Saturday: 8 AM to 1 PM")),
        venue("night-owl", Some("Mon - Sun 6 PM to 2 AM")),
        venue("hub", Some("Mon - Fri: Open 24 hours")),
        venue("mystery", None),
        venue("typo", Some("Moonday: 9 AM to 5 PM")),
    ]
}

fn slugs<'v>(venues: impl IntoIterator<Item = &'v Venue>) -> Vec<&'v str> {
    venues.into_iter().map(|venue| venue.slug.as_str()).collect()
}

#[test]
fn status_of_venues() {
    let venues = sample();
    let now = datetime!("2024-06-05 10:00");

    assert_eq!(venues[0].status(now).status, OpenStatus::Open);
    assert_eq!(venues[1].status(now).message, StatusMessage::ClosedOpensIn { minutes: 480 });
    assert_eq!(venues[3].status(now).message, StatusMessage::Unavailable);
    assert_eq!(venues[4].status(now).message, StatusMessage::Unavailable);
}

#[test]
fn status_with_context() {
    let venues = sample();
    let ctx = Context::default().with_soon(chrono::Duration::hours(6));

    assert_eq!(
        venues[0].status_with(&ctx, datetime!("2024-06-05 10:00")).status,
        OpenStatus::ClosingSoon,
    );
}

#[test]
fn open_now_filter() {
    let venues = sample();

    assert_eq!(
        slugs(open_now(&venues, datetime!("2024-06-05 10:00"), 6)),
        ["bean-there", "hub"],
    );

    assert_eq!(
        slugs(open_now(&venues, datetime!("2024-06-06 01:00"), 6)),
        ["night-owl", "hub"],
    );

    assert_eq!(slugs(open_now(&venues, datetime!("2024-06-09 16:00"), 6)), Vec::<&str>::new());
}

#[test]
fn open_now_limit() {
    let venues = sample();
    assert_eq!(slugs(open_now(&venues, datetime!("2024-06-05 10:00"), 1)), ["bean-there"]);
    assert!(open_now(&venues, datetime!("2024-06-05 10:00"), 0).is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn deserialize_content_record() -> Result<(), serde_json::Error> {
    let raw = r#"{
        "slug": "bean-there",
        "name": "Bean There",
        "address": "12 Main St",
        "hours": "Monday - Friday 7 AM to 3 PM",
        "tags": ["wifi", "outlets"],
        "latitude": 44.97,
        "longitude": -93.26,
        "review_score": 4.6
    }"#;

    let venue: Venue = serde_json::from_str(raw)?;
    assert_eq!(venue.slug, "bean-there");
    assert_eq!(venue.tags, ["wifi", "outlets"]);
    assert!(venue.status(datetime!("2024-06-05 10:00")).is_open());

    let minimal: Venue = serde_json::from_str(r#"{"slug": "x", "name": "X"}"#)?;
    assert_eq!(minimal.hours, None);
    assert!(minimal.tags.is_empty());
    assert_eq!(minimal.status(datetime!("2024-06-05 10:00")).to_string(), "Hours unavailable");

    let roundtrip: Venue = serde_json::from_str(&serde_json::to_string(&venue)?)?;
    assert_eq!(roundtrip, venue);
    Ok(())
}
