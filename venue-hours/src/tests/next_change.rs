use crate::{datetime, VenueHours};

const WEEKDAYS: &str = "Monday - Friday 8:00 AM to 5:00 PM, Saturday: 10:00 AM to 2:00 PM";

#[test]
fn next_opening_while_closed() {
    let hours = VenueHours::parse(WEEKDAYS);

    assert_eq!(
        hours.next_opening(datetime!("2024-06-05 06:30")),
        Some(datetime!("2024-06-05 08:00")),
    );

    assert_eq!(
        hours.next_opening(datetime!("2024-06-07 17:00")),
        Some(datetime!("2024-06-08 10:00")),
    );

    assert_eq!(
        hours.next_opening(datetime!("2024-06-08 15:00")),
        Some(datetime!("2024-06-10 08:00")),
    );
}

#[test]
fn next_opening_while_open() {
    let hours = VenueHours::parse(WEEKDAYS);

    assert_eq!(
        hours.next_opening(datetime!("2024-06-05 12:00")),
        Some(datetime!("2024-06-06 08:00")),
    );
}

#[test]
fn next_closing() {
    let hours = VenueHours::parse(WEEKDAYS);

    assert_eq!(
        hours.next_closing(datetime!("2024-06-05 12:00")),
        Some(datetime!("2024-06-05 17:00")),
    );

    assert_eq!(
        hours.next_closing(datetime!("2024-06-05 17:00")),
        Some(datetime!("2024-06-06 17:00")),
    );

    assert_eq!(
        hours.next_closing(datetime!("2024-06-09 12:00")),
        Some(datetime!("2024-06-10 17:00")),
    );
}

#[test]
fn next_change_overnight() {
    let hours = VenueHours::parse("Friday: 9:00 PM to 2:00 AM");

    assert_eq!(
        hours.next_closing(datetime!("2024-06-08 01:00")),
        Some(datetime!("2024-06-08 02:00")),
    );

    assert_eq!(
        hours.next_opening(datetime!("2024-06-08 01:00")),
        Some(datetime!("2024-06-14 21:00")),
    );

    assert_eq!(
        hours.next_closing(datetime!("2024-06-07 12:00")),
        Some(datetime!("2024-06-08 02:00")),
    );
}

#[test]
fn no_change() {
    let always = VenueHours::parse("Mon - Sun: Open 24 hours");
    assert_eq!(always.next_opening(datetime!("2024-06-05 12:00")), None);
    assert_eq!(always.next_closing(datetime!("2024-06-05 12:00")), None);

    let never = VenueHours::parse("not listed");
    assert_eq!(never.next_opening(datetime!("2024-06-05 12:00")), None);
    assert_eq!(never.next_closing(datetime!("2024-06-05 12:00")), None);
}

#[test]
fn next_change_overlapping() {
    let hours = VenueHours::parse("Monday: 8 AM to 5 PM, Monday: 12 PM to 9 PM");

    assert_eq!(
        hours.next_closing(datetime!("2024-06-03 13:00")),
        Some(datetime!("2024-06-03 21:00")),
    );

    assert!(hours.is_open(datetime!("2024-06-03 17:00")));
    assert!(!hours.is_open(datetime!("2024-06-03 21:00")));

    assert_eq!(
        hours.next_closing(datetime!("2024-06-03 07:00")),
        Some(datetime!("2024-06-03 21:00")),
    );

    assert_eq!(
        hours.next_opening(datetime!("2024-06-03 13:00")),
        Some(datetime!("2024-06-10 08:00")),
    );
}
