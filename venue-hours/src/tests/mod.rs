mod next_change;
mod properties;
mod venue;

// Reference week of June 2024, starting on Sunday the 2nd:
//
//   Su 02 | Mo 03 | Tu 04 | We 05 | Th 06 | Fr 07 | Sa 08 | Su 09

#[macro_export]
macro_rules! datetime {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
    }};
    ( $date: expr, $tz: expr ) => {{
        use chrono::TimeZone;

        $tz.from_local_datetime(&datetime!($date))
            .single()
            .expect("ambiguous input datetime")
    }};
}

#[macro_export]
macro_rules! time {
    ( $hour: expr, $minute: expr ) => {{
        venue_hours_syntax::ClockTime::new($hour, $minute).expect("invalid time literal")
    }};
}
