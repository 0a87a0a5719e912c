use std::env;

use chrono::Local;

use venue_hours::localization::Localize;
use venue_hours::{Context, VenueHours, WeeklySchedule};

fn report<L: Localize>(hours: &VenueHours<L>, now: L::DateTime) {
    println!(" - date: {now:?}");

    let status = hours.status(now.clone());
    println!(" - current status: {:?}", status.status);
    println!(" - message: {status}");

    if let Some(next_opening) = hours.next_opening(now.clone()) {
        println!(" - next opening: {next_opening:?}");
    }

    if let Some(next_closing) = hours.next_closing(now) {
        println!(" - next closing: {next_closing:?}");
    }

    println!("---");
    println!("{}", hours.schedule());
}

fn main() {
    let expression = env::args()
        .nth(1)
        .expect("Usage: ./status <EXPRESSION> [TIMEZONE]");

    let parsed = venue_hours_syntax::parse(&expression);
    println!(" - expression: {expression}");
    println!(" - normalized: {parsed}");

    for block in &parsed.rejected {
        println!(" - ignored: {block}");
    }

    let hours = VenueHours::from_schedule(WeeklySchedule::from(&parsed));

    match env::args().nth(2) {
        None => report(&hours, Local::now().naive_local()),
        #[cfg(feature = "timezone")]
        Some(name) => {
            let locale = venue_hours::localization::TzLocation::from_name(&name)
                .unwrap_or_else(|err| panic!("{err}"));

            let now = chrono::Utc::now().with_timezone(locale.get_timezone());
            report(&hours.with_context(Context::default().with_locale(locale)), now);
        }
        #[cfg(not(feature = "timezone"))]
        Some(_) => panic!("timezones require the `timezone` feature"),
    }
}
