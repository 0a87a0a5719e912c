use pest::iterators::Pair;
use pest::Parser;

use crate::clock_time::{ClockTime, Meridiem};
use crate::error::{Error, Result};
use crate::rules as rl;
use crate::rules::day as ds;
use crate::rules::time as ts;

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct HoursParser;

/// Characters splitting an expression into blocks.
const BLOCK_SEPARATORS: &[char] = &[',', ';', '\n', '\r'];

/// Parse a full hours expression.
///
/// This never fails: blocks that can't be parsed are kept aside in
/// [`rl::HoursExpression::rejected`] and the other blocks are still used.
///
/// ```
/// use venue_hours_syntax::parse;
///
/// let expr = parse("Monday - Friday 8:00 AM to 5 PM, Saturday: 10 AM to 2 PM");
/// assert_eq!(expr.blocks.len(), 2);
/// assert!(expr.rejected.is_empty());
///
/// assert!(parse("garbage text").is_empty());
/// ```
pub fn parse(data: &str) -> rl::HoursExpression {
    let mut expr = rl::HoursExpression::default();
    let mut prev_days = None;

    for raw_block in data.split(BLOCK_SEPARATORS).map(str::trim) {
        if raw_block.is_empty() {
            continue;
        }

        match parse_block_after(raw_block, prev_days) {
            Ok(block) => {
                prev_days = Some(block.days);
                expr.blocks.push(block);
            }
            Err(_err) => {
                #[cfg(feature = "log")]
                log::warn!("Ignoring hours block `{raw_block}`: {_err}");

                expr.rejected.push(raw_block.to_string());
            }
        }
    }

    expr
}

/// Parse a single block of hours, such as `Tuesday: 7:30 AM to 4 PM`.
///
/// A block that only holds a time range needs previous days to apply to and
/// will be rejected here.
///
/// ```
/// use venue_hours_syntax::parse_block;
///
/// assert!(parse_block("Mon - Fri 8 AM to 5 PM").is_ok());
/// assert!(parse_block("8 AM to 5 PM").is_err());
/// assert!(parse_block("Monday: 8 AM to 13 PM").is_err());
/// ```
pub fn parse_block(data: &str) -> Result<rl::HoursBlock> {
    parse_block_after(data.trim(), None)
}

fn parse_block_after(data: &str, prev_days: Option<ds::DayRange>) -> Result<rl::HoursBlock> {
    let block_pair = HoursParser::parse(Rule::input_block, data)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no block found");

    build_block(block_pair, prev_days)
}

// ---
// --- Blocks
// ---

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

fn build_block(pair: Pair<Rule>, prev_days: Option<ds::DayRange>) -> Result<rl::HoursBlock> {
    assert_eq!(pair.as_rule(), Rule::block);
    let mut pairs = pair.into_inner();
    let first = pairs.next().expect("grammar error: empty block");

    match first.as_rule() {
        Rule::day_selector => {
            let days = build_day_selector(first);
            let hours = build_block_hours(pairs.next().expect("missing block hours"))?;
            Ok(rl::HoursBlock { days, hours })
        }
        Rule::time_span => {
            let days = prev_days.ok_or(Error::MissingDays)?;
            let hours = rl::BlockHours::Span(build_time_span(first)?);
            Ok(rl::HoursBlock { days, hours })
        }
        other => unexpected_token(other, Rule::block),
    }
}

fn build_block_hours(pair: Pair<Rule>) -> Result<rl::BlockHours> {
    assert_eq!(pair.as_rule(), Rule::block_hours);
    let inner = pair.into_inner().next().expect("empty block hours");

    Ok(match inner.as_rule() {
        Rule::closed => rl::BlockHours::Closed,
        Rule::all_day => rl::BlockHours::AllDay,
        Rule::time_span => rl::BlockHours::Span(build_time_span(inner)?),
        other => unexpected_token(other, Rule::block_hours),
    })
}

// ---
// --- Day selector
// ---

fn build_day_selector(pair: Pair<Rule>) -> ds::DayRange {
    assert_eq!(pair.as_rule(), Rule::day_selector);
    let mut pairs = pair.into_inner();
    let start = build_weekday(pairs.next().expect("empty day selector"));

    match pairs.next() {
        Some(pair) => ds::DayRange::new(start, build_weekday(pair)),
        None => ds::DayRange::single(start),
    }
}

fn build_weekday(pair: Pair<Rule>) -> ds::Weekday {
    assert_eq!(pair.as_rule(), Rule::weekday);
    let inner = pair.into_inner().next().expect("empty weekday");

    match inner.as_rule() {
        Rule::sunday => ds::Weekday::Sun,
        Rule::monday => ds::Weekday::Mon,
        Rule::tuesday => ds::Weekday::Tue,
        Rule::wednesday => ds::Weekday::Wed,
        Rule::thursday => ds::Weekday::Thu,
        Rule::friday => ds::Weekday::Fri,
        Rule::saturday => ds::Weekday::Sat,
        other => unexpected_token(other, Rule::weekday),
    }
}

// ---
// --- Time selector
// ---

fn build_time_span(pair: Pair<Rule>) -> Result<ts::TimeSpan> {
    assert_eq!(pair.as_rule(), Rule::time_span);
    let mut pairs = pair.into_inner();
    let open = build_time(pairs.next().expect("empty time span"))?;
    let close = build_time(pairs.next().expect("missing closing time"))?;
    Ok(ts::TimeSpan::new(open, close))
}

fn build_time(pair: Pair<Rule>) -> Result<ClockTime> {
    assert_eq!(pair.as_rule(), Rule::time);
    let inner = pair.into_inner().next().expect("empty time");

    match inner.as_rule() {
        Rule::noon => Ok(ClockTime::NOON),
        Rule::midnight => Ok(ClockTime::MIDNIGHT),
        Rule::clock => build_clock(inner),
        other => unexpected_token(other, Rule::time),
    }
}

fn build_clock(pair: Pair<Rule>) -> Result<ClockTime> {
    assert_eq!(pair.as_rule(), Rule::clock);
    let raw = pair.as_str().to_string();
    let mut hour = None;
    let mut minute = 0;
    let mut meridiem = None;

    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::hour => hour = Some(pair.as_str().parse().expect("invalid hour")),
            Rule::minute => minute = pair.as_str().parse().expect("invalid minute"),
            Rule::meridiem => meridiem = Some(build_meridiem(pair)),
            other => unexpected_token(other, Rule::clock),
        }
    }

    let hour = hour.expect("missing hour");
    let meridiem = meridiem.expect("missing meridiem");

    ClockTime::from_meridiem(hour, minute, meridiem).ok_or(Error::Overflow {
        value: raw,
        expected: "a time between 12:00 AM and 11:59 PM".to_string(),
    })
}

fn build_meridiem(pair: Pair<Rule>) -> Meridiem {
    assert_eq!(pair.as_rule(), Rule::meridiem);

    match pair.into_inner().next().expect("empty meridiem").as_rule() {
        Rule::am => Meridiem::Am,
        Rule::pm => Meridiem::Pm,
        other => unexpected_token(other, Rule::meridiem),
    }
}
