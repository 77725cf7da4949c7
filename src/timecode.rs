use std::sync::LazyLock;

use regex::Regex;

static COMPOUND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?$").expect("compound time pattern must compile")
});

/// Parse a `t=` / `start=` query value into whole seconds.
///
/// Accepts plain seconds (`"90"`), compound durations (`"1h2m30s"`, `"5m"`,
/// `"90s"`), and colon times (`"1:30"`, `"1:02:30"`). Anything else, including
/// values that would overflow, is `None`: an unparsable start time is an
/// absent one, not an error.
pub fn parse_time_param(value: &str) -> Option<u64> {
    if value.is_empty() {
        return None;
    }
    if value.bytes().all(|b| b.is_ascii_digit()) {
        return value.parse().ok();
    }
    parse_compound(value).or_else(|| parse_colon(value))
}

/// `<H>h<M>m<S>s` with every component optional, but the whole value must be
/// consumed and at least one component present
fn parse_compound(value: &str) -> Option<u64> {
    let caps = COMPOUND_RE.captures(value)?;
    if caps.get(1).is_none() && caps.get(2).is_none() && caps.get(3).is_none() {
        return None;
    }

    let component = |index: usize| -> Option<u64> {
        match caps.get(index) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;

    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

/// Colon-delimited time, fields weighted right-to-left by powers of 60
fn parse_colon(value: &str) -> Option<u64> {
    let mut total: u64 = 0;
    for (position, field) in value.split(':').rev().enumerate() {
        let n: u64 = field.parse().ok()?;
        let weight = 60u64.checked_pow(position as u32)?;
        total = total.checked_add(n.checked_mul(weight)?)?;
    }
    Some(total)
}
