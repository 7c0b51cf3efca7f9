//! Opening-hours text normalization.
//!
//! Turns one free-form hours cell ("9am-5pm", "600pm-900pm", "Closed",
//! "11:30am-2pm, 5pm-10pm", ...) into canonical 24-hour [`ShiftPair`]s.
//! The routine never fails: sentinel phrases, empty cells and unparseable
//! input all degrade to the closed sentinel.

use crate::domain::model::ShiftPair;
use regex::Regex;

/// Cleanse one raw hours cell into an ordered list of shift pairs.
///
/// Stages: token normalization, range splitting, meridiem inference,
/// irregular-format fixing, 24-hour conversion. A pair with a missing side
/// resets the whole cell to the closed sentinel; a pair that merely fails
/// to parse is dropped on its own.
pub fn cleanse_time_range(raw: Option<&str>) -> Vec<ShiftPair> {
    let cell = match raw {
        Some(text) if !text.trim().is_empty() => text.trim().to_lowercase(),
        _ => return vec![ShiftPair::closed()],
    };

    if cell.contains("24 hours") {
        return vec![ShiftPair::open_24h()];
    }

    if cell.contains("closed") {
        return vec![ShiftPair::closed()];
    }

    let canonical = normalize_tokens(&cell);

    let Some(ranges) = split_ranges(&canonical) else {
        return vec![ShiftPair::closed()];
    };

    let mut shifts = Vec::new();
    for (start, end) in ranges {
        let (start, end) = infer_missing_meridiem(start, end);
        let start = fix_irregular_time(&start);
        let end = fix_irregular_time(&end);

        if let (Some(start), Some(end)) = (to_24h(&start), to_24h(&end)) {
            shifts.push(ShiftPair::new(start, end));
        }
        // an unparseable pair is skipped; the rest of the cell still counts
    }

    if shifts.is_empty() {
        vec![ShiftPair::closed()]
    } else {
        shifts
    }
}

/// Rewrite a lowercased cell into a canonical dash-separated token stream.
///
/// Removes whitespace, strips a leading day abbreviation ("sun:"), folds
/// meridiem spellings to bare am/pm, maps every dash glyph and range
/// separator (newline, comma, semicolon, "to") to a single `-`, and inserts
/// a dash between two times glued together with no separator at all.
fn normalize_tokens(cell: &str) -> String {
    let cell = cell.replace(['\u{202f}', '\u{a0}', ' '], "");

    let cell = Regex::new(r"^[:a-z]{0,4}:")
        .unwrap()
        .replace(&cell, "")
        .into_owned();

    let cell = Regex::new(r"a\.?m\.?")
        .unwrap()
        .replace_all(&cell, "am")
        .into_owned();
    let cell = Regex::new(r"p\.?m\.?")
        .unwrap()
        .replace_all(&cell, "pm")
        .into_owned();

    // bare trailing "a"/"p" directly after a 1-2 digit hour ("4a" -> "4am")
    let cell = Regex::new(r"\b(\d{1,2})a\b")
        .unwrap()
        .replace_all(&cell, "${1}am")
        .into_owned();
    let cell = Regex::new(r"\b(\d{1,2})p\b")
        .unwrap()
        .replace_all(&cell, "${1}pm")
        .into_owned();

    let cell = Regex::new(r"[\u{2014}\u{2013}\u{2212}\u{2012}\u{2015}]")
        .unwrap()
        .replace_all(&cell, "-")
        .into_owned();

    let cell = cell.replace("to", "-");

    let cell = Regex::new(r"(\d{1,2}:\d{2}(am|pm))(\d{1,2}(am|pm))")
        .unwrap()
        .replace_all(&cell, "${1}-${3}")
        .into_owned();

    let cell = Regex::new(r"[\n,;]")
        .unwrap()
        .replace_all(&cell, "-")
        .into_owned();

    let cell = Regex::new(r"--+")
        .unwrap()
        .replace_all(&cell, "-")
        .into_owned();

    // glued boundary the first pass cannot see: "6:00pm9:00pm"
    Regex::new(r"(\d{2}(am|pm))(\d{1,2}:\d{2}(am|pm))")
        .unwrap()
        .replace_all(&cell, "${1}-${3}")
        .into_owned()
}

/// Split on the canonical dash and pair tokens (0,1), (2,3), ...
///
/// Returns `None` when any candidate pair is missing a side: an odd
/// trailing token or an empty token resets the whole cell, not just the
/// offending pair.
fn split_ranges(canonical: &str) -> Option<Vec<(String, String)>> {
    let tokens: Vec<&str> = canonical.split('-').collect();

    let mut ranges = Vec::new();
    for chunk in tokens.chunks(2) {
        let start = chunk[0];
        let end = chunk.get(1).copied()?;
        if start.is_empty() || end.is_empty() {
            return None;
        }
        ranges.push((start.to_string(), end.to_string()));
    }
    Some(ranges)
}

/// When exactly one side of a range carries an am/pm marker, copy it onto
/// the other side. Runs before irregular-format fixing and 24h conversion.
fn infer_missing_meridiem(start: String, end: String) -> (String, String) {
    let has_meridiem = |t: &str| t.contains("am") || t.contains("pm");

    match (has_meridiem(&start), has_meridiem(&end)) {
        (true, false) => {
            let marker = trailing_marker(&start);
            let end = format!("{end}{marker}");
            (start, end)
        }
        (false, true) => {
            let marker = trailing_marker(&end);
            let start = format!("{start}{marker}");
            (start, end)
        }
        _ => (start, end),
    }
}

/// Last two characters of a token, which by construction hold its marker.
fn trailing_marker(token: &str) -> String {
    let skip = token.chars().count().saturating_sub(2);
    token.chars().skip(skip).collect()
}

/// Insert the missing colon into a colonless 3-4 digit run with a marker
/// ("600pm" -> "6:00pm"). Anything else passes through untouched.
fn fix_irregular_time(token: &str) -> String {
    match Regex::new(r"^(\d{1,2})(\d{2})(am|pm)$")
        .unwrap()
        .captures(token)
    {
        Some(caps) => format!("{}:{}{}", &caps[1], &caps[2], &caps[3]),
        None => token.to_string(),
    }
}

/// Convert one time token to zero-padded 24-hour "HH:MM".
///
/// Accepts "H:MMam"/"H:MMpm", bare-hour "Ham"/"Hpm", and 24-hour "HH:MM";
/// dots count as colons. Out-of-range hours or minutes are a parse failure,
/// reported as `None` so the caller can drop the pair.
fn to_24h(token: &str) -> Option<String> {
    let token = token.replace('.', ":");

    if token.contains("am") || token.contains("pm") {
        let caps = Regex::new(r"^(\d{1,2})(?::(\d{2}))?(am|pm)$")
            .unwrap()
            .captures(&token)?;
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps.get(2).map_or(Some(0), |m| m.as_str().parse().ok())?;
        if !(1..=12).contains(&hour) || minute > 59 {
            return None;
        }
        let hour = match (&caps[3], hour) {
            ("pm", h) if h != 12 => h + 12,
            ("am", 12) => 0,
            (_, h) => h,
        };
        Some(format!("{hour:02}:{minute:02}"))
    } else {
        let caps = Regex::new(r"^(\d{1,2}):(\d{2})$")
            .unwrap()
            .captures(&token)?;
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(format!("{hour:02}:{minute:02}"))
    }
}
