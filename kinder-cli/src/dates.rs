//! Reading event dates typed by a person.

use anyhow::Result;
use kinder_core::EventTime;

/// Strict formats first (`2025-06-17`, `2025-06-17T09:30`, RFC 3339), then
/// natural language ("next friday", "june 17 at 9am").
///
/// Natural-language input without a time of day becomes an all-day event.
pub fn parse_event_time(input: &str) -> Result<EventTime> {
    if let Ok(time) = EventTime::parse(input) {
        return Ok(time);
    }

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    if has_time_component(input) {
        Ok(EventTime::DateTimeFloating(dt))
    } else {
        Ok(EventTime::Date(dt.date()))
    }
}

/// fuzzydate only knows full weekday and month names.
fn expand_abbreviations(input: &str) -> String {
    const ABBREVIATIONS: [(&str, &str); 22] = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            ABBREVIATIONS
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| *full)
                .unwrap_or(word)
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// True for "noon", "midnight", "9am", "9 pm", "15:30" or "at 3".
fn has_time_component(input: &str) -> bool {
    let lower = input.to_lowercase();

    if lower.contains("noon") || lower.contains("midnight") {
        return true;
    }

    let bytes = lower.as_bytes();
    for i in 0..bytes.len() {
        let meridiem = (bytes[i] == b'a' || bytes[i] == b'p') && bytes.get(i + 1) == Some(&b'm');
        if meridiem {
            let digit_before = i > 0 && bytes[i - 1].is_ascii_digit();
            let digit_space_before = i > 1 && bytes[i - 1] == b' ' && bytes[i - 2].is_ascii_digit();
            if digit_before || digit_space_before {
                return true;
            }
        }

        if bytes[i] == b':' {
            let digit_before = i > 0 && bytes[i - 1].is_ascii_digit();
            let digit_after = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
            if digit_before && digit_after {
                return true;
            }
        }
    }

    let padded = format!(" {}", lower);
    padded
        .match_indices(" at ")
        .any(|(pos, _)| padded[pos + 4..].starts_with(|c: char| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_strict_formats_win() {
        assert_eq!(
            parse_event_time("2025-06-17").unwrap(),
            EventTime::Date(NaiveDate::from_ymd_opt(2025, 6, 17).unwrap())
        );
        assert!(matches!(
            parse_event_time("2025-06-17T09:30").unwrap(),
            EventTime::DateTimeFloating(_)
        ));
    }

    #[test]
    fn test_expand_abbreviations() {
        assert_eq!(expand_abbreviations("Next Fri"), "next friday");
        assert_eq!(expand_abbreviations("sept 3"), "september 3");
        assert_eq!(expand_abbreviations("tomorrow"), "tomorrow");
    }

    #[test]
    fn test_has_time_component() {
        assert!(has_time_component("tomorrow at 3"));
        assert!(has_time_component("at 10"));
        assert!(has_time_component("friday 9am"));
        assert!(has_time_component("friday 9 pm"));
        assert!(has_time_component("june 17 15:30"));
        assert!(has_time_component("noon"));

        assert!(!has_time_component("next friday"));
        assert!(!has_time_component("june 17"));
        assert!(!has_time_component("sat"));
    }

    #[test]
    fn test_unparseable_input() {
        assert!(parse_event_time("when pigs fly").is_err());
    }
}
