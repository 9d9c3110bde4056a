//! Relative "posted 2 days ago" timestamps, localized for English and Arabic.
//!
//! The buckets are deliberately coarse (minutes, hours, days, months, years);
//! a listing card does not need calendar-exact distances.

use chrono::{DateTime, Utc};

use crate::core::locale::Locale;

/// Render the distance between `then` and `now` as a relative phrase.
///
/// A `then` in the future (clock skew from the data layer) renders the same
/// as "just now".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> String {
    let seconds = (now - then).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let months = days / 30;
    let years = days / 365;

    match locale {
        Locale::En => {
            let (count, unit) = if years > 0 {
                (years, if years == 1 { "year" } else { "years" })
            } else if months > 0 {
                (months, if months == 1 { "month" } else { "months" })
            } else if days > 0 {
                (days, if days == 1 { "day" } else { "days" })
            } else if hours > 0 {
                (hours, if hours == 1 { "hour" } else { "hours" })
            } else if minutes > 0 {
                (minutes, if minutes == 1 { "minute" } else { "minutes" })
            } else {
                return "just now".to_string();
            };
            format!("{count} {unit} ago")
        }
        Locale::Ar => {
            let (count, unit) = if years > 0 {
                (years, if years == 1 { "سنة" } else { "سنوات" })
            } else if months > 0 {
                (months, if months == 1 { "شهر" } else { "أشهر" })
            } else if days > 0 {
                (days, if days == 1 { "يوم" } else { "أيام" })
            } else if hours > 0 {
                (hours, if hours == 1 { "ساعة" } else { "ساعات" })
            } else if minutes > 0 {
                (minutes, if minutes == 1 { "دقيقة" } else { "دقائق" })
            } else {
                return "الآن".to_string();
            };
            if count == 1 {
                format!("منذ {unit}")
            } else {
                format!("منذ {count} {unit}")
            }
        }
    }
}
