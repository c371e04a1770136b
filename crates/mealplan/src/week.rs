use time::{Date, Duration, Weekday};

/// Monday of the week `offset` weeks away from the week containing `today`.
///
/// A Sunday belongs to the week that started six days earlier. Counting
/// `day - weekday + 1` instead would jump to the following Monday.
pub fn start_of_week(today: Date, offset: i32) -> Date {
    let days_since_monday = match today.weekday() {
        Weekday::Monday => 0,
        Weekday::Tuesday => 1,
        Weekday::Wednesday => 2,
        Weekday::Thursday => 3,
        Weekday::Friday => 4,
        Weekday::Saturday => 5,
        Weekday::Sunday => 6,
    };

    let bound = if offset < 0 { Date::MIN } else { Date::MAX };

    today
        .checked_sub(Duration::days(days_since_monday))
        .and_then(|monday| monday.checked_add(Duration::weeks(offset.into())))
        .unwrap_or(bound)
}

/// `<year>-W<week of month>-<month index>` of the target week's Monday.
///
/// Week numbering is month-relative, so keys are only meaningful as opaque
/// identifiers. Distinct Mondays always produce distinct keys.
pub fn week_key(today: Date, offset: i32) -> String {
    let monday = start_of_week(today, offset);

    format!(
        "{}-W{}-{}",
        monday.year(),
        monday.day().div_ceil(7),
        u8::from(monday.month()) - 1
    )
}
