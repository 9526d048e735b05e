//! Selectable IANA timezones.

use chrono_tz::TZ_VARIANTS;

use crate::api::TimezoneOption;

/// All known IANA timezones, sorted by display title.
pub fn list_timezones() -> Vec<TimezoneOption> {
    let mut items: Vec<TimezoneOption> = TZ_VARIANTS
        .iter()
        .map(|tz| TimezoneOption {
            title: tz.name().replace('_', " "),
            value: tz.name().to_string(),
        })
        .collect();
    items.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.value.cmp(&b.value)));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_is_sorted_and_parseable() {
        let items = list_timezones();
        assert!(items.len() > 300);
        assert!(items.windows(2).all(|w| w[0].title <= w[1].title));
        assert!(items.iter().all(|i| i.value.parse::<chrono_tz::Tz>().is_ok()));
    }

    #[test]
    fn test_titles_are_readable() {
        let items = list_timezones();
        let ny = items
            .iter()
            .find(|i| i.value == "America/New_York")
            .unwrap();
        assert_eq!(ny.title, "America/New York");
    }
}
