use time::Time;

/// Formats a count with Indian digit grouping: `1234567` -> `12,34,567`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// 12-hour clock text such as `02:12 PM`.
pub fn format_clock(t: Time) -> String {
    let (hour, minute, _) = t.as_hms();
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12:02}:{minute:02} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    #[test]
    fn groups_like_en_in() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12345), "12,345");
        assert_eq!(format_count(1234567), "12,34,567");
        assert_eq!(format_count(123456789), "12,34,56,789");
    }

    #[test]
    fn clock_and_percent() {
        assert_eq!(format_clock(time!(14:12)), "02:12 PM");
        assert_eq!(format_clock(time!(0:05)), "12:05 AM");
        assert_eq!(format_clock(time!(12:00)), "12:00 PM");
        assert_eq!(format_percent(40.0), "40.0%");
        assert_eq!(format_percent(33.333), "33.3%");
    }
}
