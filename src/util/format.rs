use time::OffsetDateTime;

/// (unit, seconds, stop right after this unit is recorded)
const TIME_UNITS: [(&str, i64, bool); 7] = [
    ("year", 365 * 24 * 60 * 60, false),
    ("month", 30 * 24 * 60 * 60, false),
    ("week", 7 * 24 * 60 * 60, false),
    ("day", 24 * 60 * 60, true),
    ("hour", 60 * 60, false),
    ("minute", 60, true),
    ("second", 1, false),
];

/// Format a byte count as a human-readable string (B, KB, MB, GB)
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a Unix timestamp as YYYY-MM-DD string
pub fn format_timestamp(timestamp: i64) -> String {
    use time::macros::format_description;

    if timestamp == 0 {
        return "unknown".to_string();
    }

    OffsetDateTime::from_unix_timestamp(timestamp)
        .ok()
        .and_then(|dt| {
            let format = format_description!("[year]-[month]-[day]");
            dt.format(&format).ok()
        })
        .unwrap_or_else(|| "unknown".to_string())
}

/// Describe how long ago `timestamp` was, e.g. "2 weeks, 3 days".
///
/// At most two units are shown, and the second one is only ever the unit
/// directly below the first. Days and minutes end the phrase. A single
/// month absorbs the trailing weeks ("1 month, 3 weeks" reads "7 weeks"),
/// several months drop them, and more than five hours drop the minutes.
/// `now` must not be earlier than `timestamp`.
pub fn time_since(timestamp: i64, now: i64) -> String {
    let mut delta = now - timestamp;
    let mut parts: Vec<(i64, &str)> = Vec::with_capacity(2);
    let mut break_next = false;

    for &(unit, seconds, hard_stop) in &TIME_UNITS {
        if delta >= seconds {
            let n = delta / seconds;
            delta -= n * seconds;
            parts.push((n, unit));
            if hard_stop {
                break;
            }
            if !break_next {
                break_next = true;
                continue;
            }
        }
        if break_next {
            break;
        }
    }

    if let [(n, unit), (m, _)] = parts[..] {
        match unit {
            "month" if n == 1 => parts = vec![(m + 4, "week")],
            "month" => parts.truncate(1),
            "hour" if n > 5 => parts.truncate(1),
            _ => {}
        }
    }

    parts
        .iter()
        .map(|(n, unit)| format!("{} {}{}", n, unit, if *n != 1 { "s" } else { "" }))
        .collect::<Vec<_>>()
        .join(", ")
}

/// [`time_since`] relative to the current wall clock
pub fn time_since_now(timestamp: i64) -> String {
    time_since(timestamp, OffsetDateTime::now_utc().unix_timestamp())
}

/// Abbreviate a full binary (20) or hex (40) object id to 7 characters
pub fn shorten_id(id: &str) -> &str {
    match id.len() {
        20 | 40 => id.get(..7).unwrap_or(id),
        _ => id,
    }
}

/// First line of a commit message
pub fn shorten_message(message: &str) -> &str {
    message.split('\n').next().unwrap_or("")
}

/// Name part of a `Name <email>` author string
pub fn extract_author_name(author: &str) -> &str {
    author
        .strip_suffix('>')
        .and_then(|rest| rest.find('<').map(|at| &author[..at]))
        .filter(|name| !name.contains('\n'))
        .map(str::trim_end)
        .unwrap_or(author)
}
