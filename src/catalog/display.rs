/// Format a playlist length given in minutes: `3 hr 25 min`, or `45 min`
/// under an hour.
pub fn format_total_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let remaining = minutes % 60;

    let mut text = String::new();
    if hours > 0 {
        text.push_str(&format!("{} hr ", hours));
    }
    text.push_str(&format!("{} min", remaining));
    text
}
