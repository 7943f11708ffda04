use chrono::{NaiveDateTime, TimeDelta};

/// "1d 02h 05m" style span between two timestamps.
pub fn describe_span(start: NaiveDateTime, end: NaiveDateTime) -> String {
    let delta: TimeDelta = end - start;
    let total_min = delta.num_minutes().abs();
    let days = total_min / (24 * 60);
    let hours = (total_min / 60) % 24;
    let minutes = total_min % 60;

    if days > 0 {
        format!("{}d {:02}h {:02}m", days, hours, minutes)
    } else {
        format!("{:02}h {:02}m", hours, minutes)
    }
}
