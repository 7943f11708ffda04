use crate::errors::{AppError, AppResult};
use crate::models::{Dataset, Window};
use chrono::TimeDelta;

/// Select the readings of the last `hours` hours, measured back from the
/// newest timestamp in the dataset. Both ends are inclusive.
pub fn select_window(dataset: &Dataset, hours: i64) -> AppResult<Window> {
    if hours <= 0 {
        return Err(AppError::Config(format!(
            "window length must be positive (got {hours}h)"
        )));
    }

    let end = dataset.max_timestamp().ok_or(AppError::EmptyDataset)?;

    let span = TimeDelta::try_hours(hours)
        .ok_or_else(|| AppError::Config(format!("window length out of range: {hours}h")))?;
    let start = end
        .checked_sub_signed(span)
        .ok_or_else(|| AppError::Config(format!("window length out of range: {hours}h")))?;

    let readings = dataset
        .readings
        .iter()
        .filter(|r| r.device_timestamp >= start)
        .cloned()
        .collect();

    Ok(Window {
        start,
        end,
        readings,
    })
}
