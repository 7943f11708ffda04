use crate::errors::{AppError, AppResult};
use crate::models::{Dataset, GlucoseValue, LatestReading, Reading};

/// Newest reading of the whole dataset; the first one in file order wins
/// when several share the newest timestamp.
pub fn newest_reading(dataset: &Dataset) -> Option<&Reading> {
    dataset.readings.iter().reduce(|best, r| {
        if r.device_timestamp > best.device_timestamp {
            r
        } else {
            best
        }
    })
}

/// Resolve the glucose value of the newest reading (historic, then scan,
/// then "Data Not Available"). Values stay in mmol/L.
pub fn resolve_latest(dataset: &Dataset) -> AppResult<LatestReading> {
    let newest = newest_reading(dataset).ok_or(AppError::EmptyDataset)?;

    Ok(LatestReading {
        value: GlucoseValue::resolve(newest.historic_mmol_l, newest.scan_mmol_l),
        timestamp: newest.device_timestamp,
    })
}
