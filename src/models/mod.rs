pub mod dataset;
pub mod latest;
pub mod reading;

pub use dataset::{Dataset, Window};
pub use latest::{GlucoseStatus, GlucoseValue, LatestReading};
pub use reading::Reading;
