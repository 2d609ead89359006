use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    #[error("Invalid UTC offset: {0} hours")]
    InvalidOffset(f64),

    /// The primary ephemeris could not produce positions.
    #[error("Ephemeris Error: {0}")]
    Ephemeris(String),
}
