use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// No chart can be derived from zero samples; the host renders an
    /// explicit empty state instead.
    #[error("cannot derive analytics from an empty series")]
    EmptySeries,
}
