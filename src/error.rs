use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// Everything here is a construction-time rejection: once a [`crate::sim::World`]
/// exists, ticking it is infallible.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid body parameter (non-positive radius, restitution out of (0, 1],
    /// non-finite position/velocity).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Invalid simulation configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let e = Error::InvalidParam("radius must be finite and > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("radius"));
    }
}
