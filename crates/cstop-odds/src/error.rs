//! Error types for the odds engine.

/// Errors that can occur when configuring a roll space.
///
/// The probability queries themselves are infallible; only a degenerate
/// dice configuration is rejected, and that happens at construction time.
#[derive(Debug, thiserror::Error)]
pub enum OddsError {
    /// Two-die totals need at least two dice in the roll.
    #[error("need at least two dice to form a pair, got {0}")]
    TooFewDice(u32),

    /// A die with fewer than two sides has nothing to enumerate.
    #[error("need at least two sides per die, got {0}")]
    TooFewSides(u32),
}

/// Convenience result type for odds operations.
pub type OddsResult<T> = Result<T, OddsError>;
