use thiserror::Error;

#[derive(Error, Debug)]
pub enum TipError {
    /// The request to the tips endpoint failed before producing a response.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The tips endpoint did not reply within the timeout window.
    #[error("Server didn't reply after {0} seconds")]
    TimedOut(u64),
    /// A carousel needs at least two records to close the cycle.
    #[error("Need at least 2 tips to build a carousel, got {0}")]
    TooFewTips(usize),
}

pub type TipResult<T> = Result<T, TipError>;
