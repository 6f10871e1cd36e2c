use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment not found")]
    NotFound,
    #[error("unknown charge status: {0}")]
    UnknownStatus(String),
    #[error("gateway error: {0}")]
    Gateway(anyhow::Error),
    #[error("store error: {0}")]
    Store(anyhow::Error),
}

impl PaymentError {
    pub fn gateway(err: impl Into<anyhow::Error>) -> Self {
        PaymentError::Gateway(err.into())
    }

    pub fn store(err: impl Into<anyhow::Error>) -> Self {
        PaymentError::Store(err.into())
    }
}
