use crate::error::PaymentError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
    Successful,
    Failed,
    Expired,
    Reversed,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Pending)
    }
}

impl std::str::FromStr for Status {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Status::Pending),
            "successful" => Ok(Status::Successful),
            "failed" => Ok(Status::Failed),
            "expired" => Ok(Status::Expired),
            "reversed" => Ok(Status::Reversed),
            other => Err(PaymentError::UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatewayCharge {
    pub id: String,
    pub status: Status,
    pub amount: i64,
    pub currency: String,
    pub authorize_uri: String,
    pub source_type: String,
    pub return_uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payment {
    pub id: i64,
    pub status: Status,
    pub amount: i64,
    pub currency: String,
    pub charge: GatewayCharge,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentRequest {
    pub amount: i64,
    pub currency: String,
    pub return_uri: String,
    pub source_type: String,
}

#[derive(Debug, Serialize)]
pub struct CreatePaymentResponse {
    pub id: i64,
    pub authorized_uri: String,
}

#[derive(Debug, Serialize)]
pub struct GetPaymentResponse {
    pub id: i64,
    pub status: Status,
    pub amount: i64,
    pub currency: String,
    pub source_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
}
