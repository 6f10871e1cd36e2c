use crate::domain::payment::{GatewayCharge, Payment, Status};
use crate::error::PaymentError;

pub struct PaymentRecordInput {
    pub status: Status,
    pub amount: i64,
    pub currency: String,
    pub charge: GatewayCharge,
}

#[async_trait::async_trait]
pub trait PaymentsRepo: Send + Sync {
    async fn create(&self, record: PaymentRecordInput) -> Result<Payment, PaymentError>;

    async fn find(&self, id: i64) -> Result<Payment, PaymentError>;

    async fn update_status(&self, id: i64, status: Status) -> Result<(), PaymentError>;
}
