use crate::domain::payment::{GatewayCharge, PaymentRequest};
use crate::error::PaymentError;

pub mod omise;

#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, req: &PaymentRequest) -> Result<GatewayCharge, PaymentError>;

    async fn get_charge(&self, charge_id: &str) -> Result<GatewayCharge, PaymentError>;
}
