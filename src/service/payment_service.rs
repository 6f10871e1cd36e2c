use crate::domain::payment::{Payment, PaymentRequest};
use crate::error::PaymentError;
use crate::gateways::PaymentGateway;
use crate::repo::payments_repo::{PaymentRecordInput, PaymentsRepo};
use std::sync::Arc;

#[derive(Clone)]
pub struct PaymentService {
    pub gateway: Arc<dyn PaymentGateway>,
    pub repo: Arc<dyn PaymentsRepo>,
}

impl PaymentService {
    pub async fn create_payment_request(&self, req: PaymentRequest) -> Result<Payment, PaymentError> {
        let charge = self.gateway.charge(&req).await?;

        // status/amount/currency mirror the returned charge, not the raw request
        let record = PaymentRecordInput {
            status: charge.status.clone(),
            amount: charge.amount,
            currency: charge.currency.clone(),
            charge,
        };

        self.repo.create(record).await
    }

    pub async fn find(&self, id: i64) -> Result<Payment, PaymentError> {
        let payment = self.repo.find(id).await?;

        if payment.status.is_terminal() {
            return Ok(payment);
        }

        let charge = self.gateway.get_charge(&payment.charge.id).await?;
        self.repo.update_status(id, charge.status).await?;

        // the post-update record is re-read; the store owns its canonical form
        self.repo.find(id).await
    }
}
