use crate::domain::payment::{Payment, Status};
use crate::error::PaymentError;
use crate::repo::payments_repo::{PaymentRecordInput, PaymentsRepo};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryPaymentsRepo {
    next_id: AtomicI64,
    table: RwLock<HashMap<i64, Arc<RwLock<Payment>>>>,
}

impl InMemoryPaymentsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    // The table lock is dropped before the record lock is taken.
    async fn entry(&self, id: i64) -> Result<Arc<RwLock<Payment>>, PaymentError> {
        let table = self.table.read().await;
        table.get(&id).cloned().ok_or(PaymentError::NotFound)
    }
}

#[async_trait::async_trait]
impl PaymentsRepo for InMemoryPaymentsRepo {
    async fn create(&self, record: PaymentRecordInput) -> Result<Payment, PaymentError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let now = chrono::Utc::now();
        let payment = Payment {
            id,
            status: record.status,
            amount: record.amount,
            currency: record.currency,
            charge: record.charge,
            created_at: now,
            updated_at: now,
        };

        let mut table = self.table.write().await;
        table.insert(id, Arc::new(RwLock::new(payment.clone())));
        Ok(payment)
    }

    async fn find(&self, id: i64) -> Result<Payment, PaymentError> {
        let entry = self.entry(id).await?;
        let payment = entry.read().await;
        Ok(payment.clone())
    }

    async fn update_status(&self, id: i64, status: Status) -> Result<(), PaymentError> {
        let entry = self.entry(id).await?;
        let mut payment = entry.write().await;
        payment.status = status.clone();
        payment.charge.status = status;
        payment.updated_at = chrono::Utc::now();
        Ok(())
    }
}
