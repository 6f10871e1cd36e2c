use paymentsvc::domain::payment::{GatewayCharge, Status};
use paymentsvc::error::PaymentError;
use paymentsvc::repo::memory::InMemoryPaymentsRepo;
use paymentsvc::repo::payments_repo::{PaymentRecordInput, PaymentsRepo};
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn assigns_sequential_ids_starting_at_one() {
    let repo = InMemoryPaymentsRepo::new();

    let first = repo.create(record(Status::Pending)).await.unwrap();
    let second = repo.create(record(Status::Pending)).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.created_at, first.updated_at);
}

#[tokio::test]
async fn find_returns_not_found_for_an_unknown_id() {
    let repo = InMemoryPaymentsRepo::new();

    let err = repo.find(99).await.unwrap_err();

    assert!(matches!(err, PaymentError::NotFound));
}

#[tokio::test]
async fn update_status_mirrors_into_the_embedded_charge() {
    let repo = InMemoryPaymentsRepo::new();
    let created = repo.create(record(Status::Pending)).await.unwrap();

    repo.update_status(created.id, Status::Successful).await.unwrap();
    let found = repo.find(created.id).await.unwrap();

    assert_eq!(found.status, Status::Successful);
    assert_eq!(found.charge.status, Status::Successful);
    assert_eq!(found.created_at, created.created_at);
    assert!(found.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_status_on_an_unknown_id_is_not_found() {
    let repo = InMemoryPaymentsRepo::new();

    let err = repo.update_status(5, Status::Failed).await.unwrap_err();

    assert!(matches!(err, PaymentError::NotFound));
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_assign_unique_ids() {
    let repo = Arc::new(InMemoryPaymentsRepo::new());

    let mut handles = Vec::new();
    for _ in 0..32 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.create(record(Status::Pending)).await.unwrap().id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 32);
    assert!(ids.iter().all(|id| (1..=32).contains(id)));
}

#[tokio::test]
async fn a_returned_snapshot_is_not_mutated_by_later_updates() {
    let repo = InMemoryPaymentsRepo::new();
    let created = repo.create(record(Status::Pending)).await.unwrap();

    repo.update_status(created.id, Status::Failed).await.unwrap();

    assert_eq!(created.status, Status::Pending);
    assert_eq!(created.charge.status, Status::Pending);
}

fn record(status: Status) -> PaymentRecordInput {
    PaymentRecordInput {
        status: status.clone(),
        amount: 2000,
        currency: "THB".to_string(),
        charge: GatewayCharge {
            id: "charge-1".to_string(),
            status,
            amount: 2000,
            currency: "THB".to_string(),
            authorize_uri: "http://auth".to_string(),
            source_type: "internet_banking_scb".to_string(),
            return_uri: "http://return".to_string(),
        },
    }
}
