//! Contact service behaviour against the in-memory repository.

mod mocks;

use contacts_api::error::{ContactError, StoreError};
use contacts_api::models::ContactInput;
use contacts_api::services::{ContactService, ContactServiceImpl};
use mocks::{sample_contact, MockContactRepository};
use std::sync::Arc;

fn setup() -> (MockContactRepository, ContactServiceImpl) {
    let repo = MockContactRepository::new();
    let service = ContactServiceImpl::new(Arc::new(repo.clone()));
    (repo, service)
}

#[tokio::test]
async fn test_create_contact_returns_stored_record() {
    let (repo, service) = setup();

    let contact = service
        .create_contact(ContactInput::new("Jane Doe", "+1 555 0100"))
        .await
        .unwrap();

    assert_eq!(contact.name, "Jane Doe");
    assert_eq!(contact.phone, "+1 555 0100");
    assert!(!contact.id.as_str().is_empty());
    assert_eq!(contact.created_at, contact.updated_at);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_create_trims_fields() {
    let (_repo, service) = setup();

    let contact = service
        .create_contact(ContactInput::new("  Jane Doe  ", " 555 "))
        .await
        .unwrap();

    assert_eq!(contact.name, "Jane Doe");
    assert_eq!(contact.phone, "555");
}

#[tokio::test]
async fn test_create_missing_name_is_rejected_before_store() {
    let (repo, service) = setup();

    let input = ContactInput {
        name: None,
        phone: Some("555".to_string()),
    };
    let err = service.create_contact(input).await.unwrap_err();

    assert!(matches!(err, ContactError::MissingFields));
    assert_eq!(err.to_string(), "Name and phone are required");
    assert_eq!(repo.get_call_count("create"), 0);
}

#[tokio::test]
async fn test_create_empty_phone_is_missing() {
    let (_repo, service) = setup();

    let err = service
        .create_contact(ContactInput::new("Jane", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, ContactError::MissingFields));
}

#[tokio::test]
async fn test_create_blank_name_fails_validation() {
    let (repo, service) = setup();

    let err = service
        .create_contact(ContactInput::new("   ", "555"))
        .await
        .unwrap_err();

    match err {
        ContactError::Validation(errors) => {
            assert_eq!(
                errors.to_string(),
                "Contact validation failed: name: Please provide a name"
            );
        }
        other => panic!("Expected validation error, got: {:?}", other),
    }
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_create_too_long_fields_fail_validation() {
    let (_repo, service) = setup();

    let err = service
        .create_contact(ContactInput::new("n".repeat(101), "1".repeat(21)))
        .await
        .unwrap_err();

    match err {
        ContactError::Validation(errors) => assert_eq!(errors.len(), 2),
        other => panic!("Expected validation error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_list_contacts_newest_first() {
    let (_repo, service) = setup();

    let first = service
        .create_contact(ContactInput::new("First", "1"))
        .await
        .unwrap();
    let second = service
        .create_contact(ContactInput::new("Second", "2"))
        .await
        .unwrap();

    let contacts = service.list_contacts().await.unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].id, second.id);
    assert_eq!(contacts[1].id, first.id);
}

#[tokio::test]
async fn test_list_store_failure() {
    let (repo, service) = setup();
    repo.set_failing(true);

    let err = service.list_contacts().await.unwrap_err();
    assert!(matches!(err, ContactError::Store(StoreError::Connection(_))));
}

#[tokio::test]
async fn test_get_contact() {
    let (repo, service) = setup();
    repo.add_contact(sample_contact("abc", "Jane", "555", 10));

    let contact = service.get_contact("abc").await.unwrap();
    assert_eq!(contact.name, "Jane");
}

#[tokio::test]
async fn test_get_unknown_contact_is_not_found() {
    let (_repo, service) = setup();

    let err = service.get_contact("does-not-exist").await.unwrap_err();
    assert!(matches!(err, ContactError::NotFound));
    assert_eq!(err.to_string(), "Contact not found");
}

#[tokio::test]
async fn test_update_changes_only_phone_and_advances_updated_at() {
    let (_repo, service) = setup();
    let created = service
        .create_contact(ContactInput::new("Jane Doe", "111"))
        .await
        .unwrap();

    let updated = service
        .update_contact(created.id.as_str(), ContactInput::new("Jane Doe", "222"))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Jane Doe");
    assert_eq!(updated.phone, "222");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    let fetched = service.get_contact(created.id.as_str()).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_unknown_contact_is_not_found() {
    let (_repo, service) = setup();

    let err = service
        .update_contact("missing", ContactInput::new("Jane", "555"))
        .await
        .unwrap_err();
    assert!(matches!(err, ContactError::NotFound));
}

#[tokio::test]
async fn test_update_validates_before_lookup() {
    let (repo, service) = setup();

    let err = service
        .update_contact("missing", ContactInput::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ContactError::MissingFields));

    let err = service
        .update_contact("missing", ContactInput::new("Jane", "1".repeat(30)))
        .await
        .unwrap_err();
    assert!(matches!(err, ContactError::Validation(_)));
    assert_eq!(repo.get_call_count("update"), 0);
}

#[tokio::test]
async fn test_update_store_failure() {
    let (repo, service) = setup();
    repo.add_contact(sample_contact("c1", "Jane", "111", 1_600_000_000));
    repo.set_failing(true);

    let err = service
        .update_contact("c1", ContactInput::new("Jane", "222"))
        .await
        .unwrap_err();

    assert!(matches!(err, ContactError::Store(StoreError::Connection(_))));
    assert_eq!(repo.get_call_count("update"), 1);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let (_repo, service) = setup();
    let created = service
        .create_contact(ContactInput::new("Jane", "555"))
        .await
        .unwrap();

    service.delete_contact(created.id.as_str()).await.unwrap();

    let err = service.get_contact(created.id.as_str()).await.unwrap_err();
    assert!(matches!(err, ContactError::NotFound));
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let (_repo, service) = setup();
    let created = service
        .create_contact(ContactInput::new("Jane", "555"))
        .await
        .unwrap();

    service.delete_contact(created.id.as_str()).await.unwrap();
    let err = service.delete_contact(created.id.as_str()).await.unwrap_err();
    assert!(matches!(err, ContactError::NotFound));
}

#[tokio::test]
async fn test_check_health() {
    let (repo, service) = setup();
    assert!(service.check_health().await.is_ok());

    repo.set_failing(true);
    assert!(service.check_health().await.is_err());
}
