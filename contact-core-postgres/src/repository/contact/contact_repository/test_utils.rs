use chrono::Utc;
use contact_core_db::models::contact::ContactModel;
use heapless::String as HeaplessString;
use uuid::Uuid;

pub fn create_test_contact() -> ContactModel {
    create_test_contact_named("Erika", "Mustermann")
}

pub fn create_test_contact_named(first_name: &str, last_name: &str) -> ContactModel {
    let now = Utc::now();
    ContactModel {
        id: Uuid::new_v4(),
        first_name: HeaplessString::try_from(first_name).unwrap(),
        last_name: HeaplessString::try_from(last_name).unwrap(),
        email: Some(HeaplessString::try_from("erika@example.com").unwrap()),
        created_at: now,
        updated_at: now,
    }
}
