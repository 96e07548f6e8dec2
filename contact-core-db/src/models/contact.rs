use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::bounded_text::utf8_capacity;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// Database model for a contact.
///
/// Only the attributes a passport needs to be shown next to its owner.
/// A contact owns zero or one passport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactModel {
    pub id: Uuid,
    pub first_name: HeaplessString<{ utf8_capacity(100) }>,
    pub last_name: HeaplessString<{ utf8_capacity(100) }>,
    pub email: Option<HeaplessString<{ utf8_capacity(255) }>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for ContactModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
