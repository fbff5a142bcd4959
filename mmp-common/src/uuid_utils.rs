//! UUID utilities

use uuid::Uuid;

/// Generate a new UUIDv4
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

/// Short display form (first 8 hex digits) used in log lines
pub fn short(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}
