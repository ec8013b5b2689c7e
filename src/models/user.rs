use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Warehouse roles. Variants are declared in ascending privilege order so the
/// derived `Ord` gives Super Admin > Admin > Warehouse Manager > Inventory
/// Executive > Staff.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
pub enum UserRole {
    Staff,
    #[strum(serialize = "Inventory Executive")]
    InventoryExecutive,
    #[strum(serialize = "Warehouse Manager")]
    WarehouseManager,
    Admin,
    #[strum(serialize = "Super Admin")]
    SuperAdmin,
}

/// A user record. Credentials are stored and compared in plaintext; hashing
/// and lockout are out of scope for this crate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub username: String,
    pub password: String,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_privilege_ordering() {
        assert!(UserRole::SuperAdmin > UserRole::Admin);
        assert!(UserRole::Admin > UserRole::WarehouseManager);
        assert!(UserRole::WarehouseManager > UserRole::InventoryExecutive);
        assert!(UserRole::InventoryExecutive > UserRole::Staff);
    }

    #[test]
    fn role_display_round_trips() {
        assert_eq!(UserRole::SuperAdmin.to_string(), "Super Admin");
        assert_eq!(
            UserRole::from_str("Warehouse Manager").unwrap(),
            UserRole::WarehouseManager
        );
    }
}
