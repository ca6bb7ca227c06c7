use serde::{Deserialize, Serialize};

/// Which dashboard a signed-in user may reach
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Staff,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn customer(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            phone: None,
            role: Role::Customer,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        let phone = phone.into();
        self.phone = if phone.is_empty() { None } else { Some(phone) };
        self
    }

    /// Front-desk account used by the staff shortcut
    pub fn staff_demo() -> Self {
        Self {
            id: "staff-1".to_string(),
            email: "staff@hotelparadise.com".to_string(),
            name: "Front Desk".to_string(),
            phone: None,
            role: Role::Staff,
        }
    }

    /// Administrator account used by the admin shortcut
    pub fn admin_demo() -> Self {
        Self {
            id: "admin-1".to_string(),
            email: "admin@hotelparadise.com".to_string(),
            name: "Administrator".to_string(),
            phone: None,
            role: Role::Admin,
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self.role, Role::Staff | Role::Admin)
    }
}
