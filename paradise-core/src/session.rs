use paradise_shared::User;
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Top-level screens of the application
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Website,
    Booking,
    Customer,
    Staff,
    Admin,
}

/// Who is signed in and which screen is showing
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
    view: View,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn open_booking(&mut self) {
        self.view = View::Booking;
    }

    pub fn back_to_website(&mut self) {
        self.view = View::Website;
    }

    /// Keeps the current view; the auth dialog opens on top of it
    pub fn sign_in(&mut self, user: User) {
        tracing::debug!("Session user set to {}", user.id);
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!("Signed out {}", user.id);
        }
        self.view = View::Website;
    }

    /// Shortcut into the staff dashboard with the front-desk account
    pub fn staff_access(&mut self) {
        self.user = Some(User::staff_demo());
        self.view = View::Staff;
    }

    /// Shortcut into the admin dashboard with the administrator account
    pub fn admin_access(&mut self) {
        self.user = Some(User::admin_demo());
        self.view = View::Admin;
    }

    pub fn open_profile(&mut self) -> CoreResult<()> {
        if self.user.is_none() {
            return Err(CoreError::AuthError("sign in to view your profile".to_string()));
        }
        self.view = View::Customer;
        Ok(())
    }
}
