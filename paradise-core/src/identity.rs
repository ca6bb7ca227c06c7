use async_trait::async_trait;
use paradise_shared::{Masked, User};
use rand::Rng;
use serde::Deserialize;

use crate::latency::SimulatedLatency;
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: Masked<String>,
}

impl LoginForm {
    pub fn validate(&self) -> CoreResult<()> {
        if self.email.trim().is_empty() || self.password.is_blank() {
            return Err(CoreError::ValidationError("Please fill in all fields".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub password: Masked<String>,
    pub confirm_password: Masked<String>,
}

impl RegisterForm {
    /// Checks run in the order the dialog reports them
    pub fn validate(&self, min_password_length: usize) -> CoreResult<()> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_blank() {
            return Err(CoreError::ValidationError(
                "Please fill in all required fields".to_string(),
            ));
        }
        if self.password != self.confirm_password {
            return Err(CoreError::ValidationError(
                "Password confirmation does not match".to_string(),
            ));
        }
        if self.password.expose().chars().count() < min_password_length {
            return Err(CoreError::ValidationError(format!(
                "Password must be at least {} characters",
                min_password_length
            )));
        }
        Ok(())
    }
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check the login form and return the signed-in user
    async fn login(&self, form: &LoginForm) -> CoreResult<User>;

    /// Check the registration form and return the new account
    async fn register(&self, form: &RegisterForm) -> CoreResult<User>;
}

/// Accepts every well-formed form after a fixed delay. No credentials are checked.
pub struct SimulatedAuthService {
    latency: SimulatedLatency,
    min_password_length: usize,
}

impl SimulatedAuthService {
    pub fn new(latency: SimulatedLatency, min_password_length: usize) -> Self {
        Self {
            latency,
            min_password_length,
        }
    }
}

impl Default for SimulatedAuthService {
    fn default() -> Self {
        Self::new(SimulatedLatency::from_millis(1000), 6)
    }
}

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn random_user_id() -> String {
    let mut rng = rand::thread_rng();
    (0..9)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

#[async_trait]
impl AuthService for SimulatedAuthService {
    async fn login(&self, form: &LoginForm) -> CoreResult<User> {
        form.validate()?;
        self.latency.wait().await;

        tracing::info!("Signed in {}", form.email);
        Ok(User::customer("1", form.email.trim(), "User Demo"))
    }

    async fn register(&self, form: &RegisterForm) -> CoreResult<User> {
        form.validate(self.min_password_length)?;
        self.latency.wait().await;

        let user = User::customer(random_user_id(), form.email.trim(), form.name.trim())
            .with_phone(form.phone.trim());
        tracing::info!("Registered account {} for {}", user.id, user.email);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form(password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            name: "Tran Thi B".to_string(),
            email: "tranthib@email.com".to_string(),
            phone: "0912345678".to_string(),
            password: Masked::from(password),
            confirm_password: Masked::from(confirm),
        }
    }

    fn message(err: CoreError) -> String {
        err.to_string()
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_returns_demo_user() {
        let auth = SimulatedAuthService::default();
        let form = LoginForm {
            email: "guest@example.com".to_string(),
            password: Masked::from("whatever"),
        };

        let user = auth.login(&form).await.unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "User Demo");
        assert_eq!(user.email, "guest@example.com");
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let auth = SimulatedAuthService::new(SimulatedLatency::none(), 6);
        let form = LoginForm {
            email: "guest@example.com".to_string(),
            password: Masked::default(),
        };

        let err = auth.login(&form).await.unwrap_err();
        assert_eq!(message(err), "Please fill in all fields");
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_synthesizes_user() {
        let auth = SimulatedAuthService::default();
        let user = auth.register(&register_form("secret1", "secret1")).await.unwrap();

        assert_eq!(user.id.len(), 9);
        assert!(user.id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_eq!(user.name, "Tran Thi B");
        assert_eq!(user.phone.as_deref(), Some("0912345678"));
    }

    #[test]
    fn test_register_validation_order() {
        let mut form = register_form("abc", "abd");
        form.name.clear();
        assert_eq!(
            message(form.validate(6).unwrap_err()),
            "Please fill in all required fields"
        );

        let form = register_form("abc", "abd");
        assert_eq!(
            message(form.validate(6).unwrap_err()),
            "Password confirmation does not match"
        );

        let form = register_form("abc", "abc");
        assert_eq!(
            message(form.validate(6).unwrap_err()),
            "Password must be at least 6 characters"
        );

        assert!(register_form("abcdef", "abcdef").validate(6).is_ok());
    }

    #[test]
    fn test_form_debug_hides_password() {
        let form = register_form("topsecret", "topsecret");
        let rendered = format!("{:?}", form);
        assert!(!rendered.contains("topsecret"));
    }
}
