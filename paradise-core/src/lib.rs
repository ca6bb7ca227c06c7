pub mod identity;
pub mod latency;
pub mod session;

pub use identity::{AuthService, LoginForm, RegisterForm, SimulatedAuthService};
pub use latency::SimulatedLatency;
pub use session::{Session, View};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Authentication required: {0}")]
    AuthError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
