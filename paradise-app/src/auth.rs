use std::sync::Arc;

use paradise_core::{LoginForm, RegisterForm};
use paradise_shared::{DomainEvent, User};

use crate::error::AppResult;
use crate::state::AppState;

/// Submit the login tab. The session keeps its current view.
pub async fn login(state: &mut AppState, form: &LoginForm) -> AppResult<User> {
    let auth = Arc::clone(&state.auth);
    let user = auth.login(form).await?;

    let event = DomainEvent::UserSignedIn {
        user_id: user.id.clone(),
        email: user.email.clone(),
    };
    state.record(&event, &user);
    state.session.sign_in(user.clone());
    Ok(user)
}

/// Submit the register tab; the new account is signed in straight away
pub async fn register(state: &mut AppState, form: &RegisterForm) -> AppResult<User> {
    let auth = Arc::clone(&state.auth);
    let user = auth.register(form).await?;

    let event = DomainEvent::UserRegistered {
        user_id: user.id.clone(),
        email: user.email.clone(),
    };
    state.record(&event, &user);
    state.session.sign_in(user.clone());
    Ok(user)
}

pub fn logout(state: &mut AppState) {
    state.session.logout();
}
