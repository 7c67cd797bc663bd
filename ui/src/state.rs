use yewdux::prelude::*;

/// The signed-in user as published by the authentication provider.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub email: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<AuthUser>,
}

/// Global application state.
///
/// Owned and written by the hosting application (sign-in and sign-out);
/// the booking hooks only read from it.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct State {
    pub auth: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        self.auth.user.is_some()
    }

    pub fn user_email(&self) -> Option<&str> {
        self.auth.user.as_ref().map(|user| user.email.as_str())
    }

    pub fn user_name(&self) -> Option<&str> {
        self.auth.user.as_ref().map(|user| user.display_name.as_str())
    }

    pub fn login(&mut self, user: AuthUser) {
        self.auth.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.auth.user = None;
    }
}
