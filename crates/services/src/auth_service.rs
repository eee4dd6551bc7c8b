use std::sync::Arc;

use revise_core::model::{AuthSession, User, UserCode};
use storage::repository::{
    AuthRepository, SessionStore, clear_auth_session, load_auth_session, save_auth_session,
};
use tracing::{info, warn};

use crate::error::AuthError;

/// Login, signup and logout, keeping the session store in step with the server.
///
/// The store is only written after the server accepts the request, so a
/// rejected login leaves whatever was persisted before untouched.
#[derive(Clone)]
pub struct AuthService {
    auth: Arc<dyn AuthRepository>,
    store: Arc<dyn SessionStore>,
}

impl AuthService {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthRepository>, store: Arc<dyn SessionStore>) -> Self {
        Self { auth, store }
    }

    /// Read the persisted session once at startup.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the store cannot be read.
    pub async fn restore(&self) -> Result<Option<AuthSession>, AuthError> {
        let session = load_auth_session(self.store.as_ref())
            .await
            .map_err(AuthError::SessionStore)?;
        if let Some(session) = &session {
            info!(user_id = %session.user_id(), "restored session");
        }
        Ok(session)
    }

    /// # Errors
    ///
    /// Returns `AuthError::InvalidCode` for a blank code without contacting the server.
    /// Returns `AuthError::Login` if the server rejects the code.
    /// Returns `AuthError::SessionStore` if the accepted session cannot be persisted.
    pub async fn login(&self, raw_code: &str) -> Result<AuthSession, AuthError> {
        let code = UserCode::parse(raw_code)?;
        let user = self.auth.login(&code).await.map_err(|err| {
            warn!(error = %err, "login rejected");
            AuthError::Login(err)
        })?;
        let session = self.persist(user).await?;
        info!(user_id = %session.user_id(), "logged in");
        Ok(session)
    }

    /// Create an account and log straight into it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Signup` if the server refuses.
    /// Returns `AuthError::SessionStore` if the new session cannot be persisted.
    pub async fn signup(&self) -> Result<AuthSession, AuthError> {
        let user = self.auth.signup().await.map_err(AuthError::Signup)?;
        let session = self.persist(user).await?;
        info!(user_id = %session.user_id(), "signed up");
        Ok(session)
    }

    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the keys cannot be removed.
    pub async fn logout(&self) -> Result<(), AuthError> {
        clear_auth_session(self.store.as_ref())
            .await
            .map_err(AuthError::SessionStore)?;
        info!("logged out");
        Ok(())
    }

    async fn persist(&self, user: User) -> Result<AuthSession, AuthError> {
        let session = AuthSession::from(user);
        save_auth_session(self.store.as_ref(), &session)
            .await
            .map_err(AuthError::SessionStore)?;
        Ok(session)
    }
}
