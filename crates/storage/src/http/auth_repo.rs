use async_trait::async_trait;
use revise_core::model::{User, UserCode};
use tracing::debug;

use crate::repository::{AuthRepository, StorageError};

use super::wire::{LoginBody, SignupBody, UserWire};
use super::{HttpRepository, read_json, transport};

#[async_trait]
impl AuthRepository for HttpRepository {
    async fn login(&self, code: &UserCode) -> Result<User, StorageError> {
        let url = self.endpoint("/api/auth/login")?;
        debug!(%url, "POST login");
        let response = self
            .client
            .post(url)
            .json(&LoginBody {
                user_code: code.as_str(),
            })
            .send()
            .await
            .map_err(transport)?;
        let user: UserWire = read_json(response).await?;
        user.into_user()
    }

    async fn signup(&self) -> Result<User, StorageError> {
        let url = self.endpoint("/api/auth/signup")?;
        debug!(%url, "POST signup");
        let response = self
            .client
            .post(url)
            .json(&SignupBody {})
            .send()
            .await
            .map_err(transport)?;
        let user: UserWire = read_json(response).await?;
        user.into_user()
    }
}
