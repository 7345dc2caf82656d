//! Auth endpoints

use crate::{AdminClient, ClientError, ClientResult, HttpTransport};
use shared::client::{AccessToken, CurrentUser, LoginRequest, RefreshRequest, TokenPair};

impl<T: HttpTransport> AdminClient<T> {
    /// Log in and store the token pair in the session
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<TokenPair> {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let pair: TokenPair = self.transport().post("/login/", &req).await?;
        self.session().set_tokens(&pair);
        tracing::debug!(username, "logged in");
        Ok(pair)
    }

    /// Exchange the stored refresh token for a new access token
    pub async fn refresh(&self) -> ClientResult<()> {
        let refresh = self
            .session()
            .refresh_token()
            .ok_or(ClientError::Unauthorized)?;

        let token: AccessToken = self
            .transport()
            .post("/token/refresh/", &RefreshRequest { refresh })
            .await?;
        self.session().set_access(token.access);
        Ok(())
    }

    /// Current authenticated user
    pub async fn me(&self) -> ClientResult<CurrentUser> {
        self.transport().get("/me/").await
    }

    /// Drop the stored tokens. Tokens are stateless, so no server call is
    /// made; they expire on their own.
    pub fn logout(&self) {
        self.session().clear();
        tracing::debug!("logged out");
    }
}
