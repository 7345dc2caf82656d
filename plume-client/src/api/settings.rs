//! Store settings endpoints (singleton resource)

use crate::{AdminClient, ClientResult, HttpTransport};
use shared::models::{StoreSettings, StoreSettingsUpdate};

impl<T: HttpTransport> AdminClient<T> {
    pub async fn get_settings(&self) -> ClientResult<StoreSettings> {
        self.transport().get("/settings/").await
    }

    pub async fn update_settings(
        &self,
        update: &StoreSettingsUpdate,
    ) -> ClientResult<StoreSettings> {
        self.transport().patch("/settings/", update).await
    }
}
