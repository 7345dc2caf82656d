//! Collection endpoints

use crate::{AdminClient, ClientResult, HttpTransport};
use shared::models::{Collection, CollectionCreate, CollectionUpdate};

impl<T: HttpTransport> AdminClient<T> {
    pub async fn list_collections(&self) -> ClientResult<Vec<Collection>> {
        self.transport().get("/collections/").await
    }

    pub async fn get_collection(&self, id: i64) -> ClientResult<Collection> {
        self.transport().get(&format!("/collections/{}/", id)).await
    }

    pub async fn create_collection(&self, payload: &CollectionCreate) -> ClientResult<Collection> {
        self.transport().post("/collections/", payload).await
    }

    pub async fn update_collection(
        &self,
        id: i64,
        update: &CollectionUpdate,
    ) -> ClientResult<Collection> {
        self.transport()
            .patch(&format!("/collections/{}/", id), update)
            .await
    }

    pub async fn delete_collection(&self, id: i64) -> ClientResult<()> {
        self.transport()
            .delete(&format!("/collections/{}/", id))
            .await
    }
}
