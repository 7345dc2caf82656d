//! Category endpoints

use crate::{AdminClient, ClientResult, HttpTransport};
use shared::models::{Category, CategoryCreate, CategoryUpdate};

impl<T: HttpTransport> AdminClient<T> {
    /// All categories with their subcategories
    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.transport().get("/categories/").await
    }

    pub async fn get_category(&self, id: i64) -> ClientResult<Category> {
        self.transport().get(&format!("/categories/{}/", id)).await
    }

    pub async fn create_category(&self, payload: &CategoryCreate) -> ClientResult<Category> {
        self.transport().post("/categories/", payload).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        update: &CategoryUpdate,
    ) -> ClientResult<Category> {
        self.transport()
            .patch(&format!("/categories/{}/", id), update)
            .await
    }

    pub async fn delete_category(&self, id: i64) -> ClientResult<()> {
        self.transport()
            .delete(&format!("/categories/{}/", id))
            .await
    }
}
