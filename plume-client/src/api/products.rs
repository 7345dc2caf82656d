//! Product endpoints

use crate::{AdminClient, ClientResult, HttpTransport};
use shared::models::{Product, ProductPayload, ProductUpdate};
use shared::response::Paginated;

impl<T: HttpTransport> AdminClient<T> {
    /// List products, one page at a time
    pub async fn list_products(&self, page: Option<u32>) -> ClientResult<Paginated<Product>> {
        let path = match page {
            Some(page) => format!("/products/?page={}", page),
            None => "/products/".to_string(),
        };
        self.transport().get(&path).await
    }

    pub async fn get_product(&self, id: i64) -> ClientResult<Product> {
        self.transport().get(&format!("/products/{}/", id)).await
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> ClientResult<Product> {
        self.transport().post("/products/", payload).await
    }

    /// Full replace of a product
    pub async fn update_product(&self, id: i64, payload: &ProductPayload) -> ClientResult<Product> {
        self.transport()
            .put(&format!("/products/{}/", id), payload)
            .await
    }

    /// Partial update of a product
    pub async fn patch_product(&self, id: i64, update: &ProductUpdate) -> ClientResult<Product> {
        self.transport()
            .patch(&format!("/products/{}/", id), update)
            .await
    }

    pub async fn delete_product(&self, id: i64) -> ClientResult<()> {
        self.transport().delete(&format!("/products/{}/", id)).await
    }
}
