//! Filter type endpoints
//!
//! Filter types are category-scoped; `/category-filters/` narrows the
//! listing to one category for the product form.

use crate::{AdminClient, ClientResult, HttpTransport};
use shared::models::{FilterType, FilterTypeCreate, FilterTypeUpdate};

impl<T: HttpTransport> AdminClient<T> {
    /// All filter types across categories
    pub async fn list_filter_types(&self) -> ClientResult<Vec<FilterType>> {
        self.transport().get("/filter-types/").await
    }

    /// Filter types scoped to one category
    pub async fn list_category_filters(&self, category: i64) -> ClientResult<Vec<FilterType>> {
        self.transport()
            .get(&format!("/category-filters/?category={}", category))
            .await
    }

    pub async fn create_filter_type(&self, payload: &FilterTypeCreate) -> ClientResult<FilterType> {
        self.transport().post("/filter-types/", payload).await
    }

    pub async fn update_filter_type(
        &self,
        id: i64,
        update: &FilterTypeUpdate,
    ) -> ClientResult<FilterType> {
        self.transport()
            .patch(&format!("/filter-types/{}/", id), update)
            .await
    }

    pub async fn delete_filter_type(&self, id: i64) -> ClientResult<()> {
        self.transport()
            .delete(&format!("/filter-types/{}/", id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::AdminClient;
    use crate::transport::stub::StubTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_category_filters_query() {
        let transport = StubTransport::new();
        transport.enqueue(json!([
            {"id": 1, "name": "Bed Size", "category": 3,
             "options": [{"id": 10, "name": "King"}, {"id": 11, "name": "Queen"}]}
        ]));
        let client = AdminClient::with_transport(transport);

        let filters = client.list_category_filters(3).await.unwrap();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].options.len(), 2);
        assert_eq!(
            client.transport().paths(),
            vec!["/category-filters/?category=3"]
        );
    }
}
