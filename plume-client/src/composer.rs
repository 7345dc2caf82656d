//! Network half of the product variant composer
//!
//! The draft itself lives in `shared::draft` and is pure; this module wires
//! it to the API: hydrate a draft from a fetched product, merge axes in from
//! another product, gather the form's reference data, and submit.
//!
//! Remote failures leave the draft untouched. There is no retry policy; the
//! caller re-triggers the operation.

use crate::{AdminClient, ClientError, ClientResult, HttpTransport};
use shared::draft::{ImportAxis, ProductDraft, inline_svg_icon};
use shared::models::{Category, FilterType, Product, StyleGroup};

/// Maximum serialized payload size accepted for submission, in bytes.
///
/// Payloads past this point almost always mean raster data smuggled into an
/// inline icon; the server would reject them anyway, so the check runs
/// before any bytes leave the client.
pub const MAX_PAYLOAD_BYTES: usize = 2_500_000;

/// Reference data the product form needs besides the product itself
#[derive(Debug, Default)]
pub struct FormContext {
    pub categories: Vec<Category>,
    pub filter_types: Vec<FilterType>,
    pub style_library: Vec<StyleGroup>,
    /// Human-readable notes for the fetches that failed; the corresponding
    /// collections stay empty
    pub warnings: Vec<String>,
}

impl FormContext {
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl<T: HttpTransport> AdminClient<T> {
    /// Fetch a product and hydrate an edit draft from it
    pub async fn load_draft(&self, product_id: i64) -> ClientResult<ProductDraft> {
        let product = self.get_product(product_id).await?;
        Ok(ProductDraft::from_product(product))
    }

    /// Merge one axis of another product into the draft.
    ///
    /// The draft is only touched after the fetch succeeds. Returns how many
    /// entries were appended.
    pub async fn import_from_product(
        &self,
        draft: &mut ProductDraft,
        source_id: i64,
        axis: ImportAxis,
    ) -> ClientResult<usize> {
        let source = self.get_product(source_id).await?;
        Ok(draft.import_axis(&source, axis))
    }

    /// Validate, normalize and submit a draft.
    ///
    /// Create or update is decided by the draft's `existing_id`. Validation
    /// and the payload size guard both run before any request is issued.
    pub async fn submit_draft(&self, draft: &ProductDraft) -> ClientResult<Product> {
        let payload = draft.to_payload()?;

        let size = serde_json::to_vec(&payload)?.len();
        if size > MAX_PAYLOAD_BYTES {
            return Err(ClientError::PayloadTooLarge {
                size,
                limit: MAX_PAYLOAD_BYTES,
            });
        }

        match draft.existing_id {
            Some(id) => self.update_product(id, &payload).await,
            None => self.create_product(&payload).await,
        }
    }

    /// Fetch the form's reference data concurrently.
    ///
    /// The three fetches are independent; one failing does not block the
    /// others. Failed parts come back empty with a warning attached.
    pub async fn load_form_context(&self, category: Option<i64>) -> FormContext {
        let filter_types = async {
            match category {
                Some(category) => self.list_category_filters(category).await,
                None => self.list_filter_types().await,
            }
        };

        let (categories, filter_types, style_library) = tokio::join!(
            self.list_categories(),
            filter_types,
            self.style_library(),
        );

        let mut context = FormContext::default();

        match categories {
            Ok(categories) => context.categories = categories,
            Err(err) => {
                tracing::warn!(%err, "category fetch failed");
                context.warnings.push(format!("categories: {err}"));
            }
        }
        match filter_types {
            Ok(filter_types) => context.filter_types = filter_types,
            Err(err) => {
                tracing::warn!(%err, "filter type fetch failed");
                context.warnings.push(format!("filter types: {err}"));
            }
        }
        match style_library {
            Ok(style_library) => context.style_library = style_library,
            Err(err) => {
                tracing::warn!(%err, "style library fetch failed");
                context.warnings.push(format!("style library: {err}"));
            }
        }

        context
    }

    /// Reusable style groups offered by the form's import picker
    pub async fn style_library(&self) -> ClientResult<Vec<StyleGroup>> {
        self.transport().get("/style-library/").await
    }

    /// Resolve a style-option icon to either inline markup or an uploaded
    /// file URL.
    ///
    /// Markup that minifies under the inline limit and carries no data URI
    /// is inlined without a network call; everything else is uploaded and
    /// the stored URL returned.
    pub async fn resolve_svg_icon(&self, file_name: &str, markup: &str) -> ClientResult<String> {
        match inline_svg_icon(markup) {
            Ok(inlined) => Ok(inlined),
            Err(reason) => {
                tracing::debug!(file_name, %reason, "inlining refused, uploading icon");
                let stored = self
                    .upload_file(file_name, markup.as_bytes().to_vec())
                    .await?;
                Ok(stored.url)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdminClient;
    use crate::transport::stub::StubTransport;
    use serde_json::json;

    fn minimal_draft() -> ProductDraft {
        let mut draft = ProductDraft::new();
        draft.name = "Oslo Bed".to_string();
        draft.category = Some(3);
        draft.price = 499.0;
        draft.images = vec!["/media/oslo.webp".to_string()];
        draft
    }

    fn product_json(id: i64) -> serde_json::Value {
        json!({"id": id, "name": "Oslo Bed", "category": 3, "price": 499.0})
    }

    #[tokio::test]
    async fn test_submit_new_draft_posts() {
        let transport = StubTransport::new();
        transport.enqueue(product_json(7));
        let client = AdminClient::with_transport(transport);

        let product = client.submit_draft(&minimal_draft()).await.unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(client.transport().paths(), vec!["/products/"]);
    }

    #[tokio::test]
    async fn test_submit_existing_draft_puts() {
        let transport = StubTransport::new();
        transport.enqueue(product_json(7));
        let client = AdminClient::with_transport(transport);

        let mut draft = minimal_draft();
        draft.existing_id = Some(7);

        client.submit_draft(&draft).await.unwrap();
        assert_eq!(client.transport().paths(), vec!["/products/7/"]);
        let calls = client.transport().calls.lock().unwrap();
        assert_eq!(calls[0].method, "PUT");
    }

    #[tokio::test]
    async fn test_invalid_discount_never_reaches_the_transport() {
        let client = AdminClient::with_transport(StubTransport::new());

        let mut draft = minimal_draft();
        draft.discount_percent = 100.0;

        let err = client.submit_draft(&draft).await.unwrap_err();
        assert!(matches!(err, ClientError::Draft(_)));
        assert_eq!(client.transport().call_count(), 0);
    }

    #[tokio::test]
    async fn test_oversized_payload_never_reaches_the_transport() {
        let client = AdminClient::with_transport(StubTransport::new());

        let mut draft = minimal_draft();
        draft.long_description = "x".repeat(MAX_PAYLOAD_BYTES + 1);

        let err = client.submit_draft(&draft).await.unwrap_err();
        assert!(matches!(err, ClientError::PayloadTooLarge { .. }));
        assert_eq!(client.transport().call_count(), 0);
    }

    #[tokio::test]
    async fn test_just_under_the_payload_limit_submits() {
        let transport = StubTransport::new();
        transport.enqueue(product_json(7));
        let client = AdminClient::with_transport(transport);

        let mut draft = minimal_draft();
        // Leave room for the other payload fields and the JSON framing.
        draft.long_description = "x".repeat(MAX_PAYLOAD_BYTES - 1_000);

        client.submit_draft(&draft).await.unwrap();
        assert_eq!(client.transport().call_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_import_leaves_draft_untouched() {
        // Null response makes the product fetch fail to decode.
        let client = AdminClient::with_transport(StubTransport::new());

        let mut draft = minimal_draft();
        let before = draft.clone();

        let result = client
            .import_from_product(&mut draft, 99, ImportAxis::Faqs)
            .await;
        assert!(result.is_err());
        assert_eq!(draft.faqs.len(), before.faqs.len());
        assert_eq!(draft.name, before.name);
    }

    #[tokio::test]
    async fn test_form_context_partial_failure_keeps_successful_parts() {
        let transport = StubTransport::new();
        // Responses replay in call order: categories, filter types, styles.
        transport.enqueue(json!([{"id": 3, "name": "Beds"}]));
        transport.enqueue(json!({"not": "a list"}));
        transport.enqueue(json!([{"name": "Headboard", "options": []}]));
        let client = AdminClient::with_transport(transport);

        let context = client.load_form_context(None).await;

        assert_eq!(context.categories.len(), 1);
        assert!(context.filter_types.is_empty());
        assert_eq!(context.style_library.len(), 1);
        assert!(!context.is_complete());
        assert_eq!(context.warnings.len(), 1);
    }

    #[tokio::test]
    async fn test_small_svg_inlines_without_a_call() {
        let client = AdminClient::with_transport(StubTransport::new());

        let inlined = client
            .resolve_svg_icon("icon.svg", "<svg>\n  <path d=\"M0 0\"/>\n</svg>")
            .await
            .unwrap();
        assert_eq!(inlined, "<svg><path d=\"M0 0\"/></svg>");
        assert_eq!(client.transport().call_count(), 0);
    }

    #[tokio::test]
    async fn test_svg_with_data_uri_is_uploaded() {
        let transport = StubTransport::new();
        transport.enqueue(json!({"url": "/media/icon.svg"}));
        let client = AdminClient::with_transport(transport);

        let markup = "<svg><image href=\"data:image/png;base64,AAAA\"/></svg>";
        let url = client.resolve_svg_icon("icon.svg", markup).await.unwrap();
        assert_eq!(url, "/media/icon.svg");
        assert_eq!(client.transport().paths(), vec!["/uploads/"]);
    }
}
