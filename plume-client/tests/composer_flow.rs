//! End-to-end composer flow against an in-memory transport: log in, load a
//! product into a draft, import FAQs from another product, edit, and submit.

use async_trait::async_trait;
use plume_client::{AdminClient, ClientError, ClientResult, HttpTransport, ImportAxis};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("plume_client=debug")
        .with_test_writer()
        .try_init();
}

/// Scripted transport: replays queued payloads in request order and keeps a
/// log of every path hit.
#[derive(Default)]
struct ScriptedTransport {
    log: Mutex<Vec<String>>,
    responses: Mutex<VecDeque<serde_json::Value>>,
}

impl ScriptedTransport {
    fn new(responses: Vec<serde_json::Value>) -> Self {
        Self {
            log: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        }
    }

    fn paths(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn next<T: DeserializeOwned>(&self, method: &str, path: &str) -> ClientResult<T> {
        self.log.lock().unwrap().push(format!("{method} {path}"));
        let data = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(serde_json::Value::Null);
        serde_json::from_value(data).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.next("GET", path)
    }

    async fn post<T, B>(&self, path: &str, _body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        self.next("POST", path)
    }

    async fn post_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.next("POST", path)
    }

    async fn put<T, B>(&self, path: &str, _body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        self.next("PUT", path)
    }

    async fn patch<T, B>(&self, path: &str, _body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        self.next("PATCH", path)
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        self.log.lock().unwrap().push(format!("DELETE {path}"));
        Ok(())
    }

    async fn upload<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        _field: &str,
        _file_name: &str,
        _bytes: Vec<u8>,
    ) -> ClientResult<T> {
        self.next("UPLOAD", path)
    }
}

fn stored_product() -> serde_json::Value {
    json!({
        "id": 12,
        "name": "Oslo Bed",
        "category": 3,
        "price": 499.0,
        "discount_percent": 20.0,
        "images": ["/media/oslo-1.webp"],
        "styles": [
            // Legacy shape: bare strings instead of option objects.
            {"name": "Headboard", "options": ["Wingback", "Plain"]}
        ],
        "dimensions": [
            {"measurement": "Width", "values": {"King": "150 cm (59.1\")"}},
            {"measurement": "Length", "values": {"King": "200 cm (78.7\")"}}
        ],
        "faqs": [
            {"question": "Is assembly included?", "answer": "Yes."}
        ]
    })
}

fn donor_product() -> serde_json::Value {
    json!({
        "id": 30,
        "name": "Milan Bed",
        "category": 3,
        "price": 599.0,
        "faqs": [
            // Duplicate of the stored FAQ up to case, plus one new entry.
            {"question": "is assembly included?", "answer": "YES."},
            {"question": "What is the warranty?", "answer": "Ten years."}
        ]
    })
}

#[tokio::test]
async fn edit_import_and_submit_roundtrip() {
    init_tracing();

    let transport = ScriptedTransport::new(vec![
        json!({"access": "acc", "refresh": "ref"}),
        stored_product(),
        donor_product(),
        stored_product(),
    ]);
    let client = AdminClient::with_transport(transport);

    client.login("admin", "secret").await.unwrap();

    // Hydrate: legacy style strings arrive as fully-shaped options.
    let mut draft = client.load_draft(12).await.unwrap();
    assert_eq!(draft.existing_id, Some(12));
    assert_eq!(draft.styles[0].options[0].label, "Wingback");
    assert_eq!(draft.styles[0].options[1].label, "Plain");

    // Import FAQs from the donor; the case-duplicate is dropped.
    let appended = client
        .import_from_product(&mut draft, 30, ImportAxis::Faqs)
        .await
        .unwrap();
    assert_eq!(appended, 1);
    assert_eq!(draft.faqs.len(), 2);
    assert_eq!(draft.faqs[1].question, "What is the warranty?");

    draft.price = 549.0;
    let product = client.submit_draft(&draft).await.unwrap();
    assert_eq!(product.id, 12);

    assert_eq!(
        client.session().access_token().as_deref(),
        Some("acc"),
        "submission must not disturb the session"
    );
    assert_eq!(
        client.transport().paths(),
        vec![
            "POST /login/",
            "GET /products/12/",
            "GET /products/30/",
            "PUT /products/12/",
        ]
    );
}

#[tokio::test]
async fn invalid_draft_is_stopped_before_the_network() {
    init_tracing();

    let transport = ScriptedTransport::new(vec![
        json!({"access": "acc", "refresh": "ref"}),
        stored_product(),
    ]);
    let client = AdminClient::with_transport(transport);

    client.login("admin", "secret").await.unwrap();
    let mut draft = client.load_draft(12).await.unwrap();
    draft.discount_percent = 120.0;

    let err = client.submit_draft(&draft).await.unwrap_err();
    assert!(matches!(err, ClientError::Draft(_)));
    assert_eq!(
        client.transport().paths(),
        vec!["POST /login/", "GET /products/12/"],
        "no submission request may go out for an invalid draft"
    );
}
