//! File upload endpoints
//!
//! Single uploads go through `POST /uploads/` as a multipart form. Batch
//! uploads run in parallel and report per-file outcomes; a failed file does
//! not roll back the ones that already landed.

use crate::{AdminClient, ClientError, ClientResult, HttpTransport};
use futures::future::join_all;
use shared::models::UploadedFile;

/// Per-file result of a batch upload
#[derive(Debug)]
pub struct UploadOutcome {
    pub file_name: String,
    pub result: Result<UploadedFile, ClientError>,
}

impl UploadOutcome {
    /// URL of the stored file, if the upload succeeded
    pub fn url(&self) -> Option<&str> {
        self.result.as_ref().ok().map(|f| f.url.as_str())
    }
}

impl<T: HttpTransport> AdminClient<T> {
    /// Upload a single file, returning its public URL and metadata
    pub async fn upload_file(&self, file_name: &str, bytes: Vec<u8>) -> ClientResult<UploadedFile> {
        self.transport()
            .upload("/uploads/", "file", file_name, bytes)
            .await
    }

    /// Upload several files in parallel.
    ///
    /// Outcomes come back in input order. Callers decide whether a partial
    /// failure aborts their flow; completed uploads stay completed.
    pub async fn upload_images(&self, files: Vec<(String, Vec<u8>)>) -> Vec<UploadOutcome> {
        let uploads = files.into_iter().map(|(file_name, bytes)| async move {
            let result = self.upload_file(&file_name, bytes).await;
            if let Err(err) = &result {
                tracing::warn!(file_name, %err, "image upload failed");
            }
            UploadOutcome { file_name, result }
        });

        join_all(uploads).await
    }
}

#[cfg(test)]
mod tests {
    use crate::AdminClient;
    use crate::transport::stub::StubTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_batch_upload_reports_per_file_outcomes() {
        let transport = StubTransport::new();
        transport.enqueue(json!({"url": "/media/a.webp", "filename": "a.webp"}));
        // Second response is malformed; that file fails, the first stands.
        transport.enqueue(json!({"no_url": true}));
        let client = AdminClient::with_transport(transport);

        let outcomes = client
            .upload_images(vec![
                ("a.webp".to_string(), vec![1, 2, 3]),
                ("b.webp".to_string(), vec![4, 5]),
            ])
            .await;

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].url(), Some("/media/a.webp"));
        assert!(outcomes[1].result.is_err());
        assert_eq!(client.transport().call_count(), 2);
    }
}
