//! Review moderation endpoints

use crate::{AdminClient, ClientResult, HttpTransport};
use shared::models::{Review, ReviewUpdate};

impl<T: HttpTransport> AdminClient<T> {
    pub async fn list_reviews(&self) -> ClientResult<Vec<Review>> {
        self.transport().get("/reviews/").await
    }

    pub async fn approve_review(&self, id: i64) -> ClientResult<Review> {
        self.transport()
            .patch(
                &format!("/reviews/{}/", id),
                &ReviewUpdate { is_approved: true },
            )
            .await
    }

    pub async fn delete_review(&self, id: i64) -> ClientResult<()> {
        self.transport().delete(&format!("/reviews/{}/", id)).await
    }
}
