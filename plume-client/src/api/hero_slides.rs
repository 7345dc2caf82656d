//! Hero slide endpoints

use crate::{AdminClient, ClientResult, HttpTransport};
use shared::models::{HeroSlide, HeroSlideCreate, HeroSlideUpdate};

impl<T: HttpTransport> AdminClient<T> {
    pub async fn list_hero_slides(&self) -> ClientResult<Vec<HeroSlide>> {
        self.transport().get("/hero-slides/").await
    }

    pub async fn create_hero_slide(&self, payload: &HeroSlideCreate) -> ClientResult<HeroSlide> {
        self.transport().post("/hero-slides/", payload).await
    }

    pub async fn update_hero_slide(
        &self,
        id: i64,
        update: &HeroSlideUpdate,
    ) -> ClientResult<HeroSlide> {
        self.transport()
            .patch(&format!("/hero-slides/{}/", id), update)
            .await
    }

    pub async fn delete_hero_slide(&self, id: i64) -> ClientResult<()> {
        self.transport()
            .delete(&format!("/hero-slides/{}/", id))
            .await
    }
}
