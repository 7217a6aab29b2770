//! Image accessors: list / delete / region transfer.

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::api::droplets::ActionEnvelope;
use crate::api::error::ApiError;
use crate::api::types::{Action, Image, ImageTransferRequest};

#[derive(Debug, Deserialize)]
struct ImageListEnvelope {
    images: Vec<Image>,
}

impl ApiClient {
    /// All images visible to the account (public base images and private
    /// snapshots), in server order. Callers filter.
    pub async fn list_images(&self) -> Result<Vec<Image>, ApiError> {
        let list: ImageListEnvelope = self.get("images").await?;
        Ok(list.images)
    }

    /// Destroy an image by numeric ID.
    pub async fn delete_image(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("images/{id}")).await
    }

    /// Start copying an image into another region.
    pub async fn transfer_image(&self, id: u64, region: &str) -> Result<Action, ApiError> {
        let req = ImageTransferRequest::new(region);
        let resp: ActionEnvelope = self.post(&format!("images/{id}/actions"), &req).await?;
        Ok(resp.action)
    }
}

/* ---- Tests ---- */
