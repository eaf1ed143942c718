//! Multipart image upload endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::transport::ApiRequest;
use crate::wire::ImageWire;
use bytes::Bytes;

impl ApiClient {
    /// `POST /images/post` — an image referenced from post content.
    pub async fn upload_post_image(
        &self,
        file_name: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<ImageWire> {
        self.request(ApiRequest::post("/images/post").file("file", file_name, bytes, content_type))
            .await
    }

    /// `POST /images/profile` — the user's avatar.
    pub async fn upload_profile_image(
        &self,
        file_name: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<ImageWire> {
        self.request(
            ApiRequest::post("/images/profile").file("file", file_name, bytes, content_type),
        )
        .await
    }
}
