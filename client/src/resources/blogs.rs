//! Blog endpoints, including the dashboard's cover upload.

use crate::domain::access::{
    ApiClient, ApiError, Method, MultipartField, RequestBody, RequestOptions,
};

use super::models::{BlogDraft, BlogPost};
use super::{ApiEnvelope, json_body};

/// Blog content for the marketing site and dashboard.
pub struct BlogsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BlogsApi<'a> {
    /// Borrow the shared client.
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List all posts.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn list(&self) -> Result<Vec<BlogPost>, ApiError> {
        let envelope: ApiEnvelope<Vec<BlogPost>> = self.client.get("/api/blogs").await?;
        Ok(envelope.data)
    }

    /// Fetch one post by id.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn fetch(&self, id: i64) -> Result<BlogPost, ApiError> {
        let envelope: ApiEnvelope<BlogPost> = self.client.get(&format!("/api/blogs/{id}")).await?;
        Ok(envelope.data)
    }

    /// Create a post from the dashboard.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn create(&self, draft: &BlogDraft) -> Result<BlogPost, ApiError> {
        let envelope: ApiEnvelope<BlogPost> = self
            .client
            .post("/api/blogs", json_body(draft)?)
            .await?;
        Ok(envelope.data)
    }

    /// Replace a post from the dashboard.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn update(&self, id: i64, draft: &BlogDraft) -> Result<BlogPost, ApiError> {
        let envelope: ApiEnvelope<BlogPost> = self
            .client
            .put(&format!("/api/blogs/{id}"), json_body(draft)?)
            .await?;
        Ok(envelope.data)
    }

    /// Delete a post from the dashboard.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn remove(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete::<()>(&format!("/api/blogs/{id}")).await
    }

    /// Upload a cover image for a post.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`]. Uploads never ride the fallback transport:
    /// they are POSTs.
    pub async fn upload_cover(&self, id: i64, cover: MultipartField) -> Result<BlogPost, ApiError> {
        let envelope: ApiEnvelope<BlogPost> = self
            .client
            .request(
                Method::Post,
                &format!("/api/blogs/{id}/cover"),
                Some(RequestBody::Multipart(vec![cover])),
                RequestOptions::default(),
            )
            .await?;
        Ok(envelope.data)
    }
}
