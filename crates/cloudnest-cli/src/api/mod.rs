//! API client for the CloudNest server

use anyhow::{Context, Result};
use cloudnest_types::{
    ApiMessage, AuthResponse, CompleteUploadRequest, FileRecord, ForgotPasswordRequest,
    LinkAccessRequest, LinkAccessResponse, LinkRequest, LoginRequest, PresignedUrlRequest,
    PresignedUrlResponse, RegisterRequest, ResetPasswordRequest, ShareLink, DEFAULT_SERVER_URL,
};
use reqwest::{header, Body, Client as ReqwestClient, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

pub struct Client {
    http: ReqwestClient,
    base_url: String,
}

impl Client {
    pub fn new() -> Self {
        // Try to load server URL from settings, fallback to default
        let base_url = crate::config::SettingsManager::load()
            .ok()
            .map(|s| s.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        Self {
            http: ReqwestClient::new(),
            base_url,
        }
    }

    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .context("Failed to send login request")?;

        parse_json("Login failed", response).await
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse> {
        let response = self
            .http
            .post(format!("{}/auth/register", self.base_url))
            .json(&RegisterRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .context("Failed to send register request")?;

        parse_json("Registration failed", response).await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<ApiMessage> {
        let response = self
            .http
            .post(format!("{}/auth/forgot-password", self.base_url))
            .json(&ForgotPasswordRequest {
                email: email.to_string(),
            })
            .send()
            .await
            .context("Failed to send forgot-password request")?;

        parse_json("Password reset request failed", response).await
    }

    /// The reset token from the email travels as a query parameter; the
    /// body carries only the replacement password.
    pub async fn reset_password(&self, reset_token: &str, new_password: &str) -> Result<ApiMessage> {
        let response = self
            .http
            .post(format!("{}/auth/reset-password", self.base_url))
            .query(&[("token", reset_token)])
            .json(&ResetPasswordRequest {
                new_password: new_password.to_string(),
            })
            .send()
            .await
            .context("Failed to send reset-password request")?;

        parse_json("Password reset failed", response).await
    }

    pub async fn list_files(&self, token: &str) -> Result<Vec<FileRecord>> {
        let response = self
            .http
            .get(format!("{}/files/", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .context("Failed to list files")?;

        parse_json("Listing failed", response).await
    }

    pub async fn get_file(&self, token: &str, id: Uuid) -> Result<FileRecord> {
        let response = self
            .http
            .get(format!("{}/files/{}", self.base_url, id))
            .bearer_auth(token)
            .send()
            .await
            .context("Failed to fetch file")?;

        parse_json("Fetch failed", response).await
    }

    /// Open the download stream for a file. The caller drains the body.
    pub async fn download(&self, token: &str, id: Uuid) -> Result<reqwest::Response> {
        let response = self
            .http
            .get(format!("{}/files/download/{}", self.base_url, id))
            .bearer_auth(token)
            .send()
            .await
            .context("Failed to start download")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Download failed: {}", server_message(&body, status));
        }

        Ok(response)
    }

    /// The server answers 204 with no body on success.
    pub async fn delete_file(&self, token: &str, id: Uuid) -> Result<()> {
        let response = self
            .http
            .delete(format!("{}/files/{}", self.base_url, id))
            .bearer_auth(token)
            .send()
            .await
            .context("Failed to delete file")?;

        expect_no_content("Delete failed", response).await
    }

    /// Phase one of an upload: reserve an object key and a storage URL.
    pub async fn request_upload_slot(
        &self,
        token: &str,
        request: &PresignedUrlRequest,
    ) -> Result<PresignedUrlResponse> {
        let response = self
            .http
            .post(format!("{}/files/presigned-url", self.base_url))
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .context("Failed to request upload slot")?;

        parse_json("Upload failed", response).await
    }

    /// Phase two: PUT the bytes to storage. The URL is preauthorized, so
    /// no bearer token is attached.
    pub async fn put_presigned(
        &self,
        presigned_url: &str,
        content_type: &str,
        content_length: u64,
        body: Body,
    ) -> Result<()> {
        let response = self
            .http
            .put(presigned_url)
            .header(header::CONTENT_TYPE, content_type)
            .header(header::CONTENT_LENGTH, content_length)
            .body(body)
            .send()
            .await
            .context("Failed to send file to storage")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Storage upload failed: {}", status);
        }

        Ok(())
    }

    /// Phase three: tell the server the bytes are in place.
    pub async fn complete_upload(&self, token: &str, object_key: &str) -> Result<FileRecord> {
        let response = self
            .http
            .post(format!("{}/files/complete", self.base_url))
            .bearer_auth(token)
            .json(&CompleteUploadRequest {
                object_key: object_key.to_string(),
            })
            .send()
            .await
            .context("Failed to confirm upload")?;

        parse_json("Upload failed", response).await
    }

    pub async fn generate_link(&self, token: &str, request: &LinkRequest) -> Result<ShareLink> {
        let response = self
            .http
            .post(format!("{}/links/generate", self.base_url))
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .context("Failed to create share link")?;

        parse_json("Share link creation failed", response).await
    }

    /// The server answers 204 with no body on success.
    pub async fn revoke_link(&self, token: &str, link_id: Uuid) -> Result<()> {
        let response = self
            .http
            .delete(format!("{}/links/delete/{}", self.base_url, link_id))
            .bearer_auth(token)
            .send()
            .await
            .context("Failed to revoke share link")?;

        expect_no_content("Share link revocation failed", response).await
    }

    /// Open a shared link. Public endpoint, authenticated by the link
    /// token (and password, when the link carries one).
    pub async fn access_link(
        &self,
        share_token: &str,
        password: Option<&str>,
    ) -> Result<LinkAccessResponse> {
        let response = self
            .http
            .post(format!("{}/links/access/{}", self.base_url, share_token))
            .json(&LinkAccessRequest {
                password: password.map(str::to_string),
            })
            .send()
            .await
            .context("Failed to open share link")?;

        parse_json("Share link access failed", response).await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the status and decode the body, surfacing the server's own
/// `message` field on failure.
async fn parse_json<T: DeserializeOwned>(action: &str, response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        anyhow::bail!("{}: {}", action, server_message(&body, status));
    }

    serde_json::from_str(&body).with_context(|| format!("{}: unexpected response body", action))
}

/// Check the status of a body-less reply.
async fn expect_no_content(action: &str, response: reqwest::Response) -> Result<()> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("{}: {}", action, server_message(&body, status));
    }
    Ok(())
}

fn server_message(body: &str, status: StatusCode) -> String {
    let error: serde_json::Value = serde_json::from_str(body).unwrap_or_default();
    error["message"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| format!("server returned {}", status))
}
