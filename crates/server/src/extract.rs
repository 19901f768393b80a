//! Request extractors for the form-encoded write surface.
//!
//! Every write endpoint accepts `multipart/form-data` (required whenever a
//! binary part is sent) and falls back to `application/x-www-form-urlencoded`
//! for text-only payloads. Fields are collected by name; the single binary
//! part is always called `image`.

use std::collections::HashMap;
use std::convert::Infallible;

use async_trait::async_trait;
use axum::extract::{Form, FromRequest, FromRequestParts, Multipart, Request};
use axum::http::header;
use axum::http::request::Parts;

use crate::errors::ApiError;

/// A binary part lifted out of a multipart payload.
#[derive(Debug)]
pub struct UploadedFile {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}

/// Text fields plus the optional `image` part of one write request.
#[derive(Debug, Default)]
pub struct FormPayload {
    fields: HashMap<String, String>,
    upload: Option<UploadedFile>,
}

impl FormPayload {
    /// Take an optional text field; omitted fields come back as `None`.
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    pub fn require_text(&mut self, name: &str) -> Result<String, ApiError> {
        self.take_text(name)
            .ok_or_else(|| ApiError::unprocessable(format!("missing required field: {}", name)))
    }

    /// Take an optional integer field; a present but non-numeric value is
    /// a malformed payload, not an omission.
    pub fn take_i64(&mut self, name: &str) -> Result<Option<i64>, ApiError> {
        match self.take_text(name) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ApiError::unprocessable(format!("field {} must be an integer", name))),
        }
    }

    pub fn require_i64(&mut self, name: &str) -> Result<i64, ApiError> {
        self.take_i64(name)?
            .ok_or_else(|| ApiError::unprocessable(format!("missing required field: {}", name)))
    }

    /// Take the binary part, if one was sent.
    pub fn take_upload(&mut self) -> Option<UploadedFile> {
        self.upload.take()
    }

    pub fn require_upload(&mut self) -> Result<UploadedFile, ApiError> {
        self.take_upload()
            .ok_or_else(|| ApiError::unprocessable("missing required field: image"))
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        let mut payload = FormPayload::default();
        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::unprocessable(e.to_string()))?;
            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|e| ApiError::unprocessable(e.to_string()))?
            {
                let Some(name) = field.name().map(str::to_string) else {
                    continue;
                };
                if name == "image" {
                    let content_type = field.content_type().map(str::to_string);
                    let file_name = field.file_name().map(str::to_string);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::unprocessable(e.to_string()))?;
                    payload.upload =
                        Some(UploadedFile { bytes: bytes.to_vec(), content_type, file_name });
                } else {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| ApiError::unprocessable(e.to_string()))?;
                    payload.fields.insert(name, text);
                }
            }
        } else {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::unprocessable(e.to_string()))?;
            for (name, value) in pairs {
                payload.fields.insert(name, value);
            }
        }
        Ok(payload)
    }
}

/// Scheme-and-host prefix taken from the request's Host header, used to make
/// derived image URLs absolute. Without the header the URLs stay
/// host-relative.
#[derive(Debug)]
pub struct RequestBase(pub Option<String>);

impl RequestBase {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestBase
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Infallible> {
        let base = parts
            .headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .map(|host| format!("http://{}", host));
        Ok(Self(base))
    }
}
