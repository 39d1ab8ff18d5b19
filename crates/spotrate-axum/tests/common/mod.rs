//! Shared helpers for router integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use spotrate_axum::bootstrap::{CorsConfig, ServerConfig, bootstrap};
use spotrate_axum::routes::create_router;
use spotrate_core::paths::ResolvedPaths;
use tempfile::TempDir;
use tower::ServiceExt;

pub const BOUNDARY: &str = "spotrate-test-boundary";

/// A router over a fresh data directory.
pub struct TestApp {
    pub router: Router,
    pub uploads_dir: PathBuf,
    _data: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let data = tempfile::tempdir().unwrap();
        let paths = ResolvedPaths::under(data.path());
        let config = ServerConfig::from_paths(&paths);
        let ctx = bootstrap(config).await.unwrap();

        Self {
            router: create_router(ctx, &CorsConfig::AllowAll),
            uploads_dir: paths.uploads_dir,
            _data: data,
        }
    }

    /// Send a request and return the status and raw body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    /// Send a request and parse the body as JSON.
    pub async fn send_json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = self.send(request).await;
        let json = serde_json::from_slice(&body).unwrap_or_else(|e| {
            panic!("body is not JSON ({e}): {}", String::from_utf8_lossy(&body))
        });
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send_json(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send_json(Request::delete(uri).body(Body::empty()).unwrap()).await
    }

    /// File names currently in the uploads directory.
    pub fn uploaded_files(&self) -> Vec<String> {
        list_dir(&self.uploads_dir)
    }
}

pub fn list_dir(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Hand-built `multipart/form-data` body.
#[derive(Default)]
pub struct MultipartBuilder {
    body: Vec<u8>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A complete, valid submission without photo or coordinates.
    pub fn valid() -> Self {
        Self::new()
            .text("location", "  Gare du Nord  ")
            .text("type", "WC Publique")
            .text("dangerRating", "2")
            .text("locationRating", "4")
            .text("description", "Clean, paid entry")
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn request(mut self, uri: &str) -> Request<Body> {
        self.body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(self.body))
            .unwrap()
    }
}
