//! Fetch Message Structures
//!
//! Request and response structures for one-shot HTTP fetches. A request
//! carries an absolute URL; the response carries the status, headers and
//! an optional textual body.

use std::collections::HashMap;

use serde::Deserialize;

/// An outbound fetch request
#[derive(Debug, Clone, Default)]
pub struct FetchRequest {
    /// HTTP method (GET, POST)
    pub method: String,
    /// Absolute request URL
    pub url: String,
    /// HTTP headers
    pub headers: HashMap<String, String>,
    /// Body content
    pub content: Option<String>,
}

impl FetchRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create a POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: "POST".to_string(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Add a header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set raw body content
    pub fn with_body(mut self, content: impl Into<String>, content_type: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self.headers
            .insert("Content-Type".to_string(), content_type.into());
        self
    }
}

/// A fetch response
#[derive(Debug, Clone, Default)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Body content, `None` when the server sent no body
    pub body: Option<String>,
}

impl FetchResponse {
    /// Create a response with status code
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    /// Set the body content
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Check if the response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the JSON body
    pub fn json_body<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        let content = self.body.as_deref().unwrap_or("{}");
        serde_json::from_str(content)
    }
}
