use std::error;
use std::fmt;
use std::sync::Arc;

use polyline::DecodeError;

pub mod client;
pub mod directions;
pub mod huggingface;
pub mod journey;
pub mod nominatim;
pub mod overpass;

pub use client::{ProviderClient, ProviderConfig};

#[derive(Debug, Clone)]
pub enum ApiError {
    RequestError(Arc<reqwest::Error>),
    JsonError(Arc<serde_json::Error>),
    InvalidResponse {
        status_code: reqwest::StatusCode,
        url: String,
        response: Option<String>,
    },
    LocationNotFound(String),
    RouteNotFound(String),
    NoPointsOfInterest,
    InvalidRequest(String),
    Decode(DecodeError),
    UnexpectedResponse(String),
    Configuration(String),
}

impl error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::RequestError(e) => write!(f, "HTTP request error: {}", e),
            ApiError::JsonError(e) => write!(f, "JSON parse error: {}", e),
            ApiError::InvalidResponse {
                status_code,
                url,
                response,
            } => match response {
                Some(text) => {
                    write!(f, "Invalid Response ({}) {}: {}", status_code, text, url)
                }
                None => write!(f, "Invalid Response({}) {}", status_code, url),
            },
            ApiError::LocationNotFound(name) => {
                write!(f, "Location not found: {}", name)
            }
            ApiError::RouteNotFound(status) => {
                write!(f, "Failed to calculate route: {}", status)
            }
            ApiError::NoPointsOfInterest => write!(f, "No points of interest found"),
            ApiError::InvalidRequest(e) => write!(f, "Invalid request: {}", e),
            ApiError::Decode(e) => write!(f, "Route geometry is broken: {}", e),
            ApiError::UnexpectedResponse(e) => write!(f, "Unexpected response: {}", e),
            ApiError::Configuration(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::RequestError(Arc::new(e))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::JsonError(Arc::new(e))
    }
}

impl From<DecodeError> for ApiError {
    fn from(e: DecodeError) -> Self {
        ApiError::Decode(e)
    }
}
