use serde::{Deserialize, Serialize};

use crate::{summarize, tvseries, KataError, Result};

/// Endpoint for the TV series listing used by the best-in-genre challenge.
pub const DEFAULT_TVSERIES_URL: &str = "https://jsonmock.hackerrank.com/api/tvseries";

/// Endpoint for the hosted summarization model.
pub const DEFAULT_HF_ENDPOINT: &str =
    "https://router.huggingface.co/hf-inference/models/facebook/bart-large-cnn";

const HF_TOKEN_ENV: &str = "HUGGINGFACE_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bearer token for the summarization endpoint.
    pub hf_token: String,

    #[serde(
        default = "default_tvseries_url",
        skip_serializing_if = "is_default_tvseries_url"
    )]
    pub tvseries_url: String,

    #[serde(
        default = "default_hf_endpoint",
        skip_serializing_if = "is_default_hf_endpoint"
    )]
    pub hf_endpoint: String,

    /// Set a canned series source for end-to-end testing. Over-rides the API
    /// source.
    #[serde(skip_serializing, skip_deserializing)]
    dummy_series: Option<tvseries::Dummy>,

    /// Set a canned summarizer for end-to-end testing. Over-rides the remote
    /// backend.
    #[serde(skip_serializing, skip_deserializing)]
    dummy_summarizer: Option<summarize::Dummy>,
}

fn default_tvseries_url() -> String {
    DEFAULT_TVSERIES_URL.to_string()
}

fn default_hf_endpoint() -> String {
    DEFAULT_HF_ENDPOINT.to_string()
}

fn is_default_tvseries_url(value: &String) -> bool {
    *value == DEFAULT_TVSERIES_URL
}

fn is_default_hf_endpoint(value: &String) -> bool {
    *value == DEFAULT_HF_ENDPOINT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hf_token: String::new(),
            tvseries_url: default_tvseries_url(),
            hf_endpoint: default_hf_endpoint(),
            dummy_series: None,
            dummy_summarizer: None,
        }
    }
}

impl Config {
    pub fn new(hf_token: String) -> Self {
        Self {
            hf_token,
            ..Default::default()
        }
    }

    /// Deserialize a TOML string into a Config.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| KataError::Internal(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize the Config into a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| KataError::Internal(format!("Failed to serialize to TOML: {}", e)))
    }

    /// Overlays values from the environment: currently the summarization
    /// token, which the hosted endpoint requires.
    pub fn load_env(mut self) -> Self {
        if let Ok(token) = std::env::var(HF_TOKEN_ENV) {
            if !token.is_empty() {
                self.hf_token = token;
            }
        }
        self
    }

    /// Sets the summarization token.
    pub fn with_hf_token(mut self, token: String) -> Self {
        self.hf_token = token;
        self
    }

    /// Sets the series listing endpoint.
    pub fn with_tvseries_url(mut self, url: String) -> Self {
        self.tvseries_url = url;
        self
    }

    /// Sets the summarization endpoint.
    pub fn with_hf_endpoint(mut self, url: String) -> Self {
        self.hf_endpoint = url;
        self
    }

    pub fn with_dummy_series(mut self, source: tvseries::Dummy) -> Self {
        self.dummy_series = Some(source);
        self
    }

    pub fn with_dummy_summarizer(mut self, backend: summarize::Dummy) -> Self {
        self.dummy_summarizer = Some(backend);
        self
    }

    /// Returns the configured series source.
    pub fn series_source(&self) -> tvseries::Source {
        if let Some(dummy) = &self.dummy_series {
            return tvseries::Source::Dummy(dummy.clone());
        }
        tvseries::Source::Api(tvseries::Api::new(self.tvseries_url.clone()))
    }

    /// Returns the configured summarization backend.
    pub fn summarizer(&self) -> summarize::Backend {
        if let Some(dummy) = &self.dummy_summarizer {
            return summarize::Backend::Dummy(dummy.clone());
        }
        summarize::Backend::HuggingFace(summarize::HuggingFace::new(
            self.hf_endpoint.clone(),
            self.hf_token.clone(),
        ))
    }
}
