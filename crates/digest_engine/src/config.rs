use std::path::PathBuf;

use digest_core::{document_filename, document_title, DEFAULT_CODE_LANGUAGE};
use url::Url;

use crate::FetchSettings;

/// What the driver does when a single question cannot be fetched or has no
/// usable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemFailurePolicy {
    /// Stop the run; the previous output file is left as it was.
    #[default]
    Abort,
    /// Log the failure, leave the question out, and continue.
    Skip,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("topic must not be empty")]
    EmptyTopic,
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("base url {url:?} is not usable: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Tag to search for; also shown in the document title.
    pub topic: String,
    /// Number of questions requested from the listing.
    pub page_size: u32,
    /// Directory the digest file is written into.
    pub output_location: PathBuf,
    /// Site root that listing links are relative to.
    pub base_url: String,
    pub site_name: String,
    /// Language hint placed after fenced code block openers.
    pub code_language: String,
    pub failure_policy: ItemFailurePolicy,
    pub fetch: FetchSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            topic: "Javascript".to_string(),
            page_size: 50,
            output_location: PathBuf::from("../output/"),
            base_url: "https://stackoverflow.com".to_string(),
            site_name: "StackOverflow".to_string(),
            code_language: DEFAULT_CODE_LANGUAGE.to_string(),
            failure_policy: ItemFailurePolicy::default(),
            fetch: FetchSettings::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.topic.trim().is_empty() {
            return Err(ConfigError::EmptyTopic);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        self.listing_url().map(|_| ())
    }

    pub fn document_title(&self) -> String {
        document_title(&self.site_name, self.topic.trim())
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_location
            .join(document_filename(&self.document_title()))
    }

    /// `<base>/questions/tagged/<tag>?sort=votes&pageSize=<n>`, tag lower-cased
    /// and percent-encoded as a path segment.
    pub fn listing_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let mut url = Url::parse(&self.base_url).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }

        let tag = self.topic.trim().to_lowercase();
        url.path_segments_mut()
            .map_err(|()| invalid("url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["questions", "tagged", tag.as_str()]);
        url.set_query(None);
        url.query_pairs_mut()
            .append_pair("sort", "votes")
            .append_pair("pageSize", &self.page_size.to_string());
        Ok(url)
    }
}
