use serde::{Deserialize, Serialize};

use crate::{
    post::{PostStatus, Thumbnail},
    validation::ValidationError,
};

/// Body of a create or update request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn published(mut self) -> Self {
        self.status = PostStatus::Published;
        self
    }

    /// Parses a comma separated tag field, dropping blanks and duplicates
    /// while keeping first-seen order.
    pub fn with_tag_field(mut self, field: &str) -> Self {
        self.tags.clear();
        for tag in field.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if !self.tags.iter().any(|t| t == tag) {
                self.tags.push(tag.to_string());
            }
        }
        self
    }

    /// Title and content are required. Content made only of empty markup
    /// counts as missing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if crate::utils::plain_text(&self.content).is_empty() {
            return Err(ValidationError::MissingContent);
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub const MAX_BYTES: usize = 5 * 1024 * 1024;

    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.mime_type.starts_with("image/") {
            return Err(ValidationError::UnsupportedImageType(self.mime_type.clone()));
        }
        if self.bytes.len() > Self::MAX_BYTES {
            return Err(ValidationError::ImageTooLarge(self.bytes.len()));
        }
        Ok(())
    }
}
