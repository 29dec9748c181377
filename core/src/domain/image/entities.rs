use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An image file as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.trim().to_ascii_lowercase().starts_with("image/")
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizedImage {
    pub upload: ImageUpload,
    pub width: u32,
    pub height: u32,
    pub original_size: usize,
    pub optimized_size: usize,
}

impl OptimizedImage {
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// Advisory only; 0 when the optimizer kept the original bytes.
    pub fn size_reduction_percent(&self) -> u8 {
        if self.original_size == 0 || self.optimized_size >= self.original_size {
            return 0;
        }
        let saved = self.original_size - self.optimized_size;
        ((saved * 100) / self.original_size) as u8
    }

    pub fn metadata(&self) -> ImageMetadata {
        ImageMetadata {
            dimensions: self.dimensions(),
            original_size: self.original_size,
            optimized_size: self.optimized_size,
            size_reduction_percent: self.size_reduction_percent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadata {
    pub dimensions: String,
    pub original_size: usize,
    pub optimized_size: usize,
    pub size_reduction_percent: u8,
}
