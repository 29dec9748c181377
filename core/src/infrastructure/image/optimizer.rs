use std::io::Cursor;

use bytes::Bytes;
use image::{DynamicImage, ImageFormat, ImageReader, imageops::FilterType};

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::{
        entities::{ImageUpload, OptimizedImage},
        ports::ImageOptimizer,
        value_objects::ProgressReporter,
    },
};

/// Decodes uploads with the `image` crate and downscales anything larger than
/// `max_dimension` on its longest side.
#[derive(Debug, Clone)]
pub struct ImageCrateOptimizer {
    max_dimension: u32,
}

impl ImageCrateOptimizer {
    pub fn new(max_dimension: u32) -> Self {
        Self { max_dimension }
    }
}

impl ImageOptimizer for ImageCrateOptimizer {
    async fn optimize(
        &self,
        upload: ImageUpload,
        progress: ProgressReporter,
    ) -> Result<OptimizedImage, CoreError> {
        if !upload.is_image() {
            return Err(CoreError::InvalidInput(
                "Invalid file type. Please provide an image file.".to_string(),
            ));
        }
        progress.report(10);

        let max_dimension = self.max_dimension;
        let reporter = progress.clone();
        let optimized =
            tokio::task::spawn_blocking(move || optimize_blocking(upload, max_dimension, &reporter))
                .await
                .map_err(|e| {
                    tracing::error!("image optimization task failed: {}", e);
                    CoreError::Optimization("image optimization task failed".to_string())
                })??;

        progress.report(100);
        tracing::debug!(
            dimensions = %optimized.dimensions(),
            original_size = optimized.original_size,
            optimized_size = optimized.optimized_size,
            "image optimized"
        );

        Ok(optimized)
    }
}

fn optimize_blocking(
    upload: ImageUpload,
    max_dimension: u32,
    progress: &ProgressReporter,
) -> Result<OptimizedImage, CoreError> {
    let reader = ImageReader::new(Cursor::new(upload.bytes.clone()))
        .with_guessed_format()
        .map_err(|e| CoreError::Optimization(format!("Failed to read image format: {}", e)))?;

    let format = reader
        .format()
        .ok_or_else(|| CoreError::Optimization("Could not determine image format".to_string()))?;

    progress.report(30);
    let image = reader
        .decode()
        .map_err(|e| CoreError::Optimization(format!("Failed to decode image: {}", e)))?;
    progress.report(70);

    let original_size = upload.size();
    let (width, height) = (image.width(), image.height());

    if width.max(height) <= max_dimension {
        return Ok(OptimizedImage {
            upload,
            width,
            height,
            original_size,
            optimized_size: original_size,
        });
    }

    let resized = image.resize(max_dimension, max_dimension, FilterType::Triangle);

    match encode(&resized, format) {
        Ok(bytes) if bytes.len() < original_size => {
            let optimized_size = bytes.len();
            Ok(OptimizedImage {
                upload: ImageUpload::new(upload.file_name, format.to_mime_type(), Bytes::from(bytes)),
                width: resized.width(),
                height: resized.height(),
                original_size,
                optimized_size,
            })
        }
        outcome => {
            if let Err(e) = outcome {
                tracing::warn!(format = ?format, "re-encoding failed, keeping original: {}", e);
            }
            Ok(OptimizedImage {
                upload,
                width,
                height,
                original_size,
                optimized_size: original_size,
            })
        }
    }
}

fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, image::ImageError> {
    let mut buffer = Cursor::new(Vec::new());
    match format {
        // jpeg has no alpha channel
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()).write_to(&mut buffer, format)?,
        _ => image.write_to(&mut buffer, format)?,
    }
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use image::{ImageBuffer, Rgb, RgbImage};
    use parking_lot::Mutex;

    use super::*;

    fn create_test_image(width: u32, height: u32) -> Bytes {
        let img: RgbImage = ImageBuffer::from_fn(width, height, |x, y| {
            let r = ((x as f32 / width as f32) * 255.0) as u8;
            let g = ((y as f32 / height as f32) * 255.0) as u8;
            Rgb([r, g, 128])
        });

        let mut cursor = Cursor::new(Vec::new());
        img.write_to(&mut cursor, ImageFormat::Png).unwrap();
        Bytes::from(cursor.into_inner())
    }

    fn png(bytes: Bytes) -> ImageUpload {
        ImageUpload::new("menu.png", "image/png", bytes)
    }

    #[tokio::test]
    async fn test_small_image_is_kept() {
        let bytes = create_test_image(100, 80);
        let optimizer = ImageCrateOptimizer::new(2048);

        let optimized = optimizer
            .optimize(png(bytes.clone()), ProgressReporter::noop())
            .await
            .unwrap();

        assert_eq!(optimized.dimensions(), "100x80");
        assert_eq!(optimized.upload.bytes, bytes);
        assert_eq!(optimized.optimized_size, optimized.original_size);
        assert_eq!(optimized.size_reduction_percent(), 0);
    }

    #[tokio::test]
    async fn test_large_image_is_downscaled() {
        let optimizer = ImageCrateOptimizer::new(100);

        let optimized = optimizer
            .optimize(png(create_test_image(400, 200)), ProgressReporter::noop())
            .await
            .unwrap();

        assert_eq!(optimized.dimensions(), "100x50");
        assert!(optimized.optimized_size < optimized.original_size);
        assert_eq!(optimized.upload.mime_type, "image/png");
        assert!(optimized.size_reduction_percent() > 0);
    }

    #[tokio::test]
    async fn test_non_image_is_rejected() {
        let optimizer = ImageCrateOptimizer::new(2048);
        let upload = ImageUpload::new("menu.pdf", "application/pdf", Bytes::from_static(b"%PDF"));

        let result = optimizer.optimize(upload, ProgressReporter::noop()).await;
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_corrupt_image_fails_optimization() {
        let optimizer = ImageCrateOptimizer::new(2048);
        let upload = ImageUpload::new(
            "menu.jpg",
            "image/jpeg",
            Bytes::from_static(b"definitely not an image"),
        );

        let result = optimizer.optimize(upload, ProgressReporter::noop()).await;
        assert!(matches!(result, Err(CoreError::Optimization(_))));
    }

    #[tokio::test]
    async fn test_progress_ends_at_100() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let progress = ProgressReporter::new(move |percent| sink.lock().push(percent));

        ImageCrateOptimizer::new(2048)
            .optimize(png(create_test_image(32, 32)), progress)
            .await
            .unwrap();

        let seen = seen.lock().clone();
        assert_eq!(seen, vec![10, 30, 70, 100]);
    }

    #[tokio::test]
    async fn test_truncated_image_stops_before_decode_checkpoint() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let progress = ProgressReporter::new(move |percent| sink.lock().push(percent));
        let truncated = create_test_image(32, 32).slice(..40);

        let result = ImageCrateOptimizer::new(2048)
            .optimize(png(truncated), progress)
            .await;

        assert!(matches!(result, Err(CoreError::Optimization(_))));
        assert_eq!(seen.lock().clone(), vec![10, 30]);
    }
}
