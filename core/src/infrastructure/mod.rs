pub mod feedback;
pub mod image;
pub mod ocr;
