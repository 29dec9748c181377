pub mod common;
pub mod feedback;
pub mod image;
pub mod menu_analysis;
pub mod ocr;
pub mod pipeline;
pub mod profile;
