pub mod feedback;
pub mod health;
pub mod menu_analysis;
pub mod ocr;
pub mod pipeline;
pub mod server;
