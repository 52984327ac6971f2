pub mod barcode_analyzer;
pub mod client;
pub mod image_analyzer;
