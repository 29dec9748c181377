pub mod extract_text;
