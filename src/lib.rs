//! HTTP server that extracts text from uploaded images
//!
//! `POST /process` takes raw image bytes, forwards them as a base64 data URI to
//! an OpenAI-compatible chat completions API together with a fixed OCR prompt,
//! and answers with the text the model returned.

pub mod completion;
pub mod config;
pub mod error;
pub mod ocr;
pub mod openai;
pub mod server;
