use axum::body::Bytes;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Instruction sent alongside every image
pub const OCR_PROMPT: &str = "Extract text from the image using OCR (Optical Character Recognition). Process the image to accurately detect and extract the text content. The output will consist only of the extracted text in a copyable format, without any additional responses, explanations, or comments. Focus solely on providing the requested content.";

/// Returns true if the declared content type names an image
pub fn is_image_content_type(content_type: &[u8]) -> bool {
    content_type.starts_with(b"image/")
}

/// A validated upload, scoped to a single request
#[derive(Debug, Clone)]
pub struct OcrRequest {
    content_type: String,
    data: Bytes,
}

impl OcrRequest {
    pub fn new(content_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            content_type: content_type.into(),
            data,
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Embeds the image as `data:<content-type>;base64,<bytes>`
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.content_type, STANDARD.encode(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_content_types() {
        assert!(is_image_content_type(b"image/png"));
        assert!(is_image_content_type(b"image/jpeg"));
        assert!(is_image_content_type(b"image/"));
        assert!(!is_image_content_type(b"application/pdf"));
        assert!(!is_image_content_type(b"text/plain"));
        assert!(!is_image_content_type(b""));
        // prefix match is literal
        assert!(!is_image_content_type(b"Image/png"));
        assert!(!is_image_content_type(b" image/png"));
        // obs-text after the prefix is still an image
        assert!(is_image_content_type(b"image/png; name=\xe9.png"));
    }

    #[test]
    fn test_data_uri_uses_standard_base64() {
        let request = OcrRequest::new("image/png", Bytes::from_static(b"Hello World"));
        assert_eq!(request.data_uri(), "data:image/png;base64,SGVsbG8gV29ybGQ=");
    }

    #[test]
    fn test_data_uri_keeps_content_type_verbatim() {
        let request =
            OcrRequest::new("image/svg+xml; charset=utf-8", Bytes::from_static(b"\xff\xfe"));
        assert_eq!(request.data_uri(), "data:image/svg+xml; charset=utf-8;base64,//4=");
    }

    #[test]
    fn test_empty_upload() {
        let request = OcrRequest::new("image/gif", Bytes::new());
        assert_eq!(request.data_uri(), "data:image/gif;base64,");
    }

    #[test]
    fn test_prompt_is_ocr_instruction() {
        assert!(OCR_PROMPT.starts_with("Extract text from the image using OCR"));
        assert!(OCR_PROMPT.ends_with("Focus solely on providing the requested content."));
    }
}
