use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion API returned no choices")]
    EmptyResponse,
}

/// A multimodal completion backend able to read text out of an image
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the model identifier requests are sent with
    fn model(&self) -> &str;

    /// Sends `prompt` together with the image at `image_data_uri` and returns
    /// the message text of the first choice.
    async fn complete(&self, prompt: &str, image_data_uri: &str)
        -> Result<String, CompletionError>;
}
