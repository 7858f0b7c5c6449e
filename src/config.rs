use clap::Parser;
use std::fmt;

/// Default model used for text extraction
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default upload cap: 10 MiB
pub const DEFAULT_MAX_IMAGE_SIZE: usize = 10 << 20;

#[derive(Parser)]
#[command(name = "ocr-relay-server")]
#[command(about = "Extracts text from uploaded images using a multimodal completion API")]
#[command(version)]
pub struct Args {
    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// API key for the completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub api_base_url: String,

    /// Model identifier sent with every completion request
    #[arg(long, env = "OCR_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum upload size in bytes (default: 10MiB)
    #[arg(long, env = "OCR_MAX_IMAGE_SIZE", default_value_t = DEFAULT_MAX_IMAGE_SIZE)]
    pub max_image_size: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

/// Server configuration
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub api_base_url: String,
    pub model: String,
    pub max_image_size: usize,
}

impl Config {
    /// Address the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            api_key: args.api_key,
            api_base_url: args.api_base_url,
            model: args.model,
            max_image_size: args.max_image_size,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("model", &self.model)
            .field("max_image_size", &self.max_image_size)
            .finish()
    }
}
