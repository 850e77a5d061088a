use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Host address and port for the HTTP server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "0.0.0.0:8000")]
    pub server_addr: String,

    /// Origins allowed by CORS, comma separated.
    #[arg(
        long,
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "https://inceptai.vercel.app,http://localhost:3003"
    )]
    pub cors_origins: Vec<String>,

    // --- Chat LLM Provider Args ---
    /// API Key for Groq. The server starts without it, but every plan request fails until it is set.
    #[arg(long, env = "GROQ_API_KEY")]
    pub groq_api_key: Option<String>,

    /// Base URL for the OpenAI compatible chat completions API.
    #[arg(long, env = "CHAT_BASE_URL", default_value = "https://api.groq.com/openai/v1")]
    pub chat_base_url: String,

    /// Model name for plan generation.
    #[arg(long, env = "CHAT_MODEL", default_value = "llama-3.3-70b-versatile")]
    pub chat_model: String,
}

impl Args {
    /// The configured API key, treating a blank value as unset.
    pub fn api_key(&self) -> Option<String> {
        self.groq_api_key.clone().filter(|k| !k.trim().is_empty())
    }
}
