pub mod cli;
pub mod error;
pub mod llm;
pub mod models;
pub mod planner;
pub mod server;

use cli::Args;
use llm::groq::GroqChatClient;
use llm::{ CompletionClient, LlmConfig };
use log::{ info, warn };
use planner::Planner;
use server::{ AppState, Server };
use std::error::Error;
use std::sync::Arc;

/// Builds the completion client when an API key is present. Without one the
/// server still starts so the health route answers.
pub fn build_planner(args: &Args) -> Result<Planner, Box<dyn Error + Send + Sync>> {
    let chat_client: Option<Arc<dyn CompletionClient>> = match args.api_key() {
        Some(api_key) => {
            let config = LlmConfig {
                api_key: Some(api_key),
                completion_model: Some(args.chat_model.clone()),
                base_url: Some(args.chat_base_url.clone()),
            };
            let client = GroqChatClient::from_config(&config)?;
            info!(
                "Chat client configured: Model={}, BaseURL={}",
                args.chat_model,
                args.chat_base_url
            );
            Some(Arc::new(client) as Arc<dyn CompletionClient>)
        }
        None => {
            warn!("GROQ_API_KEY is not set. Plan requests will fail until it is configured.");
            None
        }
    };

    Ok(Planner::new(chat_client))
}

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Project Planner Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Chat Model: {}", args.chat_model);
    info!("Chat Base URL: {}", args.chat_base_url);
    info!("API Key configured: {}", if args.api_key().is_some() { "yes" } else { "no" });
    info!("CORS Origins: {}", args.cors_origins.join(", "));
    info!("-------------------------------------");

    let planner = build_planner(&args)?;
    let server = Server::new(args.server_addr.clone(), AppState::new(planner), args.cors_origins.clone());
    server.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn planner_without_key_is_unconfigured() {
        let args = Args::try_parse_from(["project-planner", "--groq-api-key", ""]).unwrap();
        assert!(!build_planner(&args).unwrap().is_configured());
    }

    #[test]
    fn planner_with_key_is_configured() {
        let args = Args::try_parse_from(["project-planner", "--groq-api-key", "gsk_test"]).unwrap();
        assert!(build_planner(&args).unwrap().is_configured());
    }
}
