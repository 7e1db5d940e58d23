//! LlamaChat - Chat with a hosted LLM from the terminal
//!
//! A Rust implementation of the Llama chat platform: conversational chat,
//! website analysis and image generation.

use anyhow::Result;
use clap::Parser;
use std::io::{BufRead, Write};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use llamachat::backend::{GroqClient, ImageApiClient};
use llamachat::config::Config;
use llamachat::conversation::MessageKind;
use llamachat::core::prompt::PromptKind;
use llamachat::engine::ChatEngine;
use llamachat::fetcher::WebFetcher;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Override the configured text model
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🦙 LlamaChat v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load()?;
    if let Some(model) = args.model {
        config.model = model;
    }
    if config.api_key.is_empty() {
        warn!("No API key configured - set GROQ_API_KEY or edit the config file");
    }

    let fetcher = WebFetcher::new(config.request_timeout_secs);
    let mut engine = ChatEngine::new(
        fetcher,
        Box::new(GroqClient::new(&config)),
        Box::new(ImageApiClient::new(&config)),
    );

    info!("✅ LlamaChat ready - type a question");
    info!("   Commands: /web (website analyzer), /image (image mode), /history, quit");

    let stdin = std::io::stdin();
    let mut image_count = 0usize;

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "quit" | "exit" => break,
            "/web" => {
                match engine.toggle_interface() {
                    Ok(mode) => info!("Now in {:?} mode", mode),
                    Err(e) => warn!("{}", e),
                }
                continue;
            }
            "/image" => {
                match engine.toggle_generation_mode() {
                    Ok(mode) => info!("Now in {:?} mode", mode),
                    Err(e) => warn!("{}", e),
                }
                continue;
            }
            "/history" => {
                for message in engine.conversation().messages() {
                    let body = match message.kind {
                        MessageKind::Text => message.content.as_str(),
                        MessageKind::Image => "[image]",
                    };
                    println!("{:?}: {}", message.role, body);
                }
                continue;
            }
            _ => {}
        }

        match engine.select_template() {
            PromptKind::PlainQuestion => match engine.ask_question(input).await {
                Ok(answer) => println!("{answer}"),
                Err(e) => warn!("Chat turn failed: {}", e),
            },
            PromptKind::WebsiteQa => {
                // First token is the URL, the rest is the question
                let Some((url, question)) = input.split_once(' ') else {
                    warn!("Usage in analyzer mode: <url> <question>");
                    continue;
                };
                match engine.analyze_website(url, question.trim()).await {
                    Ok(answer) => println!("{answer}"),
                    Err(e) => warn!("Website analysis failed: {}", e),
                }
            }
            PromptKind::ImagePrompt => match engine.generate_image(input).await {
                Ok(bytes) => {
                    image_count += 1;
                    let path = format!("llamachat-image-{image_count}.png");
                    std::fs::write(&path, &bytes)?;
                    info!("🎨 Saved {} ({} bytes)", path, bytes.len());
                }
                Err(e) => warn!("Image generation failed: {}", e),
            },
        }
    }

    info!("👋 Session ended");
    Ok(())
}
