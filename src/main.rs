// src/main.rs
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use plivo::xml::{Element, SpeakOptions, Voice};
use plivo::{ClientConfig, Params, RestApi};

/// Plivo command line client
#[derive(Debug, Parser)]
#[command(name = "plivo", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the account details.
    Account,
    /// List the UUIDs of calls currently in progress.
    LiveCalls,
    /// List call detail records.
    Cdrs {
        /// Maximum number of records to return.
        #[arg(long, default_value_t = 20)]
        limit: u32,
        /// Offset into the record list.
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Hang up a call in progress.
    Hangup {
        /// UUID of the call to hang up.
        call_uuid: String,
    },
    /// Print a call-control document that speaks the given text.
    SpeakXml {
        /// Text to speak.
        text: String,
        /// MAN or WOMAN.
        #[arg(long, default_value = "woman")]
        voice: Voice,
        #[arg(long, default_value = "en-US")]
        language: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        // Building a document needs no credentials
        Command::SpeakXml {
            text,
            voice,
            language,
        } => speak_xml(&text, voice, language),
        Command::Account => print_json(&client()?.get_account().await?),
        Command::LiveCalls => print_json(&client()?.get_live_calls().await?),
        Command::Cdrs { limit, offset } => {
            let params = Params::new().set("limit", limit).set_opt("offset", offset);
            print_json(&client()?.get_cdrs(params).await?)
        }
        Command::Hangup { call_uuid } => {
            let reply = client()?
                .hangup_call(Params::new().set("call_uuid", &call_uuid))
                .await?;
            print_json(&reply)
        }
    }
}

fn client() -> anyhow::Result<RestApi> {
    let config = ClientConfig::from_env().context("Failed to load configuration")?;
    info!("Using Plivo API {} for account {}", config.version, config.auth_id);

    RestApi::with_config(config).context("Failed to create Plivo client")
}

fn speak_xml(text: &str, voice: Voice, language: String) -> anyhow::Result<()> {
    let mut response = Element::response();
    response.add_speak(
        text,
        SpeakOptions {
            voice,
            language,
            ..Default::default()
        },
    )?;
    println!("{}", response.to_xml()?);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
