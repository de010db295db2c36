use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use events::config::{
    CONTRACT_ADDR_KEY, DEFAULT_CONTRACT_ADDR, DEFAULT_NODE_URL, DEFAULT_ROOM_ADDR, DEFAULT_STREAM_URL, NODE_URL_KEY,
    ROOM_ADDR_KEY, STREAM_URL_KEY,
};
use events::node::{parse_transaction_status, parse_username_view, transaction_url, view_url};
use events::{ChatAction, ChatConfig, Classifier, ConfigError, FeedEntry, FeedKind, TransactionStatus, ViewRequest};
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("websocket connect failed: {0}")]
    WsConnect(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("websocket error: {0}")]
    Ws(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("timed out waiting for websocket frame")]
    Timeout,
    #[error("node returned HTTP {status}: {message}")]
    NodeError { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "chat-cli", about = "Chat room event stream and fullnode CLI")]
struct Cli {
    #[arg(long, env = CONTRACT_ADDR_KEY, default_value = DEFAULT_CONTRACT_ADDR)]
    contract: String,

    #[arg(long, env = ROOM_ADDR_KEY, default_value = DEFAULT_ROOM_ADDR)]
    room: String,

    #[arg(long, env = STREAM_URL_KEY, default_value = DEFAULT_STREAM_URL)]
    stream_url: String,

    #[arg(long, env = NODE_URL_KEY, default_value = DEFAULT_NODE_URL)]
    node_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the subscription directives sent on connect.
    Directives,
    /// Subscribe to the event stream and print feed entries.
    Tail(TailArgs),
    /// Look up the display name stored for an account.
    Username { address: String },
    /// Print the entry function payload for a chat action.
    Payload(PayloadCommand),
    /// Show the status of a submitted transaction.
    Tx { hash: String },
}

#[derive(Args, Debug)]
struct TailArgs {
    #[arg(long, help = "Stop after this many feed entries")]
    limit: Option<usize>,

    #[arg(long, help = "Give up if no frame arrives within this many seconds")]
    idle_timeout: Option<u64>,

    #[arg(long, default_value_t = false, help = "Print entries as JSON lines")]
    json: bool,
}

#[derive(Args, Debug)]
struct PayloadCommand {
    #[command(subcommand)]
    action: PayloadAction,
}

#[derive(Subcommand, Debug)]
enum PayloadAction {
    Join { username: String },
    Leave,
    Send { text: String },
    React { message_index: u64 },
}

impl From<PayloadAction> for ChatAction {
    fn from(action: PayloadAction) -> Self {
        match action {
            PayloadAction::Join { username } => Self::Join { username },
            PayloadAction::Leave => Self::Leave,
            PayloadAction::Send { text } => Self::Send { text },
            PayloadAction::React { message_index } => Self::React { message_index },
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = ChatConfig {
        contract_addr: cli.contract,
        room_addr: cli.room,
        stream_url: cli.stream_url,
        node_url: cli.node_url.trim_end_matches('/').to_owned(),
        ..ChatConfig::default()
    };
    config.validate()?;

    match cli.command {
        Command::Directives => {
            for directive in Classifier::from_config(&config).subscriptions() {
                println!("{directive}");
            }
            Ok(())
        }
        Command::Tail(args) => run_tail(&config, args).await,
        Command::Username { address } => run_username(&config, &address).await,
        Command::Payload(command) => {
            let payload = ChatAction::from(command.action).payload(&config);
            print_json(&serde_json::to_value(payload)?)
        }
        Command::Tx { hash } => run_tx(&config, &hash).await,
    }
}

async fn run_tail(config: &ChatConfig, args: TailArgs) -> Result<(), CliError> {
    let classifier = Classifier::from_config(config);
    let (mut stream, _) = connect_async(config.stream_url.as_str())
        .await
        .map_err(|error| CliError::WsConnect(Box::new(error)))?;

    for directive in classifier.subscriptions() {
        stream
            .send(Message::Text(directive.into()))
            .await
            .map_err(|error| CliError::Ws(Box::new(error)))?;
    }
    eprintln!("subscribed to {}", config.stream_url);

    let mut shown = 0_usize;
    let mut dropped = 0_usize;
    loop {
        if args.limit.is_some_and(|limit| shown >= limit) {
            break;
        }

        let next = match args.idle_timeout {
            Some(secs) => tokio::time::timeout(Duration::from_secs(secs), stream.next())
                .await
                .map_err(|_| CliError::Timeout)?,
            None => stream.next().await,
        };
        let Some(message) = next else {
            break;
        };

        let text = match message.map_err(|error| CliError::Ws(Box::new(error)))? {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };

        match classifier.classify_frame(text.as_str()) {
            Ok(Some(entry)) => {
                shown = shown.saturating_add(1);
                if args.json {
                    println!("{}", serde_json::to_string(&entry)?);
                } else {
                    println!("{}", format_entry(&entry));
                }
            }
            Ok(None) => {}
            Err(error) => {
                dropped = dropped.saturating_add(1);
                eprintln!("dropping event frame: {error}");
            }
        }
    }

    eprintln!("stream ended: {shown} entries, {dropped} dropped");
    Ok(())
}

async fn run_username(config: &ChatConfig, address: &str) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client
        .post(view_url(config))
        .json(&ViewRequest::username(config, address))
        .send()
        .await?;
    let body = read_node_json(response).await?;
    match parse_username_view(&body) {
        Some(name) => println!("{name}"),
        None => println!("(no username)"),
    }
    Ok(())
}

async fn run_tx(config: &ChatConfig, hash: &str) -> Result<(), CliError> {
    let response = reqwest::Client::new().get(transaction_url(config, hash)).send().await?;
    let status = if response.status() == reqwest::StatusCode::NOT_FOUND {
        TransactionStatus::Pending
    } else {
        parse_transaction_status(&read_node_json(response).await?)
    };
    println!("{}", format_status(&status));
    Ok(())
}

async fn read_node_json(response: reqwest::Response) -> Result<Value, CliError> {
    let status = response.status();
    let body = response.text().await?;
    parse_node_body(status, &body)
}

/// Error statuses keep whatever body came back; a success body must be JSON.
fn parse_node_body(status: reqwest::StatusCode, body: &str) -> Result<Value, CliError> {
    if !status.is_success() {
        let message = serde_json::from_str::<Value>(body).map_or_else(|_| body.to_owned(), |value| value.to_string());
        return Err(CliError::NodeError { status: status.as_u16(), message });
    }
    Ok(serde_json::from_str(body)?)
}

fn format_entry(entry: &FeedEntry) -> String {
    match (entry.kind, entry.message_index) {
        (FeedKind::Chat, Some(index)) => format!("[chat #{index}] {}: {}", entry.username, entry.message),
        (FeedKind::Chat, None) => format!("[chat] {}: {}", entry.username, entry.message),
        (kind, _) => format!("[{}] {}", kind.as_str(), entry.message),
    }
}

fn format_status(status: &TransactionStatus) -> String {
    match status {
        TransactionStatus::Pending => "pending".to_owned(),
        TransactionStatus::Committed { version: Some(version) } => format!("committed at version {version}"),
        TransactionStatus::Committed { version: None } => "committed".to_owned(),
        TransactionStatus::Aborted { vm_status } => format!("aborted: {vm_status}"),
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
