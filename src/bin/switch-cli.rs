use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "switch-cli")]
#[command(about = "Management CLI for the switch store daemon", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8081")]
    url: String,

    #[arg(short, long, default_value = "CHANGE_ME_IN_PRODUCTION")]
    key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show daemon version and current generation
    Status,
    /// List all active switches
    List,
    /// Show the raw value of one switch
    Get { key: String },
    /// Replace all switches with the contents of a file
    Push { file: PathBuf },
    /// Ask the daemon to reload its configured switch file
    Reload,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", cli.key))?,
    );

    let request = match cli.command {
        Commands::Status => client.get(admin_url(&cli.url, &["status"])?),
        Commands::List => client.get(admin_url(&cli.url, &["switches"])?),
        Commands::Get { key } => client.get(admin_url(&cli.url, &["switches", &key])?),
        Commands::Push { file } => {
            let body = tokio::fs::read_to_string(&file).await?;
            client.post(admin_url(&cli.url, &["switches"])?).body(body)
        }
        Commands::Reload => client.post(admin_url(&cli.url, &["reload"])?),
    };

    let res = request.headers(headers).send().await?;
    print_response(res).await
}

/// Build `<base>/admin/<segments..>`, percent-encoding each segment so
/// keys containing `#`, `?` or `/` reach the daemon intact.
fn admin_url(base: &str, segments: &[&str]) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| format!("{} cannot be used as a base URL", base))?
        .pop_if_empty()
        .push("admin")
        .extend(segments);
    Ok(url)
}

fn ensure_success(status: StatusCode, body: &str) -> Result<(), String> {
    if status.is_success() {
        return Ok(());
    }
    if body.is_empty() {
        Err(format!("Admin API returned status {}", status))
    } else {
        Err(format!("Admin API returned status {}: {}", status, body))
    }
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        let text = res.text().await.unwrap_or_default();
        return ensure_success(status, &text).map_err(Into::into);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
