use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Command-line client for fetch-relay", long_about = None)]
struct Cli {
    /// Base URL of the relay.
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a target URL through the relay
    Fetch {
        /// Absolute URL to fetch
        target: String,
        /// Print response headers
        #[arg(short = 'i', long)]
        include_headers: bool,
    },
    /// Print the relay's OpenAPI description
    Spec,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Fetch {
            target,
            include_headers,
        } => {
            let res = client
                .get(format!("{}/api/fetch", base))
                .query(&[("url", target.as_str())])
                .send()
                .await?;
            print_fetch(res, include_headers).await?;
        }
        Commands::Spec => {
            let res = client.get(format!("{}/openapi.json", base)).send().await?;
            if !res.status().is_success() {
                eprintln!("Error: relay returned status {}", res.status());
                return Ok(());
            }
            let json: Value = res.json().await?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

async fn print_fetch(res: reqwest::Response, include_headers: bool) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();

    if include_headers || !status.is_success() {
        eprintln!("{}", status);
    }
    if include_headers {
        for (name, value) in res.headers() {
            eprintln!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
        }
        eprintln!();
    }

    if !status.is_success() {
        let text = res.text().await?;
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(body)) if body.contains_key("error") => {
                eprintln!("Error: {}", body["error"].as_str().unwrap_or_default());
            }
            _ => eprintln!("Response: {}", text),
        }
        return Ok(());
    }

    let body = res.bytes().await?;
    println!("{}", String::from_utf8_lossy(&body));
    Ok(())
}
