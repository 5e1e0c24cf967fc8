use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "details-cli")]
#[command(about = "Query a running item-details service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the root page
    Root,
    /// Fetch details for an item and subitem
    Item {
        item_id: String,
        subitem_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Root => {
            let res = client.get(format!("{}/", base)).send().await?;
            if report_failure(&res) {
                return Ok(());
            }
            println!("{}", res.text().await?);
        }
        Commands::Item { item_id, subitem_id } => {
            let url = details_url(&cli.url, &item_id, &subitem_id)?;
            let res = client.get(url).send().await?;
            if report_failure(&res) {
                return Ok(());
            }
            let json: Value = res.json().await?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

/// Build `<base>/items/<item>/subitems/<subitem>`, encoding each ID as one segment.
fn details_url(
    base: &str,
    item_id: &str,
    subitem_id: &str,
) -> Result<reqwest::Url, Box<dyn std::error::Error>> {
    let mut url = reqwest::Url::parse(base.trim_end_matches('/'))?;
    url.path_segments_mut()
        .map_err(|_| "URL cannot be a base")?
        .pop_if_empty()
        .extend(["items", item_id, "subitems", subitem_id]);
    Ok(url)
}

fn report_failure(res: &reqwest::Response) -> bool {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        return true;
    }
    false
}
