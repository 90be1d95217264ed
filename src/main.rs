use anyhow::Context;
use clap::{Parser, Subcommand};
use meili_client::config::CONFIG;
use meili_client::{Client, Config, SearchRequest};

#[derive(Parser, Debug)]
#[command(name = "meili", about = "Command-line client for a Meilisearch server")]
struct Cli {
    /// Server address, defaults to MEILI_HOST
    #[arg(long, global = true)]
    host: Option<String>,

    /// API key, defaults to MEILI_MASTER_KEY
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all indexes
    Indexes,
    CreateIndex {
        uid: String,
        #[arg(long)]
        primary_key: Option<String>,
    },
    DeleteIndex {
        uid: String,
    },
    /// Search an index and print the hits as JSON
    Search {
        uid: String,
        q: String,
        #[arg(long)]
        offset: Option<usize>,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        filters: Option<String>,
        #[arg(long, value_delimiter = ',')]
        attributes_to_retrieve: Option<Vec<String>>,
        #[arg(long)]
        matches: bool,
    },
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config {
        host_url: cli.host.unwrap_or_else(|| CONFIG.host_url.clone()),
        api_key: cli.api_key.or_else(|| CONFIG.api_key.clone()),
    };
    let client = Client::new(config).context("invalid server configuration")?;

    match cli.command {
        Command::Indexes => {
            for index in client.get_indexes().await.context("listing indexes")? {
                println!(
                    "{}\t{}",
                    index.uid,
                    index.primary_key.as_deref().unwrap_or("-")
                );
            }
        }
        Command::CreateIndex { uid, primary_key } => {
            let info = client
                .create_index(&uid, primary_key.as_deref())
                .await
                .with_context(|| format!("creating index {uid}"))?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Command::DeleteIndex { uid } => {
            client
                .delete_index(&uid)
                .await
                .with_context(|| format!("deleting index {uid}"))?;
        }
        Command::Search {
            uid,
            q,
            offset,
            limit,
            filters,
            attributes_to_retrieve,
            matches,
        } => {
            let mut request = SearchRequest::new(q)
                .with_filters(filters.as_deref())
                .with_matches(matches);
            if let Some(offset) = offset {
                request = request.with_offset(offset);
            }
            if let Some(limit) = limit {
                request = request.with_limit(limit);
            }
            if let Some(attributes) = attributes_to_retrieve {
                request = request.with_attributes_to_retrieve(attributes);
            }

            let results = client
                .index(&uid)
                .search::<serde_json::Value>(&request)
                .await
                .with_context(|| format!("searching index {uid}"))?;
            tracing::info!(
                "{} hits in {}ms",
                results.nb_hits,
                results.processing_time_ms
            );
            println!("{}", serde_json::to_string_pretty(&results.hits)?);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Also picks up `log` records from the library through the default bridge.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
