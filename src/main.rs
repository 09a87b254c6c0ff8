use clap::Parser;
use llm_handles::model::ModelRequest;
use llm_handles::{ModelProvider, ProviderSettings, init_tracing};
use std::error::Error;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "llm-handles",
    version,
    about = "Resolve a model handle and optionally send it a prompt"
)]
struct Cli {
    /// Provider config file (defaults to config/providers.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the primary model
    #[arg(long, conflicts_with = "specialized")]
    model: Option<String>,
    /// Use the high-capability model, falling back to the primary one
    #[arg(long)]
    specialized: bool,
    /// Probe the specialized model before using it
    #[arg(long)]
    probe: bool,
    prompt: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    debug!(config = ?cli.config, model = ?cli.model, specialized = cli.specialized, "CLI arguments parsed");

    let mut settings = ProviderSettings::load(cli.config.as_deref())?;
    if cli.probe {
        settings = settings.with_probe(true);
    }

    let mut provider = ModelProvider::from_env(settings);
    let handle = if cli.specialized {
        provider.specialized_handle().await?
    } else {
        provider.primary_handle(cli.model.as_deref())?
    };
    info!(provider = %handle.provider(), model = handle.model(), "Resolved model handle");

    if cli.prompt.is_empty() {
        println!("{}/{}", handle.provider(), handle.model());
        return Ok(());
    }

    let response = handle.chat(ModelRequest::prompt(cli.prompt.join(" "))).await?;
    println!("{}", response.message.content);
    Ok(())
}
