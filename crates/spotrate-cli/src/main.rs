//! CLI entry point - the composition root.
//!
//! Commands that read or change data go through `bootstrap`; `web` builds its
//! own server context, `paths` and `categories` touch nothing on disk.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use spotrate_cli::handlers::web::WebOptions;
use spotrate_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "spotrate=debug,tower_http=debug"
    } else {
        "spotrate=info,tower_http=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };
    let data_dir = cli.data_dir.as_deref();

    match command {
        Commands::Web {
            port,
            api_only,
            static_dir,
            allowed_origin,
        } => {
            let config = CliConfig::with_data_dir(data_dir)?;
            let opts = WebOptions {
                port,
                api_only,
                static_dir,
                allowed_origins: allowed_origin,
            };
            handlers::web::execute(&config.paths, opts).await?;
        }
        Commands::Categories => handlers::categories::execute(),
        Commands::Paths => handlers::paths::execute(data_dir)?,
        Commands::List => {
            let ctx = bootstrap(CliConfig::with_data_dir(data_dir)?).await?;
            handlers::list::execute(&ctx).await?;
        }
        Commands::Show { id } => {
            let ctx = bootstrap(CliConfig::with_data_dir(data_dir)?).await?;
            handlers::show::execute(&ctx, &id).await?;
        }
        Commands::Remove { id, force } => {
            let ctx = bootstrap(CliConfig::with_data_dir(data_dir)?).await?;
            handlers::remove::execute(&ctx, &id, force).await?;
        }
        Commands::Stats => {
            let ctx = bootstrap(CliConfig::with_data_dir(data_dir)?).await?;
            handlers::stats::execute(&ctx).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads its `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
