use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(name = "leetgen")]
#[command(about = "A CLI for scaffolding LeetCode solution and test files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, help = "Enable verbose debug output")]
    verbose: bool,

    #[arg(long, global = true, help = "Perform a dry run without writing files")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Fetch a problem and scaffold its solution and test files")]
    New,

    #[command(about = "Initialize the solutions repository")]
    Init,

    #[command(about = "Update the solution counters in README.md")]
    Count,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = cli::Config {
        verbose: cli.verbose,
        dry_run: cli.dry_run,
    };

    match cli.command {
        Commands::New => {
            cli::new_problem(&config).await?;
        }
        Commands::Init => {
            cli::init_repository(&config).await?;
        }
        Commands::Count => {
            cli::update_counters(&config).await?;
        }
    }

    Ok(())
}
