use clap::{CommandFactory, Parser};
use clap_complete::{generate, Generator};
use anyhow::Result;
use std::io;
use taskboard_report::{
    config::Config,
    cli::{Cli, Commands},
    handlers::{handle_config, handle_generate, handle_seed, handle_summary, init_logging},
};

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일 로드
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // 설정 로드
    let config = Config::load()?;
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Generate { input, format, output, now } => {
            handle_generate(&input, format.as_deref(), output.as_deref(), now.as_deref(), &config).await?;
        }
        Commands::Summary { input, format, now } => {
            handle_summary(&input, &format, now.as_deref()).await?;
        }
        Commands::Seed { output, projects, users, tasks, seed } => {
            handle_seed(&output, projects, users, tasks, seed)?;
        }
        Commands::Config { action } => {
            handle_config(action)?;
        }
        Commands::Completion { shell } => {
            print_completions(shell, &mut Cli::command());
        }
    }

    Ok(())
}

pub fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
