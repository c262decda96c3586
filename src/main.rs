use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use travel_recommendation::api::AppState;
use travel_recommendation::{
    ContactForm, Prompt, PromptReply, SearchSession, TravelRecConfig, TravelRecError,
    build_source, logging, web,
};

#[derive(Parser)]
#[command(name = "travel-recommendation")]
#[command(about = "Search beaches, temples and cities for your next trip", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog once and print the recommendations
    Search {
        term: String,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Prompt for searches until `:quit`
    Interactive,
    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
    /// Serve the JSON API and static front-end
    Serve {
        #[arg(long, help = "Override the configured port")]
        port: Option<u16>,
    },
    /// Show how many places the catalog holds
    Catalog,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<TravelRecError>() {
                Some(err) => eprintln!("{}", err.user_message()),
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = TravelRecConfig::load_from_path(cli.config.clone())?;
    logging::init(&config.logging, cli.verbose)?;

    let source = build_source(&config)?;
    let session = Arc::new(SearchSession::from_config(source, &config));

    match cli.command {
        Commands::Search { term, json } => {
            let model = session.lookup(&term).await?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&model).context("Failed to encode results")?
                );
            } else {
                println!("{model}");
            }
        }
        Commands::Interactive => interactive(&session).await?,
        Commands::Contact {
            name,
            email,
            message,
        } => {
            let mut form = ContactForm::new(&name, &email, &message);
            let ack = form.submit()?;
            println!("{}", ack.message);
        }
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.web.port = port;
            }
            web::run(AppState { session }, &config.web).await?;
        }
        Commands::Catalog => {
            let catalog = session.source().fetch().await?;
            println!("{}", catalog.stats());
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn interactive(session: &SearchSession) -> Result<()> {
    println!("Type a destination or keyword (beach, temple, country...).");
    println!("Commands: :clear, :visit N, :quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut prompt = Prompt::new(session);

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        match prompt.handle(&line).await {
            PromptReply::Show(text) => println!("{text}"),
            PromptReply::Silent => {}
            PromptReply::Quit => break,
        }
    }

    Ok(())
}
