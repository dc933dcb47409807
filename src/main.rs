mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "campus")]
#[command(about = "Browse campus events, support services and safety information")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, filtered and sorted by start time
    Events {
        /// Match against title, description and venue
        #[arg(short, long)]
        query: Option<String>,

        /// today, week, month or all
        #[arg(short, long)]
        range: Option<String>,

        /// upcoming, past or all
        #[arg(short, long)]
        when: Option<String>,

        /// Only these categories (repeatable, e.g. -c talk -c club)
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// Only bookmarked events
        #[arg(short, long)]
        saved: bool,

        /// Print the matching events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one event with map links
    Show { id: String },
    /// Bookmark an event, or remove the bookmark if already saved
    Save { id: String },
    /// List bookmarked events
    Saved,
    /// Write an event as an .ics file
    Export {
        id: String,

        /// Output path ("-" for stdout). Defaults to a name from the title
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Search the support directory
    Services {
        query: Option<String>,

        /// Category chip, e.g. "IT Support" or "wellbeing"
        #[arg(long)]
        cat: Option<String>,

        /// Read queries from stdin, searching once typing settles
        #[arg(short, long, conflicts_with = "query")]
        interactive: bool,
    },
    /// Search frequently asked questions
    Faqs { query: Option<String> },
    /// Show an information page (emergency, safety, ...)
    Page { slug: Option<String> },
    /// Emergency contacts
    Contacts,
    /// Emergency exits
    Exits {
        query: Option<String>,

        /// Recommend the open exit nearest this location
        #[arg(long)]
        from: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("campus=warn,campus_core=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Events {
            query,
            range,
            when,
            categories,
            saved,
            json,
        } => {
            let filter = commands::events::build_filter(query, range, when, &categories, saved)?;
            commands::events::run(filter, json)
        }
        Commands::Show { id } => commands::events::show(&id),
        Commands::Save { id } => commands::bookmarks::toggle(&id),
        Commands::Saved => commands::bookmarks::list(),
        Commands::Export { id, output } => commands::export::run(&id, output),
        Commands::Services {
            query,
            cat,
            interactive,
        } => {
            if interactive {
                commands::services::interactive(cat.as_deref()).await
            } else {
                commands::services::run(cat.as_deref(), query.as_deref().unwrap_or_default())
            }
        }
        Commands::Faqs { query } => commands::services::faqs(query.as_deref().unwrap_or_default()),
        Commands::Page { slug } => commands::pages::show(slug.as_deref()),
        Commands::Contacts => commands::pages::contacts(),
        Commands::Exits { query, from } => commands::pages::exits(query.as_deref(), from.as_deref()),
    }
}
