use clap::{Parser, Subcommand};
use log::{debug, info};
use meal_finder::config::load_config;
use meal_finder::{
    build_app, render_page, ConsoleNotifier, MealDbClient, Notification, Notifier,
    UiState,
};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

type FinderApp = meal_finder::App<MealDbClient, ConsoleNotifier>;

#[derive(Parser)]
#[command(name = "meal-finder", version, about = "Search TheMealDB from the terminal")]
struct Cli {
    /// Write the rendered page to this file once the command finishes
    #[arg(long, global = true)]
    page: Option<PathBuf>,

    /// Override the recipe service base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search meals by keyword
    Search { query: Vec<String> },
    /// Show a random meal
    Random,
    /// Show a meal by id
    Lookup { id: String },
    /// Read commands from stdin, one per line
    Shell,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = load_config()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    debug!("Using recipe service at {}", config.base_url);

    let mut app = build_app(&config)?;

    match cli.command {
        Command::Search { query } => {
            app.on_search_submit(&query.join(" ")).await;
            print_panel(app.state());
        }
        Command::Random => {
            app.on_random_requested().await;
            print_panel(app.state());
        }
        Command::Lookup { id } => {
            app.on_result_item_selected(&id).await;
            print_panel(app.state());
        }
        Command::Shell => run_shell(&mut app).await?,
    }

    if let Some(path) = cli.page {
        write_page(app.state(), &path).await?;
    }

    Ok(())
}

async fn run_shell(app: &mut FinderApp) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        match command {
            "" => continue,
            "search" => app.on_search_submit(rest).await,
            "random" => app.on_random_requested().await,
            "open" => app.on_result_item_selected(rest.trim()).await,
            "click" => app.on_list_click(rest.trim()).await,
            "page" => {
                let path = if rest.trim().is_empty() {
                    "meal-finder.html"
                } else {
                    rest.trim()
                };
                write_page(app.state(), Path::new(path)).await?;
                continue;
            }
            "help" => {
                println!("search <query> | random | open <id> | click <selector> | page [path] | quit");
                continue;
            }
            "quit" | "exit" => break,
            other => {
                app.notifier()
                    .notify(&Notification::info(format!("Unknown command: {other}")));
                continue;
            }
        }
        print_panel(app.state());
    }

    Ok(())
}

fn print_panel(state: &UiState) {
    if !state.panel_visible() {
        return;
    }
    for fragment in [state.heading_html(), state.list_html(), state.detail_html()] {
        if !fragment.is_empty() {
            println!("{}", fragment);
        }
    }
}

async fn write_page(state: &UiState, path: &Path) -> Result<(), meal_finder::FinderError> {
    tokio::fs::write(path, render_page(state)).await?;
    info!("Wrote page to {}", path.display());
    Ok(())
}
