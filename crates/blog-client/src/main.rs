//! `blog-client`: read the feed or publish a post from the terminal.

use std::io;
use std::process::ExitCode;

use blog_client::actions::{show_feed, submit_post};
use blog_client::message::flash;
use blog_client::{BlogApi, DEFAULT_API_BASE};
use chrono::Local;
use clap::{Parser, Subcommand};
use reqwest::Url;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "blog-client", version, about = "Read and publish blog posts")]
struct Cli {
    /// API base URL.
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: Url,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every post, newest first.
    List,
    /// Publish a post and show the refreshed feed.
    Post {
        /// Post title.
        #[arg(long, default_value = "")]
        title: String,
        /// Post body.
        #[arg(long, default_value = "")]
        content: String,
        /// Author of the post.
        #[arg(long, default_value_t = 1)]
        user_id: i64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .compact()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!(error = %err, "blog-client failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> io::Result<bool> {
    let api = BlogApi::new(cli.api_base).map_err(io::Error::other)?;
    let mut out = io::stdout().lock();

    match cli.command {
        Command::List => show_feed(&api, &mut out, &Local).await,
        Command::Post {
            title,
            content,
            user_id,
        } => {
            let message = submit_post(&api, user_id, &title, &content).await;
            if message.is_success() {
                show_feed(&api, &mut out, &Local).await?;
            }
            flash(&mut out, &message).await?;
            Ok(message.is_success())
        }
    }
}
