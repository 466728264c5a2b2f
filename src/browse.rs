//! Line-oriented terminal client.

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::client::HttpPageBackend;
use crate::config::ClientConfig;
use crate::session::PageSession;
use crate::storage::FileKeyValueStore;

const HELP: &str = "commands: n(ext) | p(rev) | g(o) <page> | s(elect) [number] | h(elp) | q(uit)";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    GoTo(i64),
    Select(Option<i64>),
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parses one input line. Returns `None` for unrecognized input.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let command = words.next()?;
        let argument = words.next();
        if words.next().is_some() {
            return None;
        }

        match (command.to_lowercase().as_str(), argument) {
            ("n" | "next", None) => Some(Self::Next),
            ("p" | "prev" | "previous", None) => Some(Self::Previous),
            ("g" | "go", Some(page)) => page.parse().ok().map(Self::GoTo),
            ("s" | "select", None) => Some(Self::Select(None)),
            ("s" | "select", Some(num)) => num.parse().ok().map(|n| Self::Select(Some(n))),
            ("h" | "help" | "?", None) => Some(Self::Help),
            ("q" | "quit" | "exit", None) => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Runs the interactive client until `quit` or end of input.
pub async fn run(config: ClientConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let storage = Arc::new(FileKeyValueStore::open(&config.state_file).await?);
    let backend = HttpPageBackend::new(&config.server)?;
    info!(
        "Browsing {} (state in {})",
        backend.base_url(),
        storage.path().display()
    );

    let mut session = PageSession::new(storage, backend);
    println!("{}", session.render_text());
    session.start().await?;
    println!("{}\n{}", session.render_text(), HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let result = match BrowseCommand::parse(&line) {
            Some(BrowseCommand::Quit) => break,
            Some(BrowseCommand::Help) | None => {
                println!("{}", HELP);
                continue;
            }
            Some(BrowseCommand::Next) => session.next().await,
            Some(BrowseCommand::Previous) => session.previous().await,
            Some(BrowseCommand::GoTo(page)) => session.go_to(page).await,
            Some(BrowseCommand::Select(num)) => session.submit(num).await.map(|_| ()),
        };

        if let Err(e) = result {
            warn!("{}", e);
        }
        println!("{}", session.render_text());
    }

    Ok(())
}
