//! Command-line arguments and configuration.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Default port for the HTTP service.
pub const DEFAULT_PORT: u16 = 3000;

/// Default host for the HTTP service.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default location of the terminal client's persisted state.
pub const DEFAULT_STATE_FILE: &str = ".pagepicker-state.json";

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "pagepicker")]
#[command(about = "Paginated number picker with client-persisted page state")]
#[command(version)]
pub struct Args {
    /// Enable debug logging.
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    /// Enable silent mode (minimal logging).
    #[arg(long, short = 's', global = true)]
    pub silent: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP service.
    Serve(ServeArgs),
    /// Browse pages from the terminal against a running service.
    Browse(BrowseArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ServeArgs {
    /// Host address to bind to.
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct BrowseArgs {
    /// Base URL of the service.
    #[arg(long, default_value_t = format!("http://{}:{}", DEFAULT_HOST, DEFAULT_PORT))]
    pub server: String,

    /// File holding the persisted current page.
    #[arg(long, default_value = DEFAULT_STATE_FILE)]
    pub state_file: PathBuf,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl From<ServeArgs> for Config {
    fn from(args: ServeArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
        }
    }
}

impl Config {
    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Terminal client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service.
    pub server: String,
    /// File holding the persisted current page.
    pub state_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: format!("http://{}:{}", DEFAULT_HOST, DEFAULT_PORT),
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
        }
    }
}

impl From<BrowseArgs> for ClientConfig {
    fn from(args: BrowseArgs) -> Self {
        Self {
            server: args.server,
            state_file: args.state_file,
        }
    }
}
