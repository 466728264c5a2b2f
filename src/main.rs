//! Pagepicker: paginated number picker with client-persisted page state.

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use pagepicker::{browse, Args, ClientConfig, Command, Config, PageServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug {
        Level::DEBUG
    } else if args.silent {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Serve(serve) => {
            let server = PageServer::new(Config::from(serve));
            println!(
                r#"
Page picker is starting at {}

Open {}/ in a browser.

Press Ctrl+C to stop the server.
"#,
                server.bind_address(),
                server.base_url()
            );
            server.run().await
        }
        Command::Browse(browse_args) => browse::run(ClientConfig::from(browse_args)).await,
    }
}
