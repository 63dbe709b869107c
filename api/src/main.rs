use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use healthflow_api::{
    application::{console, http::server::http_server, logging::init_logger},
    args::{Cli, Command},
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let cli = Cli::parse();
    init_logger(&cli.log);

    match cli.command {
        Command::Serve(args) => http_server::serve(Arc::new(args)).await,
        Command::Plan(args) => console::run(args).await,
    }
}
