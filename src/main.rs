use clap::Parser;

mod app_context;
mod auth;
mod cli;
mod games;
mod health;
mod http;
mod imagery;
mod logging;
mod map;
mod scheduler;
mod scoring;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init(&args);
    auth::init(&args);
    let app_context = app_context::init(&args);
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .expect("Failed to serve the app.");
}
