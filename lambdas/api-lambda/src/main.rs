mod http_handler;

use std::sync::Arc;

use lambda_http::{run, service_fn, Error, Request};
use todo_shared::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch stamps every line, so no timestamps or colours here
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();

    let state = Arc::new(AppState::from_env().await);

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
