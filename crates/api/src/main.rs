#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tally_observability::init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let url = std::env::var("APP_URL").unwrap_or_else(|_| format!("http://{host}:{port}"));

    let app = tally_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;

    println!("{url}");
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
