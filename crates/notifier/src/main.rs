#[tokio::main]
async fn main() {
    bookstock_observability::init();

    let app = bookstock_notifier::build_app();

    let listener = tokio::net::TcpListener::bind("0.0.0.0:4000")
        .await
        .expect("failed to bind 0.0.0.0:4000");

    tracing::info!("notifier listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
