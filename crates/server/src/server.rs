use std::future::Future;

use tokio::net::TcpListener;

use crate::routes::create_router;
use crate::state::AppState;

/// Serve the API on an already bound listener until `shutdown` resolves
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "listening");
    }

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
