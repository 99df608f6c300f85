//! HTTP server orchestration

use tracing::info;

use crate::context::AppContext;
use crate::routes::router;

/// PassVault HTTP server
pub struct VaultServer {
    ctx: AppContext,
    port: u16,
}

impl VaultServer {
    /// Create a new server
    pub fn new(ctx: AppContext, port: u16) -> Self {
        Self { ctx, port }
    }

    /// Run until interrupted with Ctrl-C
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = router(self.ctx);

        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("Server listening on http://localhost:{}", self.port);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
