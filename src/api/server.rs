//! HTTP Server
//!
//! Binds the listen address and serves the router until shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::{EmployeeError, Result};
use crate::service::EmployeeService;

use super::{router, AppState};

/// HTTP server for the employee service
pub struct Server {
    /// Bound listener (port 0 in the config resolves to a free port)
    listener: TcpListener,

    service: Arc<EmployeeService>,
}

impl Server {
    /// Bind the configured listen address
    pub async fn bind(config: &Config, service: Arc<EmployeeService>) -> Result<Self> {
        let addr = config.socket_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(EmployeeError::io("Error binding listen address"))?;

        Ok(Self { listener, service })
    }

    /// Address actually listened on
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .map_err(EmployeeError::io("Error reading listen address"))
    }

    /// Serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("Listening on http://{}", self.local_addr()?);

        axum::serve(self.listener, router(AppState::new(self.service)))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(EmployeeError::io("HTTP server error"))
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => tracing::error!("Failed to listen for Ctrl+C: {}", e),
    }
}
