// Application state for HTTP handlers
use crate::application::controller::DashboardController;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<DashboardController>,
    /// Flips to true when the server is shutting down; ends open streams.
    pub shutdown: watch::Receiver<bool>,
}

impl AppState {
    pub fn new(controller: Arc<DashboardController>, shutdown: watch::Receiver<bool>) -> Self {
        Self {
            controller,
            shutdown,
        }
    }

    /// Resolves once shutdown is signalled. Never resolves if the signal is gone.
    pub async fn closed(&self) {
        let mut shutdown = self.shutdown.clone();
        if shutdown.wait_for(|stop| *stop).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
