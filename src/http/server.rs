//! REST server lifecycle manager.
//!
//! # Responsibilities
//! - Load configuration (section `[Rest]`, defaults on failure)
//! - Build the axum router with the middleware chain
//! - Optionally attach TLS material
//! - Bind the listener and serve as a background task
//! - Graceful shutdown with a bounded deadline

use async_trait::async_trait;
use axum::middleware::from_fn;
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use std::net::{SocketAddr, TcpListener};
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;
use tower_http::timeout::TimeoutLayer;

use crate::config::loader::load_section;
use crate::config::schema::RestConfig;
use crate::http::middleware::{logging_middleware, metrics_middleware};
use crate::http::routes::routes;
use crate::lifecycle::{Service, ServiceError};
use crate::net::tls::load_tls_material;

/// Identifier used for supervisor registration.
pub const SERVICE_NAME: &str = "rest-shell";

/// Config file section the server reads.
const CONFIG_SECTION: &str = "Rest";

/// Deadline for draining in-flight requests during shutdown.
const SHUTDOWN_DEADLINE: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServerState {
    Unconfigured,
    Initialized,
    Running,
    Stopped,
}

/// HTTP server implementing the supervisor `Service` contract.
///
/// Owns exactly one listener. State transitions:
/// `Unconfigured → Initialized → Running → Stopped`. `start` on a running
/// server and `stop` on a non-running server are no-ops returning success.
pub struct RestServer {
    config_path: Option<PathBuf>,
    config: RestConfig,
    router: Option<Router>,
    tls: Option<RustlsConfig>,
    handle: Handle,
    serve_task: Option<JoinHandle<()>>,
    local_addr: Option<SocketAddr>,
    state: ServerState,
}

impl RestServer {
    /// Create a server that loads its config from `config_path` at
    /// initialize time.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(config_path.into()),
            config: RestConfig::default(),
            router: None,
            tls: None,
            handle: Handle::new(),
            serve_task: None,
            local_addr: None,
            state: ServerState::Unconfigured,
        }
    }

    /// Create a server with an explicit config, skipping the loader.
    pub fn with_config(config: RestConfig) -> Self {
        Self {
            config_path: None,
            config,
            router: None,
            tls: None,
            handle: Handle::new(),
            serve_task: None,
            local_addr: None,
            state: ServerState::Unconfigured,
        }
    }

    /// Address the listener is actually bound to, once running.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    /// Whether TLS material was loaded at initialize time.
    pub fn tls_active(&self) -> bool {
        self.tls.is_some()
    }

    /// Build the router wrapped by the middleware chain.
    ///
    /// Layer order (outermost first): logging, metrics, request timeout.
    /// Logging must observe the raw request before metrics timing begins;
    /// metrics wraps the innermost dispatch so durations cover full handler
    /// execution, including timeouts.
    fn build_router(config: &RestConfig) -> Router {
        routes()
            .layer(TimeoutLayer::new(config.read_timeout()))
            .layer(from_fn(metrics_middleware))
            .layer(from_fn(logging_middleware))
    }

    fn bind_listener(&self) -> Result<TcpListener, ServiceError> {
        let addr: SocketAddr = self.config.address.parse().map_err(|e| ServiceError::Bind {
            addr: self.config.address.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
        })?;

        let listener = TcpListener::bind(addr).map_err(|e| ServiceError::Bind {
            addr: self.config.address.clone(),
            source: e,
        })?;

        listener
            .set_nonblocking(true)
            .map_err(|e| ServiceError::Bind {
                addr: self.config.address.clone(),
                source: e,
            })?;

        Ok(listener)
    }
}

#[async_trait]
impl Service for RestServer {
    fn name(&self) -> &str {
        SERVICE_NAME
    }

    /// Load config, build the router, and prepare TLS material.
    ///
    /// Config load failure is recovered with defaults; TLS setup failure is
    /// recovered by falling back to plaintext. Neither reaches the caller.
    async fn initialize(&mut self) -> Result<(), ServiceError> {
        tracing::info!(service = SERVICE_NAME, "Initializing REST server");

        if let Some(path) = &self.config_path {
            match load_section::<RestConfig>(path, CONFIG_SECTION) {
                Ok(config) => self.config = config,
                Err(e) => tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    "Failed to load REST configuration, using defaults"
                ),
            }
        }

        self.router = Some(Self::build_router(&self.config));

        self.tls = None;
        if self.config.enable_tls {
            match load_tls_material(&self.config).await {
                Ok(material) => self.tls = Some(material),
                Err(e) => tracing::error!(
                    error = %e,
                    "Failed to configure TLS, continuing without TLS"
                ),
            }
        }

        self.state = ServerState::Initialized;
        Ok(())
    }

    /// Bind the listener and spawn the serve loop. Returns immediately.
    ///
    /// Bind failures surface as `ServiceError::Bind`; errors from the serve
    /// loop after a successful bind are logged at error level and left to
    /// the owning process.
    async fn start(&mut self) -> Result<(), ServiceError> {
        if self.state == ServerState::Running {
            tracing::warn!(service = SERVICE_NAME, "Server already running, ignoring start");
            return Ok(());
        }

        let router = self.router.clone().ok_or(ServiceError::NotInitialized)?;
        let listener = self.bind_listener()?;
        let local_addr = listener.local_addr().map_err(|e| ServiceError::Bind {
            addr: self.config.address.clone(),
            source: e,
        })?;
        self.local_addr = Some(local_addr);

        let handle = Handle::new();
        self.handle = handle.clone();
        let tls = self.tls.clone();
        let app = router.into_make_service_with_connect_info::<SocketAddr>();

        let task = tokio::spawn(async move {
            tracing::info!(
                address = %local_addr,
                tls = tls.is_some(),
                "Starting REST server"
            );

            let result = match tls {
                Some(material) => {
                    axum_server::from_tcp_rustls(listener, material)
                        .handle(handle)
                        .serve(app)
                        .await
                }
                None => axum_server::from_tcp(listener).handle(handle).serve(app).await,
            };

            if let Err(e) = result {
                tracing::error!(error = %e, "REST server terminated unexpectedly");
            }
        });

        self.serve_task = Some(task);
        self.state = ServerState::Running;
        Ok(())
    }

    /// Graceful shutdown with a bounded deadline.
    ///
    /// Stops accepting new connections immediately; in-flight requests may
    /// complete until the deadline, after which remaining connections are
    /// abandoned. Idempotent, and a successful no-op before `start`.
    async fn stop(&mut self) -> Result<(), ServiceError> {
        if self.state != ServerState::Running {
            tracing::debug!(service = SERVICE_NAME, "Server not running, nothing to stop");
            return Ok(());
        }

        tracing::info!(service = SERVICE_NAME, "Stopping REST server");
        self.handle.graceful_shutdown(Some(SHUTDOWN_DEADLINE));

        if let Some(task) = self.serve_task.take() {
            let abort = task.abort_handle();
            // Small grace on top of the drain deadline so the task can
            // observe it and exit on its own.
            match tokio::time::timeout(SHUTDOWN_DEADLINE + Duration::from_secs(1), task).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => return Err(ServiceError::Shutdown(e.to_string())),
                Err(_) => {
                    tracing::warn!("Shutdown deadline elapsed, abandoning remaining connections");
                    abort.abort();
                }
            }
        }

        self.local_addr = None;
        self.state = ServerState::Stopped;
        Ok(())
    }
}
