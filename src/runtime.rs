//! Runtime - wires host capabilities into the client services.
//!
//! `Host` bundles one adapter per port. `Host::production` picks the real
//! ones (reqwest, JSON file, tokio timers, console toasts); tests build a
//! `Host` from mocks and get the exact same wiring.

use std::sync::Arc;

use thiserror::Error;

use crate::adapters::{
    ConsoleSurface, InMemoryKeyValueStore, JsonFileKeyValueStore, LogNavigator, ReqwestTransport,
    TokioScheduler,
};
use crate::application::{EduClient, NotificationService, RequestGateway, SessionStore};
use crate::config::{AppConfig, ValidationError};
use crate::domain::validation::UploadPolicy;
use crate::ports::{HttpTransport, KeyValueStore, Navigator, NotificationSurface, Scheduler};

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("No tokio runtime available: {0}")]
    NoAsyncRuntime(String),
}

/// One adapter per port.
#[derive(Clone)]
pub struct Host {
    pub transport: Arc<dyn HttpTransport>,
    pub durable: Arc<dyn KeyValueStore>,
    pub tab: Arc<dyn KeyValueStore>,
    pub scheduler: Arc<dyn Scheduler>,
    pub surface: Arc<dyn NotificationSurface>,
    pub navigator: Arc<dyn Navigator>,
}

impl Host {
    /// Real adapters. Must be called from within a tokio runtime.
    pub fn production(config: &AppConfig) -> Result<Self, RuntimeError> {
        let scheduler = TokioScheduler::from_current(config.notifications.frame_interval())
            .map_err(|e| RuntimeError::NoAsyncRuntime(e.to_string()))?;

        Ok(Self {
            transport: Arc::new(ReqwestTransport::new(config.api.base_url.clone())),
            durable: Arc::new(JsonFileKeyValueStore::new(&config.session.durable_path)),
            tab: Arc::new(InMemoryKeyValueStore::new()),
            scheduler: Arc::new(scheduler),
            surface: Arc::new(ConsoleSurface::new()),
            navigator: Arc::new(LogNavigator),
        })
    }
}

/// The assembled client services.
#[derive(Clone)]
pub struct Runtime {
    pub notifications: NotificationService,
    pub sessions: SessionStore,
    pub client: EduClient,
    pub upload_policy: UploadPolicy,
}

impl Runtime {
    /// Validates `config` and wires `host` into the services.
    pub fn new(config: &AppConfig, host: Host) -> Result<Self, RuntimeError> {
        config.validate()?;

        let notifications = NotificationService::with_timings(
            host.scheduler,
            host.surface,
            config.notifications.timings(),
        );
        let sessions = SessionStore::with_key(host.durable, host.tab, &config.session.storage_key);
        let gateway = RequestGateway::new(
            host.transport,
            Arc::new(sessions.clone()),
            Arc::new(notifications.clone()),
        );
        let client = EduClient::new(gateway, sessions.clone(), host.navigator)
            .with_login_page(&config.api.login_page);

        Ok(Self {
            notifications,
            sessions,
            client,
            upload_policy: config.upload.policy(),
        })
    }

    /// Production wiring from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, RuntimeError> {
        let host = Host::production(config)?;
        Self::new(config, host)
    }
}
