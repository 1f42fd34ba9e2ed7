use crate::access::AdminPolicy;
use crate::config::Config;
use crate::store::Store;
use std::sync::Arc;
use std::time::Duration;

/// Outbound webhook calls give up after this long; nothing is retried.
const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state, cloned into every actix worker as `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Store,
    pub policy: AdminPolicy,
    /// Client for the notification webhook.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, store: Store) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(WEBHOOK_TIMEOUT).build()?;
        Ok(Self {
            policy: AdminPolicy::new(&config.admin_emails),
            config: Arc::new(config),
            store,
            http,
        })
    }
}
