use anyhow::Result;
use prometheus::Registry;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;
use crate::metrics;

const METRICS_PREFIX: &str = "itemservice";

pub struct Observability {
    pub registry: Registry,
}

impl Observability {
    pub fn init(log_format: LogFormat) -> Result<Self> {
        let registry = Self::registry()?;

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "api=debug,shared=debug,tower_http=debug".into());

        let subscriber = tracing_subscriber::registry().with(env_filter);
        match log_format {
            LogFormat::Json => subscriber
                .with(tracing_subscriber::fmt::layer().json().with_current_span(false))
                .try_init()?,
            LogFormat::Pretty => subscriber
                .with(tracing_subscriber::fmt::layer())
                .try_init()?,
        }

        tracing::info!(?log_format, "Observability stack initialized (Prometheus + tracing)");
        Ok(Self { registry })
    }

    /// Prefixed registry with every collector registered
    pub fn registry() -> Result<Registry> {
        let registry = Registry::new_custom(Some(METRICS_PREFIX.into()), None)?;
        metrics::register_all(&registry)?;
        Ok(registry)
    }
}
