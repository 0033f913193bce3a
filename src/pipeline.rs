//! Pipeline Composition
//!
//! Builds the enabled stages once at startup and layers them onto a router.

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, Router};
use tracing::info;

use crate::auth::{Anonymous, AuthenticationCheck};
use crate::config::Config;
use crate::error::{CacheHeaderError, Result};
use crate::middleware::{
    freshness_middleware, validation_middleware, FreshnessStage, ValidationStage,
};
use crate::resolver::LastModifiedResolver;

/// The configured cache header stages.
///
/// A disabled stage is `None` and never layered.
#[derive(Debug, Clone)]
pub struct CacheHeaders {
    validation: Option<ValidationStage>,
    freshness: Option<FreshnessStage>,
}

impl CacheHeaders {
    /// Creates a new CacheHeadersBuilder for `config`.
    pub fn builder(config: Config) -> CacheHeadersBuilder {
        CacheHeadersBuilder {
            config,
            resolver: None,
            auth: Arc::new(Anonymous),
        }
    }

    /// Returns the validation stage, if enabled.
    pub fn validation(&self) -> Option<&ValidationStage> {
        self.validation.as_ref()
    }

    /// Returns the freshness stage, if enabled.
    pub fn freshness(&self) -> Option<&FreshnessStage> {
        self.freshness.as_ref()
    }

    /// Layers the enabled stages onto `router`.
    ///
    /// Validation sits inside freshness, so a 304 still gets `Cache-Control`
    /// and `Expires`.
    pub fn apply<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let mut router = router;

        if let Some(stage) = &self.validation {
            router = router.layer(from_fn_with_state(stage.clone(), validation_middleware));
        }
        if let Some(stage) = self.freshness {
            router = router.layer(from_fn_with_state(stage, freshness_middleware));
        }

        router
    }
}

/// Collects the resolver and auth check before the startup checks run.
pub struct CacheHeadersBuilder {
    config: Config,
    resolver: Option<Arc<dyn LastModifiedResolver>>,
    auth: Arc<dyn AuthenticationCheck>,
}

impl CacheHeadersBuilder {
    /// Sets the source of last-modification times.
    pub fn resolver<R: LastModifiedResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// Same as [`resolver`](Self::resolver) for an already shared resolver.
    pub fn shared_resolver(mut self, resolver: Arc<dyn LastModifiedResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Sets the authentication check. Defaults to [`Anonymous`].
    pub fn authentication<A: AuthenticationCheck + 'static>(mut self, auth: A) -> Self {
        self.auth = Arc::new(auth);
        self
    }

    /// Resolves the configuration into stages.
    ///
    /// Fails with `MissingResolver` when validation is enabled without a
    /// resolver, and with `InvalidMaxAge` when freshness is enabled with a
    /// max-age that cannot be written as an `Expires` date.
    pub fn build(self) -> Result<CacheHeaders> {
        let validation = if self.config.disable_validation {
            info!("Validation stage disabled");
            None
        } else {
            let resolver = self.resolver.ok_or(CacheHeaderError::MissingResolver)?;
            info!("Validation stage enabled");
            Some(ValidationStage::new(resolver, self.auth))
        };

        let freshness = if self.config.disable_freshness {
            info!("Freshness stage disabled");
            None
        } else {
            let stage = FreshnessStage::from_config(&self.config);
            stage.validate()?;
            info!(
                "Freshness stage enabled: max-age={}, s-maxage={}",
                stage.max_age(),
                stage.shared_max_age()
            );
            Some(stage)
        };

        Ok(CacheHeaders {
            validation,
            freshness,
        })
    }
}
