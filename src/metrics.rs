//! Prometheus metrics module for the URL shortener.
//!
//! Defines custom business metrics for monitoring link creations, redirects,
//! and login activity.

use prometheus::{Counter, CounterVec, Opts, Registry};

/// Application metrics for Prometheus monitoring
#[derive(Clone)]
pub struct AppMetrics {
    /// Total links created
    pub links_created_total: Counter,
    /// Total link redirects performed
    pub redirects_total: Counter,
    /// Total users registered
    pub users_registered_total: Counter,
    /// Login attempts with result label (success, unknown_email, wrong_password)
    pub login_attempts_total: CounterVec,
}

impl AppMetrics {
    /// Create and register all custom metrics with the given Prometheus registry
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let links_created_total = Counter::with_opts(
            Opts::new("links_created_total", "Total links created").namespace("tinylink"),
        )?;
        registry.register(Box::new(links_created_total.clone()))?;

        let redirects_total = Counter::with_opts(
            Opts::new("redirects_total", "Total link redirects performed").namespace("tinylink"),
        )?;
        registry.register(Box::new(redirects_total.clone()))?;

        let users_registered_total = Counter::with_opts(
            Opts::new("users_registered_total", "Total users registered").namespace("tinylink"),
        )?;
        registry.register(Box::new(users_registered_total.clone()))?;

        let login_attempts_total = CounterVec::new(
            Opts::new("login_attempts_total", "Total login attempts").namespace("tinylink"),
            &["result"],
        )?;
        registry.register(Box::new(login_attempts_total.clone()))?;

        Ok(Self {
            links_created_total,
            redirects_total,
            users_registered_total,
            login_attempts_total,
        })
    }

    /// Record a link creation
    pub fn record_link_created(&self) {
        self.links_created_total.inc();
    }

    /// Record a link redirect
    pub fn record_redirect(&self) {
        self.redirects_total.inc();
    }

    /// Record a user registration
    pub fn record_user_registered(&self) {
        self.users_registered_total.inc();
    }

    /// Record a login attempt
    pub fn record_login_attempt(&self, result: &str) {
        self.login_attempts_total.with_label_values(&[result]).inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let registry = Registry::new();
        let metrics = AppMetrics::new(&registry).unwrap();

        // Verify metrics can be incremented without error
        metrics.record_link_created();
        metrics.record_redirect();
        metrics.record_user_registered();
        metrics.record_login_attempt("success");
        metrics.record_login_attempt("wrong_password");
        metrics.record_login_attempt("unknown_email");
    }

    #[test]
    fn test_metrics_values() {
        let registry = Registry::new();
        let metrics = AppMetrics::new(&registry).unwrap();

        metrics.record_link_created();
        metrics.record_link_created();
        metrics.record_redirect();
        metrics.record_login_attempt("success");

        assert_eq!(metrics.links_created_total.get() as u64, 2);
        assert_eq!(metrics.redirects_total.get() as u64, 1);
        assert_eq!(
            metrics.login_attempts_total.with_label_values(&["success"]).get() as u64,
            1
        );
        assert_eq!(
            metrics
                .login_attempts_total
                .with_label_values(&["wrong_password"])
                .get() as u64,
            0
        );
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let registry = Registry::new();
        let _metrics = AppMetrics::new(&registry).unwrap();
        assert!(AppMetrics::new(&registry).is_err());
    }
}
