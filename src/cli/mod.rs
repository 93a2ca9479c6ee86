//! CLI module for the user registry
//!
//! Drives the user service in-process against the in-memory store:
//! - `demo`: scripted walkthrough of creation and deactivation
//! - `import`: batch creation from a JSON file

pub mod demo;
pub mod import;

use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::infrastructure::audit::InMemoryAuditor;
use crate::infrastructure::logging;
use crate::infrastructure::notification::LogNotifier;
use crate::infrastructure::support::SequentialIdGenerator;
use crate::infrastructure::user::{InMemoryUserRepository, NotificationFailurePolicy, UserService};

/// User registry - create and deactivate users with notification and audit
#[derive(Parser)]
#[command(name = "user-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// How user creation reacts to a failed registration notice (overrides config)
    #[arg(long, global = true, value_enum)]
    pub failure_policy: Option<FailurePolicyArg>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the scripted walkthrough and print the final state
    Demo,

    /// Create users from a JSON file
    Import(import::ImportArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FailurePolicyArg {
    Propagate,
    AuditAndContinue,
}

impl From<FailurePolicyArg> for NotificationFailurePolicy {
    fn from(arg: FailurePolicyArg) -> Self {
        match arg {
            FailurePolicyArg::Propagate => NotificationFailurePolicy::Propagate,
            FailurePolicyArg::AuditAndContinue => NotificationFailurePolicy::AuditAndContinue,
        }
    }
}

/// Service wired with the in-memory store, the log notifier and an in-memory audit log
pub type RegistryService = UserService<InMemoryUserRepository, LogNotifier, InMemoryAuditor>;

pub struct Registry {
    pub service: RegistryService,
    pub audit_log: Arc<InMemoryAuditor>,
}

/// Load configuration, start logging and wire the service
pub fn bootstrap(failure_policy: Option<FailurePolicyArg>) -> Registry {
    dotenvy::dotenv().ok();

    let (config, load_error) = config_or_default(AppConfig::load());
    init_logging(&config);

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    build_registry(&config, failure_policy.map(Into::into))
}

/// Fall back to the default configuration, keeping the load error for reporting
fn config_or_default(
    loaded: Result<AppConfig, config::ConfigError>,
) -> (AppConfig, Option<config::ConfigError>) {
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

fn init_logging(config: &AppConfig) {
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });
}

pub fn build_registry(
    config: &AppConfig,
    failure_policy: Option<NotificationFailurePolicy>,
) -> Registry {
    let policy = failure_policy.unwrap_or(config.notifications.failure_policy);
    debug!(?policy, audit = config.audit.enabled, "Wiring user service");

    let ids = Arc::new(SequentialIdGenerator::starting_at(config.store.first_id));
    let repository = Arc::new(InMemoryUserRepository::with_id_generator(ids));
    let audit_log = Arc::new(InMemoryAuditor::new());

    let service = UserService::new(repository, Arc::new(LogNotifier::new()))
        .with_optional_auditor(config.audit.enabled.then(|| audit_log.clone()))
        .with_failure_policy(policy);

    Registry { service, audit_log }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuditConfig, StoreConfig};

    #[test]
    fn test_cli_parses_import_with_policy() {
        let cli = Cli::try_parse_from([
            "user-registry",
            "import",
            "users.json",
            "--failure-policy",
            "audit-and-continue",
        ])
        .unwrap();

        assert!(matches!(
            cli.failure_policy,
            Some(FailurePolicyArg::AuditAndContinue)
        ));
        assert!(matches!(cli.command, Command::Import(_)));
    }

    #[test]
    fn test_cli_parses_demo() {
        let cli = Cli::try_parse_from(["user-registry", "demo"]).unwrap();
        assert!(cli.failure_policy.is_none());
        assert!(matches!(cli.command, Command::Demo));
    }

    #[test]
    fn test_build_registry_override_wins() {
        let config = AppConfig::default();
        let registry = build_registry(&config, Some(NotificationFailurePolicy::AuditAndContinue));

        assert_eq!(
            registry.service.failure_policy(),
            NotificationFailurePolicy::AuditAndContinue
        );
        assert!(registry.service.has_auditor());
    }

    #[tokio::test]
    async fn test_build_registry_without_audit() {
        let config = AppConfig {
            audit: AuditConfig { enabled: false },
            store: StoreConfig { first_id: 50 },
            ..AppConfig::default()
        };
        let registry = build_registry(&config, None);
        assert!(!registry.service.has_auditor());

        let created = registry
            .service
            .create_user(crate::domain::User::new("Ana García", "ana@ejemplo.com"))
            .await
            .unwrap();

        assert_eq!(created.id().map(|id| id.value()), Some(50));
        assert!(registry.audit_log.is_empty().await);
    }

    #[test]
    fn test_config_load_error_falls_back_to_defaults() {
        let loaded = Err(config::ConfigError::Message(
            "store.first_id must be positive".to_string(),
        ));

        let (config, load_error) = config_or_default(loaded);

        assert_eq!(config.store.first_id, 1);
        assert_eq!(
            config.notifications.failure_policy,
            NotificationFailurePolicy::Propagate
        );
        assert!(load_error
            .unwrap()
            .to_string()
            .contains("store.first_id must be positive"));
    }

    #[test]
    fn test_loaded_config_is_kept() {
        let loaded = Ok(AppConfig {
            store: StoreConfig { first_id: 7 },
            ..AppConfig::default()
        });

        let (config, load_error) = config_or_default(loaded);

        assert_eq!(config.store.first_id, 7);
        assert!(load_error.is_none());
    }
}
