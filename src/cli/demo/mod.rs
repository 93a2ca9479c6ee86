//! Demo command - scripted walkthrough against the in-memory store

use serde_json::json;
use tracing::{info, warn};

use super::{FailurePolicyArg, Registry};
use crate::domain::{User, UserId};

/// Run the walkthrough and print users and audit trail as JSON
pub async fn run(failure_policy: Option<FailurePolicyArg>) -> anyhow::Result<()> {
    let registry = super::bootstrap(failure_policy);
    let report = walkthrough(&registry).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn walkthrough(registry: &Registry) -> anyhow::Result<serde_json::Value> {
    let service = &registry.service;

    let juan = service
        .create_user(User::new("Juan Pérez", "juan@ejemplo.com"))
        .await?;
    info!(id = ?juan.id(), "Created first user");

    service
        .create_user(User::new("Ana García", "ana@ejemplo.com"))
        .await?;

    if let Err(e) = service
        .create_user(User::new("Carlos López", "carlosejemplo.com"))
        .await
    {
        warn!(error = %e, "Creation rejected as expected");
    }

    if let Some(id) = juan.id() {
        service.deactivate_user(&id).await?;
    }
    service.deactivate_user(&UserId::new(99)).await?;

    let users = service.get_all_users().await?;
    let audit = registry.audit_log.entries().await;

    Ok(json!({
        "users": users,
        "audit": audit,
    }))
}
