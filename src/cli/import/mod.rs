//! Import command - batch user creation from a JSON file

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use serde_json::json;
use tracing::info;

use super::{FailurePolicyArg, Registry};
use crate::domain::User;

/// Arguments for the import command
#[derive(Args, Clone)]
pub struct ImportArgs {
    /// JSON file holding an array of `{ "name": ..., "email": ... }` records
    pub file: PathBuf,
}

/// Run the import and print the batch result as JSON
pub async fn run(args: ImportArgs, failure_policy: Option<FailurePolicyArg>) -> anyhow::Result<()> {
    let registry = super::bootstrap(failure_policy);
    let report = import_file(&registry, &args.file).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn import_file(registry: &Registry, path: &Path) -> anyhow::Result<serde_json::Value> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let candidates = parse_candidates(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    info!(count = candidates.len(), file = %path.display(), "Importing users");

    let result = registry.service.create_users(candidates).await?;
    let audit = registry.audit_log.entries().await;

    Ok(json!({
        "result": result,
        "audit": audit,
    }))
}

fn parse_candidates(raw: &str) -> Result<Vec<User>, serde_json::Error> {
    serde_json::from_str(raw)
}
