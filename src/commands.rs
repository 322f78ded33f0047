//! Non-interactive subcommands

use std::path::{Path, PathBuf};

use clique_app::config::{init_config_dir, Settings};
use clique_app::headless::{parse_assignment, submit_once};
use clique_app::HttpBackend;
use clique_client::fetch_posts;
use clique_core::prelude::*;
use clique_core::{MediaReference, Post, SubmissionResult};

use crate::cli::SubmitArgs;

/// Media reference described by `--media` / `--media-kind`
pub fn media_from_args(args: &SubmitArgs) -> Option<MediaReference> {
    let uri = args.media.as_ref()?;
    Some(match args.media_kind {
        Some(kind) => MediaReference::with_kind(uri.clone(), kind.into()),
        None => MediaReference::infer(uri.clone(), None),
    })
}

/// Run one headless submission against the configured backend
pub async fn submit(settings: &Settings, args: &SubmitArgs) -> Result<SubmissionResult> {
    let fields = args
        .fields
        .iter()
        .map(|arg| parse_assignment(arg))
        .collect::<Result<Vec<_>>>()?;
    let backend = HttpBackend::from_settings(settings).context("Failed to create backend")?;
    submit_once(&backend, args.screen, &fields, media_from_args(args)).await
}

/// Fetch the latest posts
pub async fn posts(settings: &Settings) -> Result<Vec<Post>> {
    let backend = HttpBackend::from_settings(settings).context("Failed to create backend")?;
    fetch_posts(&backend.transport).await
}

/// Create `.clique/config.toml` under `project` unless it already exists
pub fn init(project: &Path) -> Result<PathBuf> {
    let (path, created) = init_config_dir(project)
        .with_context(|| format!("Failed to initialize config in {}", project.display()))?;
    if created {
        info!("Wrote {}", path.display());
    } else {
        info!("{} already exists", path.display());
    }
    Ok(path)
}
