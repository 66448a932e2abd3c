//! # Skill-Set Hot Reload
//!
//! Watches the skill-set file and queues a reload whenever it is written.
//! The parent directory is watched rather than the file itself so that
//! editors which save by replacing the file are still picked up.

use anyhow::{Context, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{error, info};

/// A running watcher. Dropping it stops watching.
pub struct SkillSetWatcher {
    _watcher: RecommendedWatcher,
    changes: Receiver<PathBuf>,
}

impl SkillSetWatcher {
    /// Drain pending change notifications, collapsed to one per path.
    pub fn changes(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.changes.try_iter().collect();
        paths.dedup();
        paths
    }
}

/// Start watching `path`.
///
/// # Errors
///
/// Fails if the watcher cannot be created or the file's directory cannot be
/// watched.
pub fn start(path: &Path) -> Result<SkillSetWatcher> {
    let target = path
        .canonicalize()
        .with_context(|| format!("resolving {}", path.display()))?;
    let dir = target
        .parent()
        .map(Path::to_path_buf)
        .context("skill-set file has no parent directory")?;

    let (tx, rx) = mpsc::channel();
    let watched = target.clone();
    let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
        handle_file_event(result, &watched, &tx);
    })
    .context("creating file watcher")?;

    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("watching {}", dir.display()))?;

    info!(path = %target.display(), "watching skill set for changes");
    Ok(SkillSetWatcher {
        _watcher: watcher,
        changes: rx,
    })
}

fn handle_file_event(result: notify::Result<Event>, target: &Path, tx: &Sender<PathBuf>) {
    match result {
        Ok(event) => {
            if !event.kind.is_modify() && !event.kind.is_create() {
                return;
            }
            if event.paths.iter().any(|p| is_target(p, target)) {
                // The receiver only goes away on shutdown.
                let _ = tx.send(target.to_path_buf());
            }
        }
        Err(e) => error!("file watcher error: {e:?}"),
    }
}

fn is_target(path: &Path, target: &Path) -> bool {
    path == target || path.file_name() == target.file_name()
}
