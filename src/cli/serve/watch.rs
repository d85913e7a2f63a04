//! File watcher driving watch-mode rebuilds.
//!
//! Raw notify events are debounced into a change set; once the set has
//! been quiet long enough the whole site is rebuilt. A config file change
//! additionally reloads `pagoda.toml` through the arc-swap handle before
//! rebuilding. A failed rebuild leaves the previous output intact and
//! reports through the watch status line.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossbeam::channel::{self, Receiver};
use notify::{RecursiveMode, Watcher};
use rustc_hash::FxHashSet;

use crate::{
    config::{cfg, reload_config},
    core::{is_healthy, set_healthy},
    debug, log,
    logger::{status_error, status_success},
    utils::{path::normalize_path, plural_count},
};

const DEBOUNCE_MS: u64 = 300;
const REBUILD_COOLDOWN_MS: u64 = 800;

/// Watcher thread entry point. Blocks until shutdown is signalled.
pub fn run_watcher(shutdown_rx: &Receiver<()>) {
    let (events_tx, events_rx) = channel::unbounded();

    let mut watcher = match notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = events_tx.send(event);
        }
    }) {
        Ok(watcher) => watcher,
        Err(e) => {
            log!("watch"; "failed to start watcher: {e}");
            return;
        }
    };

    for (path, mode) in watch_targets() {
        if let Err(e) = watcher.watch(&path, mode) {
            debug!("watch"; "cannot watch {}: {e}", path.display());
        }
    }

    log!("watch"; "watching for changes");

    let mut debouncer = Debouncer::new();
    loop {
        crossbeam::select! {
            recv(shutdown_rx) -> _ => break,
            recv(events_rx) -> event => {
                let Ok(event) = event else { break };
                debouncer.add_event(&event);
            }
            default(debouncer.sleep_duration()) => {
                if let Some(changes) = debouncer.take_if_ready() {
                    rebuild(&changes);
                }
            }
        }
    }
}

/// Paths to watch: templates and assets recursively, the data document
/// and the config file directly.
fn watch_targets() -> Vec<(PathBuf, RecursiveMode)> {
    let config = cfg();
    let mut targets = vec![
        (config.build.pages.clone(), RecursiveMode::Recursive),
        (config.build.data.clone(), RecursiveMode::NonRecursive),
        (config.config_path.clone(), RecursiveMode::NonRecursive),
    ];
    if config.build.assets.is_dir() {
        targets.push((config.build.assets.clone(), RecursiveMode::Recursive));
    }
    targets
}

/// Rebuild the site for a debounced change set.
fn rebuild(changes: &FxHashSet<PathBuf>) {
    let config_changed = changes.contains(&cfg().config_path);
    if config_changed {
        match reload_config() {
            Ok(true) => debug!("watch"; "config reloaded"),
            Ok(false) => {}
            Err(e) => {
                set_healthy(false);
                status_error("config reload failed", &format!("{e:#}"));
                return;
            }
        }
    }

    let config = cfg();
    let was_healthy = is_healthy();
    match crate::cli::build::build_site(&config, true) {
        Ok(()) => {
            set_healthy(true);
            if !was_healthy {
                debug!("watch"; "build recovered");
            }
            status_success(&describe(changes, &config));
        }
        Err(e) => {
            set_healthy(false);
            status_error("rebuild failed", &format!("{e:#}"));
        }
    }
}

/// One-line change description for the status display.
fn describe(changes: &FxHashSet<PathBuf>, config: &crate::config::SiteConfig) -> String {
    if changes.len() == 1 {
        let path = changes.iter().next().expect("non-empty change set");
        format!("rebuilt: {}", config.root_relative(path).display())
    } else {
        format!("rebuilt: {}", plural_count(changes.len(), "change"))
    }
}

// =============================================================================
// Debouncer
// =============================================================================

/// Collects notify events into a change set, releasing it only after the
/// debounce window has been quiet and the rebuild cooldown has passed.
struct Debouncer {
    changes: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
    last_rebuild: Option<Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            changes: FxHashSet::default(),
            last_event: None,
            last_rebuild: None,
        }
    }

    /// Record a notify event, ignoring metadata-only changes and editor
    /// temp files.
    fn add_event(&mut self, event: &notify::Event) {
        use notify::EventKind;

        match event.kind {
            EventKind::Create(_) | EventKind::Remove(_) => {}
            EventKind::Modify(modify) => {
                // mtime/atime/chmod noise would trigger endless rebuild loops
                if matches!(modify, notify::event::ModifyKind::Metadata(_)) {
                    return;
                }
            }
            _ => return,
        }

        for path in &event.paths {
            if is_temp_file(path) {
                continue;
            }
            let path = normalize_path(path);
            debug!("watch"; "event: {}", path.display());
            self.changes.insert(path);
            self.last_event = Some(Instant::now());
        }
    }

    /// Take the change set if the debounce window and cooldown elapsed.
    fn take_if_ready(&mut self) -> Option<FxHashSet<PathBuf>> {
        if !self.is_ready() {
            return None;
        }

        let changes = std::mem::take(&mut self.changes);
        self.last_event = None;
        self.last_rebuild = Some(Instant::now());
        Some(changes)
    }

    fn is_ready(&self) -> bool {
        let Some(last_event) = self.last_event else {
            return false;
        };

        if last_event.elapsed() < Duration::from_millis(DEBOUNCE_MS) {
            return false;
        }

        if let Some(last_rebuild) = self.last_rebuild
            && last_rebuild.elapsed() < Duration::from_millis(REBUILD_COOLDOWN_MS)
        {
            return false;
        }

        !self.changes.is_empty()
    }

    /// Sleep duration until the next possible ready time.
    fn sleep_duration(&self) -> Duration {
        let Some(last_event) = self.last_event else {
            return Duration::from_secs(86400);
        };

        let debounce_remaining =
            Duration::from_millis(DEBOUNCE_MS).saturating_sub(last_event.elapsed());

        let cooldown_remaining = self
            .last_rebuild
            .map(|t| Duration::from_millis(REBUILD_COOLDOWN_MS).saturating_sub(t.elapsed()))
            .unwrap_or(Duration::ZERO);

        debounce_remaining
            .max(cooldown_remaining)
            .max(Duration::from_millis(1))
    }
}

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::{Event, EventKind, event::CreateKind};

    fn create_event(path: &str) -> Event {
        Event::new(EventKind::Create(CreateKind::File)).add_path(PathBuf::from(path))
    }

    #[test]
    fn test_debouncer_waits_for_quiet_window() {
        let mut debouncer = Debouncer::new();
        debouncer.add_event(&create_event("/site/pages/index.html"));

        // Just arrived: still inside the debounce window
        assert!(!debouncer.is_ready());
        assert!(debouncer.take_if_ready().is_none());

        debouncer.last_event = Some(Instant::now() - Duration::from_millis(DEBOUNCE_MS + 50));
        let changes = debouncer.take_if_ready().unwrap();
        assert_eq!(changes.len(), 1);
        assert!(debouncer.changes.is_empty());
    }

    #[test]
    fn test_debouncer_cooldown_blocks_immediate_rebuild() {
        let mut debouncer = Debouncer::new();
        debouncer.last_rebuild = Some(Instant::now());
        debouncer.add_event(&create_event("/site/data.json"));
        debouncer.last_event = Some(Instant::now() - Duration::from_millis(DEBOUNCE_MS + 50));

        assert!(!debouncer.is_ready());

        debouncer.last_rebuild =
            Some(Instant::now() - Duration::from_millis(REBUILD_COOLDOWN_MS + 50));
        assert!(debouncer.is_ready());
    }

    #[test]
    fn test_debouncer_dedups_paths() {
        let mut debouncer = Debouncer::new();
        debouncer.add_event(&create_event("/site/pages/index.html"));
        debouncer.add_event(&create_event("/site/pages/index.html"));

        assert_eq!(debouncer.changes.len(), 1);
    }

    #[test]
    fn test_temp_files_ignored() {
        assert!(is_temp_file(Path::new("/site/pages/.index.html.swp")));
        assert!(is_temp_file(Path::new("/site/pages/index.html~")));
        assert!(is_temp_file(Path::new("/site/pages/index.html.bak")));
        assert!(!is_temp_file(Path::new("/site/pages/index.html")));

        let mut debouncer = Debouncer::new();
        debouncer.add_event(&create_event("/site/pages/index.html~"));
        assert!(debouncer.changes.is_empty());
    }

    #[test]
    fn test_idle_sleep_is_long() {
        let debouncer = Debouncer::new();
        assert!(debouncer.sleep_duration() >= Duration::from_secs(3600));
    }
}
