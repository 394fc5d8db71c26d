// crates/engine/src/watch.rs
use crate::config::Config;
use crate::error::Result;
use notify::{EventKind, RecursiveMode, Watcher};
use std::sync::mpsc::channel;

/// Runs `on_change` once, then again after each burst of filesystem events
/// under the configured roots.
///
/// Events arriving within `config.watch_interval` of the first one are folded
/// into a single rerun. Blocks until the watcher shuts down.
pub fn watch_loop<F>(config: &Config, mut on_change: F) -> Result<()>
where
    F: FnMut(),
{
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| match res {
        Ok(event) => {
            if !matches!(event.kind, EventKind::Access(_)) {
                let _ = tx.send(event);
            }
        }
        Err(e) => log::warn!("watch error: {e}"),
    })?;

    for root in &config.walk.roots {
        if root.exists() {
            watcher.watch(root, RecursiveMode::Recursive)?;
        } else {
            log::warn!("not watching missing path {}", root.display());
        }
    }

    log::info!("watching {} path(s)", config.walk.roots.len());
    on_change();

    while let Ok(event) = rx.recv() {
        log::debug!("change detected: {:?}", event.paths);
        std::thread::sleep(config.watch_interval);
        while rx.try_recv().is_ok() {}

        on_change();
    }

    Ok(())
}
