use crate::config::WalkOptions;
use crate::error::EngineError;
use crossbeam_channel::Sender;
use ignore::{DirEntry, WalkBuilder, WalkState};
use std::fs::Metadata;
use std::path::{Path, PathBuf};

/// One discovered document, or the path a walk error belongs to.
pub type WalkItem = std::result::Result<(PathBuf, Metadata), (PathBuf, EngineError)>;

/// Parallel recursive walk over `options.roots`.
///
/// Roots that name a file are always sent. Files found below a directory
/// root are sent only if their extension is allowed. Stops early once the
/// receiver is gone.
pub fn walk_parallel(options: &WalkOptions, tx: &Sender<WalkItem>) {
    let Some((first, rest)) = options.roots.split_first() else {
        return;
    };

    let mut builder = WalkBuilder::new(first);
    for root in rest {
        builder.add(root);
    }

    builder
        .threads(options.threads)
        .hidden(!options.hidden)
        .git_ignore(options.git_ignore)
        .require_git(false)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    let walker = builder.build_parallel();
    walker.run(|| {
        let tx = tx.clone();
        let options = options.clone();
        Box::new(move |entry| {
            let item = match entry {
                Ok(entry) => match accept(&entry, &options) {
                    Some(item) => item,
                    None => return WalkState::Continue,
                },
                Err(err) => {
                    let path = error_path(&err).map_or_else(|| PathBuf::from("<walk>"), Path::to_path_buf);
                    log::warn!("walk error at {}: {err}", path.display());
                    Err((path, EngineError::Walk(err)))
                }
            };
            if tx.send(item).is_err() {
                return WalkState::Quit;
            }
            WalkState::Continue
        })
    });
}

fn accept(entry: &DirEntry, options: &WalkOptions) -> Option<WalkItem> {
    if !entry.file_type().is_some_and(|ft| ft.is_file()) {
        return None;
    }

    let path = entry.path();
    if entry.depth() > 0 {
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        if !options.allows(ext) {
            log::trace!("skipping {} (extension not allowed)", path.display());
            return None;
        }
    }

    Some(match entry.metadata() {
        Ok(meta) => Ok((path.to_path_buf(), meta)),
        Err(err) => Err((path.to_path_buf(), EngineError::Walk(err))),
    })
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => error_path(err),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn collect(options: &WalkOptions) -> Vec<WalkItem> {
        let (tx, rx) = crossbeam_channel::unbounded();
        walk_parallel(options, &tx);
        drop(tx);
        rx.into_iter().collect()
    }

    fn found(options: &WalkOptions) -> Vec<String> {
        let mut names: Vec<String> = collect(options)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter_map(|(path, _)| path.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn filters_by_extension_below_roots() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.html"), "<p>a</p>").unwrap();
        fs::write(dir.path().join("b.HTM"), "<p>b</p>").unwrap();
        fs::write(dir.path().join("notes.txt"), "plain").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.xhtml"), "<p>c</p>").unwrap();

        let options = WalkOptions { roots: vec![dir.path().to_path_buf()], threads: 2, ..WalkOptions::default() };
        assert_eq!(found(&options), ["a.html", "b.HTM", "c.xhtml"]);
    }

    #[test]
    fn explicit_file_roots_bypass_extension_filter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.txt");
        fs::write(&path, "<p>x</p>").unwrap();

        let options = WalkOptions { roots: vec![path], ..WalkOptions::default() };
        assert_eq!(found(&options), ["page.txt"]);
    }

    #[test]
    fn missing_root_is_reported() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.html");
        let options = WalkOptions { roots: vec![missing], ..WalkOptions::default() };

        let items = collect(&options);
        assert_eq!(items.len(), 1);
        assert!(matches!(&items[0], Err((_, EngineError::Walk(_)))));
    }

    #[test]
    fn hidden_and_ignored_files_are_opt_in() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".draft.html"), "<p>d</p>").unwrap();
        fs::write(dir.path().join(".gitignore"), "build/\n").unwrap();
        fs::create_dir(dir.path().join("build")).unwrap();
        fs::write(dir.path().join("build/out.html"), "<p>o</p>").unwrap();
        fs::write(dir.path().join("index.html"), "<p>i</p>").unwrap();

        let root = vec![dir.path().to_path_buf()];
        let default = WalkOptions { roots: root.clone(), ..WalkOptions::default() };
        assert_eq!(found(&default), ["index.html"]);

        let everything = WalkOptions { roots: root, hidden: true, git_ignore: false, ..WalkOptions::default() };
        assert_eq!(found(&everything), [".draft.html", "index.html", "out.html"]);
    }

    #[test]
    fn max_depth_limits_descent() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("top.html"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/deep.html"), "").unwrap();

        let options = WalkOptions { roots: vec![dir.path().to_path_buf()], max_depth: Some(1), ..WalkOptions::default() };
        assert_eq!(found(&options), ["top.html"]);
    }
}
