use crate::document::{self, DocumentSource};
use crate::error::UnreadableDocument;
use crate::index::{CorpusIndex, TermFrequencies};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of one index build: the populated index plus the number of
/// documents skipped as unreadable. The number of successfully indexed
/// documents is `index.len()`.
pub struct CorpusBuild {
    pub index: CorpusIndex,
    pub skipped: usize,
}

/// Recursively collects the eligible files under `root`: extension `pdf`
/// (matched case-insensitively) and size at most `max_bytes`. A file
/// exactly at the ceiling is eligible; strictly larger is not. The list is
/// sorted so builds are reproducible regardless of directory order.
pub fn eligible_files(root: &Path, max_bytes: u64) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            continue;
        }
        match entry.metadata() {
            Ok(meta) if meta.len() <= max_bytes => files.push(path.to_path_buf()),
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot stat file, skipping");
            }
        }
    }
    files.sort();
    files
}

/// Indexes every eligible document under `root` with `workers` threads.
///
/// Pending paths sit in one shared queue that idle workers pull from, so
/// a worker stuck on a large document does not strand a pre-assigned
/// backlog behind it. Each worker
/// accumulates its own `(path, result)` list; the queue is the only shared
/// state during the parallel phase, and filesystem access is read-only.
/// The caller blocks until every worker has drained the queue.
pub fn build_index<S: DocumentSource>(
    source: &S,
    root: &Path,
    max_bytes: u64,
    workers: usize,
) -> CorpusBuild {
    let files = eligible_files(root, max_bytes);
    tracing::debug!(files = files.len(), workers, "building corpus index");

    type DocResult = (PathBuf, Result<TermFrequencies, UnreadableDocument>);
    let queue: Mutex<VecDeque<PathBuf>> = Mutex::new(files.into());

    let worker_results: Vec<Vec<DocResult>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers.max(1))
            .map(|_| {
                scope.spawn(|| {
                    let mut processed: Vec<DocResult> = Vec::new();
                    loop {
                        // Pop in its own statement so the lock is released
                        // before extraction starts.
                        let path = match queue.lock().pop_front() {
                            Some(path) => path,
                            None => break,
                        };
                        let result = document::process_document(source, &path);
                        processed.push((path, result));
                    }
                    processed
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker thread panicked"))
            .collect()
    });

    let mut index = CorpusIndex::new();
    let mut skipped = 0usize;
    for (path, result) in worker_results.into_iter().flatten() {
        let name = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .display()
            .to_string();
        match result {
            Ok(table) => {
                index.docs.insert(name, table);
            }
            Err(UnreadableDocument) => {
                skipped += 1;
                tracing::warn!(document = %name, "cannot read document stream, skipping");
            }
        }
    }
    tracing::info!(indexed = index.len(), skipped, "corpus index built");
    CorpusBuild { index, skipped }
}
