//! Bulk inspection of stored hashes for migration planning.
//!
//! An audit reads one stored hash per line, classifies each with
//! [`HashFormat::identify`] and asks the hasher whether it needs to be
//! regenerated. No passwords are involved: the result only tells an
//! operator how many accounts still sit on legacy formats or outdated
//! stretch factors.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tokio::fs;
use tracing::warn;

use crate::codec::count_log2;
use crate::password::{PasswordHasher, strip_migration_marker};
use crate::types::HashFormat;

/// Verdict for a single stored hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 1-based line number in the source file.
    pub line: usize,

    pub format: HashFormat,

    /// Embedded log2 iteration count, if the count character is readable.
    pub count_log2: Option<u32>,

    pub needs_rehash: bool,
}

/// Aggregated audit results, in input order.
#[derive(Debug, Default)]
pub struct Report {
    pub entries: Vec<Entry>,
}

impl Report {
    /// Classifies every non-blank line in parallel.
    #[must_use]
    pub fn build(lines: &[String], hasher: PasswordHasher) -> Self {
        let entries: Vec<Entry> = lines
            .par_iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                let stored = raw.trim();
                if stored.is_empty() {
                    return None;
                }

                let format = HashFormat::identify(stored);
                let inner = strip_migration_marker(stored).unwrap_or(stored);

                Some(Entry { line: index + 1, format, count_log2: count_log2(inner), needs_rehash: hasher.needs_rehash(stored) })
            })
            .collect();

        let unknown = entries.iter().filter(|entry| entry.format == HashFormat::Unknown).count();
        if unknown > 0 {
            warn!(unknown, "audit found stored hashes in no supported format");
        }

        Self { entries }
    }

    /// Reads `path` and builds a report from its lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub async fn from_file(path: &Path, hasher: PasswordHasher) -> Result<Self> {
        let content = fs::read_to_string(path).await.with_context(|| format!("failed to read {}", path.display()))?;
        let lines: Vec<String> = content.lines().map(str::to_owned).collect();

        tokio::task::spawn_blocking(move || Self::build(&lines, hasher)).await.context("audit task panicked")
    }

    /// Number of entries per format.
    #[must_use]
    pub fn counts(&self) -> HashMap<HashFormat, usize> {
        self.entries.iter().fold(HashMap::new(), |mut counts, entry| {
            *counts.entry(entry.format).or_default() += 1;
            counts
        })
    }

    /// Number of entries that should be regenerated at next login.
    #[must_use]
    pub fn stale(&self) -> usize {
        self.entries.iter().filter(|entry| entry.needs_rehash).count()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = "\
$S$D.2U.1EE/Rv3Jf9ZNiGnrXobfKPWaocZXJlb3JwQxYSCpLHO.Lc8
$S$CE.0A./3MIZesYge6ragxr2eJWdre99i1J.o/p3QKMykzyeH3Mdd

$P$9IQRaTwmfeRo7ud9Fh4E2PdI0S3r.L0
U$S$5V7qMYJaN6jr.SKMkFG3W.LNqHK9LZN.tIbkBbNgGrkQA5aERb9M
5f4dcc3b5aa765d61d8327deb882cf99
";

    fn lines() -> Vec<String> {
        SAMPLE.lines().map(str::to_owned).collect()
    }

    #[test]
    fn test_build_classifies_in_order() {
        let report = Report::build(&lines(), PasswordHasher::default());
        let summary: Vec<_> = report.entries.iter().map(|e| (e.line, e.format, e.count_log2, e.needs_rehash)).collect();

        assert_eq!(
            summary,
            vec![
                (1, HashFormat::Modern, Some(15), false),
                (2, HashFormat::Modern, Some(14), true),
                (4, HashFormat::Portable, Some(11), true),
                (5, HashFormat::Migrated, Some(7), true),
                (6, HashFormat::Unknown, Some(41), true),
            ]
        );
    }

    #[test]
    fn test_counts_and_stale() {
        let report = Report::build(&lines(), PasswordHasher::default());
        let counts = report.counts();
        assert_eq!(counts[&HashFormat::Modern], 2);
        assert_eq!(counts[&HashFormat::Portable], 1);
        assert_eq!(counts[&HashFormat::Migrated], 1);
        assert_eq!(counts[&HashFormat::Unknown], 1);
        assert_eq!(report.stale(), 4);
    }

    #[test]
    fn test_configured_count_changes_staleness() {
        let report = Report::build(&lines(), PasswordHasher::new(14));
        assert!(report.entries[0].needs_rehash);
        assert!(!report.entries[1].needs_rehash);
    }

    #[tokio::test]
    async fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let report = Report::from_file(file.path(), PasswordHasher::default()).await.unwrap();
        assert_eq!(report.entries.len(), 5);
        assert_eq!(report.stale(), 4);
    }

    #[tokio::test]
    async fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Report::from_file(&dir.path().join("absent.txt"), PasswordHasher::default()).await.is_err());
    }
}
