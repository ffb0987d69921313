//! Snapshot comparison result types (sndiff JSON output)

use serde::{Deserialize, Serialize};

/// A package whose installation state changed between two snapshots
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct PackageChange {
    #[serde(default)]
    pub name: String,
}

/// A file that differs between two snapshots.
///
/// `file_diff` carries the unified diff text when sndiff produced one;
/// binary or oversized files come through without it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct FileChange {
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_diff: Option<String>,
}

/// Package change buckets
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct PackageChanges {
    #[serde(default)]
    pub updated: Vec<PackageChange>,
    #[serde(default)]
    pub downgraded: Vec<PackageChange>,
    #[serde(default)]
    pub added: Vec<PackageChange>,
    #[serde(default)]
    pub removed: Vec<PackageChange>,
}

/// File change buckets
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct FileChanges {
    #[serde(default)]
    pub modified: Vec<FileChange>,
    #[serde(default)]
    pub added: Vec<FileChange>,
    #[serde(default)]
    pub removed: Vec<FileChange>,
}

/// Full comparison result between a (pre, post) snapshot pair.
///
/// Every bucket defaults to empty, so partial or entirely absent groups in
/// the tool output deserialize without error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct DiffResult {
    #[serde(default)]
    pub packages: PackageChanges,
    #[serde(default)]
    pub files: FileChanges,
}

impl DiffResult {
    /// The all-empty result, substituted when sndiff output cannot be parsed
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when every one of the seven buckets is empty
    pub fn is_empty(&self) -> bool {
        DiffSection::ALL.iter().all(|s| self.section_len(*s) == 0)
    }

    /// Number of entries in one bucket
    pub fn section_len(&self, section: DiffSection) -> usize {
        match section {
            DiffSection::UpdatedPackages => self.packages.updated.len(),
            DiffSection::DowngradedPackages => self.packages.downgraded.len(),
            DiffSection::AddedPackages => self.packages.added.len(),
            DiffSection::RemovedPackages => self.packages.removed.len(),
            DiffSection::ModifiedFiles => self.files.modified.len(),
            DiffSection::AddedFiles => self.files.added.len(),
            DiffSection::RemovedFiles => self.files.removed.len(),
        }
    }

    /// Display text for one entry of a bucket
    pub fn entry_text(&self, section: DiffSection, index: usize) -> Option<&str> {
        match section {
            DiffSection::UpdatedPackages => {
                self.packages.updated.get(index).map(|p| p.name.as_str())
            }
            DiffSection::DowngradedPackages => {
                self.packages.downgraded.get(index).map(|p| p.name.as_str())
            }
            DiffSection::AddedPackages => self.packages.added.get(index).map(|p| p.name.as_str()),
            DiffSection::RemovedPackages => {
                self.packages.removed.get(index).map(|p| p.name.as_str())
            }
            DiffSection::ModifiedFiles => self.files.modified.get(index).map(|f| f.path.as_str()),
            DiffSection::AddedFiles => self.files.added.get(index).map(|f| f.path.as_str()),
            DiffSection::RemovedFiles => self.files.removed.get(index).map(|f| f.path.as_str()),
        }
    }

    /// The modified-file entry at `index`, when the section is ModifiedFiles
    pub fn modified_file(&self, section: DiffSection, index: usize) -> Option<&FileChange> {
        match section {
            DiffSection::ModifiedFiles => self.files.modified.get(index),
            _ => None,
        }
    }

    /// Sections with at least one entry, in display order
    pub fn populated_sections(&self) -> Vec<DiffSection> {
        DiffSection::ALL
            .iter()
            .copied()
            .filter(|s| self.section_len(*s) > 0)
            .collect()
    }
}

/// The seven accordion sections of a diff view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffSection {
    UpdatedPackages,
    DowngradedPackages,
    AddedPackages,
    RemovedPackages,
    ModifiedFiles,
    AddedFiles,
    RemovedFiles,
}

impl DiffSection {
    /// Display order: packages first, then files
    pub const ALL: [DiffSection; 7] = [
        DiffSection::UpdatedPackages,
        DiffSection::DowngradedPackages,
        DiffSection::AddedPackages,
        DiffSection::RemovedPackages,
        DiffSection::ModifiedFiles,
        DiffSection::AddedFiles,
        DiffSection::RemovedFiles,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DiffSection::UpdatedPackages => "Updated Packages",
            DiffSection::DowngradedPackages => "Downgraded Packages",
            DiffSection::AddedPackages => "Added Packages",
            DiffSection::RemovedPackages => "Removed Packages",
            DiffSection::ModifiedFiles => "Modified Files",
            DiffSection::AddedFiles => "Added Files",
            DiffSection::RemovedFiles => "Removed Files",
        }
    }
}
