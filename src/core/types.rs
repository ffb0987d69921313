//! Core domain types - snapshots, configurations, and row pairing

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A snapper configuration as reported by `snapper --jsonout list-configs`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SnapshotConfig {
    pub config: String,
    #[serde(default)]
    pub subvolume: String,
}

/// Snapshot kind as reported by snapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotKind {
    #[default]
    Single,
    Pre,
    Post,
}

impl SnapshotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotKind::Single => "single",
            SnapshotKind::Pre => "pre",
            SnapshotKind::Post => "post",
        }
    }
}

/// A single snapshot as reported by `snapper --jsonout list`
///
/// Unknown fields are ignored; absent optional fields take their defaults so
/// older snapper versions parse cleanly. Snapshot 0 is the live filesystem
/// and carries no date.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Snapshot {
    pub number: u64,

    #[serde(default, rename = "type")]
    pub kind: SnapshotKind,

    /// Parent pre snapshot number; set on post snapshots
    #[serde(
        default,
        rename = "pre-number",
        alias = "pre_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub pre_number: Option<u64>,

    #[serde(default, with = "snapper_date")]
    pub date: Option<NaiveDateTime>,

    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub cleanup: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userdata: Option<serde_json::Map<String, Value>>,

    #[serde(default)]
    pub active: bool,

    #[serde(default, rename = "default")]
    pub is_default: bool,
}

impl Snapshot {
    /// Status suffix for the ID column, derived from the active/default flags
    pub fn status_suffix(&self) -> &'static str {
        match (self.active, self.is_default) {
            (true, true) => " (Active + Default)",
            (true, false) => " (Active)",
            (false, true) => " (Default)",
            (false, false) => "",
        }
    }

    /// Date formatted with the given strftime pattern; empty when absent
    pub fn date_display(&self, format: &str) -> String {
        self.date
            .map(|d| d.format(format).to_string())
            .unwrap_or_default()
    }

    /// The JSON text dump of userdata (`{}` for an empty object, empty
    /// string when no userdata was provided)
    pub fn userdata_display(&self) -> String {
        self.userdata
            .as_ref()
            .map(|map| serde_json::to_string(map).unwrap_or_default())
            .unwrap_or_default()
    }
}

/// Serde helper for snapper's `%Y-%m-%d %H:%M:%S` date strings.
///
/// Tolerant on input: null, empty, or unparseable dates become `None` rather
/// than failing the whole listing.
mod snapper_date {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .and_then(|s| NaiveDateTime::parse_from_str(s, FORMAT).ok()))
    }

    pub fn serialize<S>(date: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }
}

/// A dashboard row: a lone snapshot or a matched (pre, post) pair
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotGroup {
    Single(Snapshot),
    Pair { pre: Snapshot, post: Snapshot },
}

impl SnapshotGroup {
    /// Stable row key: the number, or `"<pre>-<post>"` for a pair
    pub fn key(&self) -> String {
        match self {
            SnapshotGroup::Single(snap) => snap.number.to_string(),
            SnapshotGroup::Pair { pre, post } => format!("{}-{}", pre.number, post.number),
        }
    }

    /// ID column text: number(s) plus the status suffix.
    ///
    /// For a pair the suffix reflects the post snapshot, which is the state
    /// the system was left in.
    pub fn id_label(&self) -> String {
        match self {
            SnapshotGroup::Single(snap) => {
                format!("{}{}", snap.number, snap.status_suffix())
            }
            SnapshotGroup::Pair { pre, post } => {
                format!("{} - {}{}", pre.number, post.number, post.status_suffix())
            }
        }
    }

    /// Type column text
    pub fn kind_label(&self) -> String {
        match self {
            SnapshotGroup::Single(snap) => snap.kind.as_str().to_string(),
            SnapshotGroup::Pair { pre, post } => {
                format!("{} - {}", pre.kind.as_str(), post.kind.as_str())
            }
        }
    }

    /// The snapshot whose date/description/userdata the row displays
    pub fn display_snapshot(&self) -> &Snapshot {
        match self {
            SnapshotGroup::Single(snap) => snap,
            SnapshotGroup::Pair { pre, .. } => pre,
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, SnapshotGroup::Pair { .. })
    }

    /// The (pre, post) numbers when this row is comparable
    pub fn pair_numbers(&self) -> Option<(u64, u64)> {
        match self {
            SnapshotGroup::Pair { pre, post } => Some((pre.number, post.number)),
            SnapshotGroup::Single(_) => None,
        }
    }
}

/// Derive dashboard rows from a snapshot listing.
///
/// A post snapshot closes the earlier pre snapshot its `pre-number` names;
/// each pre pairs at most once. Pairs sit at the pre snapshot's position in
/// the listing. Everything else - singles, unmatched pres, orphan posts -
/// becomes its own row, in listing order.
pub fn pair_snapshots(snapshots: Vec<Snapshot>) -> Vec<SnapshotGroup> {
    // First pass: match each post to its pre by index.
    let mut open_pre: HashMap<u64, usize> = HashMap::new();
    let mut post_for_pre: Vec<Option<usize>> = vec![None; snapshots.len()];
    let mut consumed: Vec<bool> = vec![false; snapshots.len()];

    for (idx, snap) in snapshots.iter().enumerate() {
        match snap.kind {
            SnapshotKind::Pre => {
                open_pre.insert(snap.number, idx);
            }
            SnapshotKind::Post => {
                if let Some(pre_idx) = snap.pre_number.and_then(|n| open_pre.remove(&n)) {
                    post_for_pre[pre_idx] = Some(idx);
                    consumed[idx] = true;
                }
            }
            SnapshotKind::Single => {}
        }
    }

    // Second pass: emit rows in listing order.
    let mut by_index: Vec<Option<Snapshot>> = snapshots.into_iter().map(Some).collect();
    let mut groups = Vec::with_capacity(by_index.len());
    for idx in 0..by_index.len() {
        if consumed[idx] {
            continue;
        }
        let Some(snap) = by_index[idx].take() else {
            continue;
        };
        match post_for_pre[idx].and_then(|post_idx| by_index[post_idx].take()) {
            Some(post) => groups.push(SnapshotGroup::Pair { pre: snap, post }),
            None => groups.push(SnapshotGroup::Single(snap)),
        }
    }
    groups
}
