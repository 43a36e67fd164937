use crate::pack::{ManifestRecord, PackCategory, PackId};
use crate::session::Partition;
use colored::Colorize;
use std::fmt;

/// Longest description shown in one-line listings.
pub const DESCRIPTION_WIDTH: usize = 60;

/// Formats a pack id for display (shows first 8 characters)
#[must_use]
pub fn format_short_id(id: PackId) -> String {
    let mut id = id.to_string();
    id.truncate(8);
    id
}

/// State of a pack in a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackStatus {
    /// Enabled in the world
    Active,
    /// Installed but disabled
    Inactive,
    /// Manifest module belongs to the other category
    Mismatch,
}

impl PackStatus {
    /// Status of `record` listed in `partition` of `category`.
    #[must_use]
    pub fn of(record: &ManifestRecord, category: PackCategory, partition: Partition) -> Self {
        if record.is_kind_mismatch(category) {
            Self::Mismatch
        } else if partition == Partition::Active {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    /// Returns the status character used in short format
    #[must_use]
    pub const fn short_char(&self) -> char {
        match self {
            Self::Active => '+',
            Self::Inactive => '-',
            Self::Mismatch => '!',
        }
    }

    /// Returns the colored status character
    #[must_use]
    pub fn colored_char(&self) -> String {
        match self {
            Self::Active => "+".green().to_string(),
            Self::Inactive => "-".bright_black().to_string(),
            Self::Mismatch => "!".red().bold().to_string(),
        }
    }

    /// Returns the full status name
    #[must_use]
    pub const fn name(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Mismatch => "wrong category",
        }
    }
}

impl fmt::Display for PackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Warning shown in place of the description of a mismatched pack.
#[must_use]
pub fn mismatch_note(record: &ManifestRecord, category: PackCategory) -> String {
    let kind = record
        .kind
        .as_ref()
        .map_or_else(|| "unknown".to_string(), ToString::to_string);
    format!(
        "{kind} pack found in {}, it will not load here",
        category.root_dir_name()
    )
}

/// Formats one listing line: status, position, short id, name, version and
/// description (or the mismatch note).
#[must_use]
pub fn format_pack_line(
    record: &ManifestRecord,
    category: PackCategory,
    partition: Partition,
    index: usize,
) -> String {
    let status = PackStatus::of(record, category, partition);
    let detail = if status == PackStatus::Mismatch {
        mismatch_note(record, category).red().to_string()
    } else {
        truncate_with_ellipsis(&record.description, DESCRIPTION_WIDTH)
            .dimmed()
            .to_string()
    };

    format!(
        "{} {:>3} {} {} {} {detail}",
        status.colored_char(),
        index,
        format_short_id(record.id).yellow(),
        record.name.bold(),
        format!("v{}", record.version).cyan(),
    )
}

/// Uppercases the first character
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Truncates a string to a maximum number of characters with ellipsis
#[must_use]
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    // Multi-line descriptions are shown on one line
    let s = s.lines().map(str::trim).collect::<Vec<_>>().join(" ");
    if s.chars().count() <= max_len {
        s
    } else if max_len < 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}
