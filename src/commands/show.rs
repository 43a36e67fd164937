use super::context::CommandContext;
use crate::AddonContext;
use crate::pack::icon::IconSource;
use crate::pack::{ManifestRecord, PackCategory, PackId};
use crate::session::{PackList, PackSession, Partition};
use crate::utils::formatters::{PackStatus, mismatch_note};
use anyhow::Result;
use colored::Colorize;
use std::fmt::Write;

/// Finds a pack by id in either category, resource packs first.
#[must_use]
pub fn locate(session: &PackSession, id: PackId) -> Option<(PackList, usize, &ManifestRecord)> {
    PackCategory::ALL.into_iter().find_map(|category| {
        session
            .find(category, id)
            .map(|(list, index)| (list, index, &session.list(list)[index]))
    })
}

/// Describes one pack over several lines.
#[must_use]
pub fn describe(record: &ManifestRecord, list: PackList, index: usize) -> String {
    let category = list.category();
    let status = PackStatus::of(record, category, list.partition());
    let mut out = String::new();

    let _ = writeln!(out, "{} {}", "pack".yellow(), record.id);
    let _ = writeln!(out, "{}: {}", "Name".bold(), record.name);
    let _ = writeln!(out, "{}: {}", "Version".bold(), record.version);
    let _ = writeln!(out, "{}: {}", "Category".bold(), category);

    let state = match list.partition() {
        Partition::Active => format!("active, position {index}").green().to_string(),
        Partition::Inactive => "inactive".dimmed().to_string(),
    };
    let _ = writeln!(out, "{}: {state}", "Status".bold());

    let kind = record
        .kind
        .as_ref()
        .map_or_else(|| "none".to_string(), ToString::to_string);
    let _ = writeln!(out, "{}: {kind}", "Module".bold());
    let _ = writeln!(out, "{}: {}", "Folder".bold(), record.source_path.display());

    let (width, height) = record.icon.dimensions();
    let icon = match record.icon.source() {
        IconSource::PackFile => format!("{} ({width}x{height})", crate::ICON_FILE),
        IconSource::Fallback => "default".dimmed().to_string(),
    };
    let _ = writeln!(out, "{}: {icon}", "Icon".bold());

    if status == PackStatus::Mismatch {
        let _ = writeln!(out, "\n    {}", mismatch_note(record, category).red());
    } else {
        let _ = writeln!(out);
        for line in record.description.lines() {
            let _ = writeln!(out, "    {}", line.trim_end());
        }
    }
    out
}

/// Execute show command - show the details of one pack
///
/// # Errors
///
/// Returns an error if the session cannot be opened or no pack has `id`
pub fn execute(ctx: &AddonContext, id: PackId) -> Result<()> {
    let session = ctx.open_session()?;
    let (list, index, record) =
        locate(&session, id).ok_or_else(|| anyhow::anyhow!("No installed pack with id {id}"))?;

    print!("{}", describe(record, list, index));
    Ok(())
}
