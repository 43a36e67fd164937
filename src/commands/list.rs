use super::context::CommandContext;
use crate::AddonContext;
use crate::pack::{ManifestRecord, PackCategory};
use crate::session::{PackList, PackSession, Partition};
use crate::utils::formatters::{capitalize, format_pack_line};
use crate::utils::is_default_pack;
use anyhow::Result;
use colored::Colorize;

/// Which partitions to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    Both,
    Active,
    Inactive,
}

impl ListFilter {
    #[must_use]
    pub const fn from_flags(active: bool, inactive: bool) -> Self {
        match (active, inactive) {
            (true, false) => Self::Active,
            (false, true) => Self::Inactive,
            _ => Self::Both,
        }
    }

    #[must_use]
    pub fn partitions(self) -> &'static [Partition] {
        match self {
            Self::Both => &[Partition::Active, Partition::Inactive],
            Self::Active => &[Partition::Active],
            Self::Inactive => &[Partition::Inactive],
        }
    }
}

/// Rendered listing of one pack list.
#[derive(Debug, Default)]
pub struct ListSection {
    pub header: String,
    pub lines: Vec<String>,
    /// Built-in packs left out
    pub hidden: usize,
}

/// Renders one list, keeping each pack's real position in the load order.
#[must_use]
pub fn render_list(
    records: &[ManifestRecord],
    list: PackList,
    hide_default_packs: bool,
) -> ListSection {
    let mut section = ListSection {
        header: format!("{} ({})", capitalize(list.as_str()), records.len()),
        ..ListSection::default()
    };

    for (index, record) in records.iter().enumerate() {
        if hide_default_packs && is_default_pack(&record.name) {
            section.hidden += 1;
            continue;
        }
        section
            .lines
            .push(format_pack_line(record, list.category(), list.partition(), index));
    }
    section
}

/// Renders every requested list of a session.
#[must_use]
pub fn render(
    session: &PackSession,
    category: Option<PackCategory>,
    filter: ListFilter,
    hide_default_packs: bool,
) -> Vec<ListSection> {
    let categories = category.map_or_else(|| PackCategory::ALL.to_vec(), |c| vec![c]);

    categories
        .into_iter()
        .flat_map(|category| {
            filter
                .partitions()
                .iter()
                .map(move |partition| PackList::new(category, *partition))
        })
        .map(|list| render_list(session.list(list), list, hide_default_packs))
        .collect()
}

/// Execute list command - show installed packs by category and state
///
/// # Errors
///
/// Returns an error if the session cannot be opened
pub fn execute(
    ctx: &AddonContext,
    category: Option<PackCategory>,
    filter: ListFilter,
    all: bool,
) -> Result<()> {
    let session = ctx.open_session()?;
    let hide = ctx.hides_default_packs() && !all;

    let sections = render(&session, category, filter, hide);
    let mut hidden = 0;
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", section.header.bold());
        if section.lines.is_empty() {
            println!("  {}", "(none)".dimmed());
        }
        for line in &section.lines {
            println!("{line}");
        }
        hidden += section.hidden;
    }

    if hidden > 0 {
        println!();
        super::print_info(&format!(
            "{hidden} built-in pack(s) hidden, use --all to show them"
        ));
    }

    Ok(())
}
