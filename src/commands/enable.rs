use super::context::{CommandContext, find_pack};
use crate::output;
use crate::{AddonContext, PackError};
use crate::pack::{PackCategory, PackId};
use crate::session::{PackList, PackSession, Partition};
use crate::utils::formatters::capitalize;
use anyhow::Result;

/// Moves packs into `to` and returns how many moved.
///
/// Every id is checked before anything moves, so an unknown id leaves the
/// session untouched. Ids already in `to` are reported and skipped.
///
/// # Errors
///
/// Returns an error if an id is not installed in `category`, or if a pack
/// without a valid uuid is being enabled.
pub fn switch(
    session: &mut PackSession,
    category: PackCategory,
    ids: &[PackId],
    to: Partition,
) -> Result<usize> {
    let target = PackList::new(category, to);
    let mut pending = Vec::with_capacity(ids.len());

    for &id in ids {
        let (list, _, record) = find_pack(session, category, id)?;
        if to == Partition::Active && id.is_nil() {
            return Err(PackError::MissingId {
                name: record.name.clone(),
            }
            .into());
        }
        if list == target {
            output::info(&format!("'{}' is already {}", record.name, partition_word(to)));
        } else if !pending.contains(&id) {
            pending.push(id);
        }
    }

    if pending.is_empty() {
        return Ok(0);
    }

    let moved = match to {
        Partition::Active => session.activate(category, &pending),
        Partition::Inactive => session.deactivate(category, &pending),
    };
    Ok(moved)
}

const fn partition_word(partition: Partition) -> &'static str {
    match partition {
        Partition::Active => "enabled",
        Partition::Inactive => "disabled",
    }
}

fn run(ctx: &AddonContext, category: PackCategory, ids: &[PackId], to: Partition) -> Result<()> {
    let mut session = ctx.open_session()?;
    let moved = switch(&mut session, category, ids, to)?;
    if moved == 0 {
        return Ok(());
    }

    ctx.save_session(&session)?;
    super::print_success(&format!(
        "{} {moved} {category} pack(s)",
        capitalize(partition_word(to))
    ));
    Ok(())
}

/// Execute enable command - append packs to the end of the active order
///
/// # Errors
///
/// Returns an error if an id is unknown or the order cannot be saved
pub fn execute(ctx: &AddonContext, category: PackCategory, ids: &[PackId]) -> Result<()> {
    run(ctx, category, ids, Partition::Active)
}

/// Execute disable command - remove packs from the active order
///
/// # Errors
///
/// Returns an error if an id is unknown or the order cannot be saved
pub fn execute_disable(ctx: &AddonContext, category: PackCategory, ids: &[PackId]) -> Result<()> {
    run(ctx, category, ids, Partition::Inactive)
}
