use super::context::{CommandContext, find_pack};
use crate::AddonContext;
use crate::cli::MoveTarget;
use crate::output;
use crate::pack::{PackCategory, PackId};
use crate::session::{PackList, PackSession, Partition};
use anyhow::Result;

/// Where to move a pack within the active order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
    To(usize),
}

impl From<MoveTarget> for Step {
    fn from(target: MoveTarget) -> Self {
        match (target.up, target.down, target.to) {
            (_, _, Some(index)) => Self::To(index),
            (false, true, None) => Self::Down,
            _ => Self::Up,
        }
    }
}

/// Moves an enabled pack and returns its new position, or `None` if it
/// was already there.
///
/// # Errors
///
/// Returns an error if:
/// - The pack is not installed in `category`
/// - The pack is not enabled
/// - The target position is past the end of the active order
pub fn apply(
    session: &mut PackSession,
    category: PackCategory,
    id: PackId,
    step: Step,
) -> Result<Option<usize>> {
    let (list, index, record) = find_pack(session, category, id)?;
    if list.partition() != Partition::Active {
        anyhow::bail!(
            "'{}' is not enabled; enable it with 'addon enable {category} {id}' first",
            record.name
        );
    }

    let active = PackList::new(category, Partition::Active);
    let len = session.list(active).len();
    let to = match step {
        Step::Up => index.checked_sub(1),
        Step::Down => Some(index + 1).filter(|to| *to < len),
        Step::To(to) if to >= len => {
            anyhow::bail!("Position {to} is out of range (0..={})", len - 1)
        }
        Step::To(to) => Some(to),
    };

    match to {
        Some(to) if to != index => {
            session.reposition(active, index, to);
            Ok(Some(to))
        }
        _ => Ok(None),
    }
}

/// Execute move command - change the position of an enabled pack
///
/// # Errors
///
/// Returns an error if the pack cannot be moved or the order cannot be saved
pub fn execute(ctx: &AddonContext, category: PackCategory, id: PackId, step: Step) -> Result<()> {
    let mut session = ctx.open_session()?;

    let Some(position) = apply(&mut session, category, id, step)? else {
        output::info("Pack is already at that position");
        return Ok(());
    };

    ctx.save_session(&session)?;
    let (_, _, record) = find_pack(&session, category, id)?;
    super::print_success(&format!("Moved '{}' to position {position}", record.name));
    Ok(())
}
