use std::path::Path;

use crate::confirm::Gate;
use crate::error::Result;
use crate::output::{self, Format};
use crate::service::TaskService;

/// Enter edit mode: the task's current fields are shown so they can be
/// resubmitted, and the next `add` applies as an update for this id.
pub fn run(dir: &Path, id: u64, gate: &mut dyn Gate, format: Format) -> Result<()> {
    let mut service = TaskService::open(dir, gate)?;
    if let Some(task) = service.begin_edit(id)? {
        output::print_task(&task, format)?;
    }
    Ok(())
}
