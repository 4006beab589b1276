use std::path::Path;

use crate::confirm::Gate;
use crate::error::Result;
use crate::output::{self, Format};
use crate::service::TaskService;

pub fn run(
    dir: &Path,
    text: String,
    date: Option<String>,
    gate: &mut dyn Gate,
    format: Format,
) -> Result<()> {
    let mut service = TaskService::open(dir, gate)?;
    if let Some(task) = service.submit(&text, date.as_deref())? {
        output::print_task(&task, format)?;
    }
    Ok(())
}
