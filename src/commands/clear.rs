use std::path::Path;

use crate::confirm::Gate;
use crate::error::Result;
use crate::service::TaskService;

pub fn run(dir: &Path, gate: &mut dyn Gate) -> Result<()> {
    let mut service = TaskService::open(dir, gate)?;
    service.delete_all()?;
    Ok(())
}
