use std::path::Path;

use crate::error::Result;
use crate::output::{self, Format};
use crate::projection::Stats;
use crate::store::tasks::TaskStore;

pub fn run(dir: &Path, format: Format) -> Result<()> {
    let store = TaskStore::open(dir)?;
    output::print_stats(&Stats::from(store.tasks()), format)?;
    Ok(())
}
