use std::path::Path;

use crate::error::Result;
use crate::model::{SortOrder, StatusFilter};
use crate::output::{self, Format};
use crate::projection::{self, Projection, Stats};
use crate::store::session::Session;
use crate::store::tasks::TaskStore;

/// Read-only: project the collection through search, status filter, and
/// date sort, then render it with a stats footer. `--sort` overrides the
/// saved direction for this invocation only.
pub fn run(
    dir: &Path,
    search: Option<String>,
    status: Option<StatusFilter>,
    sort: Option<SortOrder>,
    format: Format,
) -> Result<()> {
    let store = TaskStore::open(dir)?;
    let session = Session::load(dir);

    let query = Projection {
        search,
        filter: status.unwrap_or_default(),
        sort: sort.unwrap_or(session.sort),
    };
    let visible = projection::project(store.tasks(), &query);
    output::print_tasks(&visible, format)?;

    // Stats cover the whole store, not the filtered view. Json consumers
    // get them from `stats` instead.
    if format != Format::Json {
        output::print_stats(&Stats::from(store.tasks()), format)?;
    }
    Ok(())
}
