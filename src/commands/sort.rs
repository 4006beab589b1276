use std::path::Path;

use crate::confirm::Gate;
use crate::error::Result;
use crate::output::Format;
use crate::service::TaskService;

pub fn run(dir: &Path, gate: &mut dyn Gate, format: Format) -> Result<()> {
    let mut service = TaskService::open(dir, gate)?;
    let direction = service.toggle_sort()?;
    if format == Format::Json {
        println!("{}", serde_json::json!({ "sort": direction }));
    }
    Ok(())
}
