use serde::Serialize;

use crate::model::{SortOrder, StatusFilter, Task};

/// Inputs for deriving the visible task list: search term, status filter,
/// and sort direction.
#[derive(Debug, Default, Clone)]
pub struct Projection {
    pub search: Option<String>,
    pub filter: StatusFilter,
    pub sort: SortOrder,
}

/// Search, then status-filter, then sort by due date. Pure over its inputs;
/// equal dates tie-break by id so the order is deterministic.
pub fn project<'a>(tasks: &'a [Task], query: &Projection) -> Vec<&'a Task> {
    let needle = query
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|s| !s.is_empty());

    let mut visible: Vec<&Task> = tasks
        .iter()
        .filter(|t| {
            needle
                .as_deref()
                .is_none_or(|n| t.text.to_lowercase().contains(n))
        })
        .filter(|t| t.matches(query.filter))
        .collect();

    visible.sort_by(|a, b| {
        let ord = a.date.cmp(&b.date).then(a.id.cmp(&b.id));
        match query.sort {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    visible
}

/// Aggregate counters shown beside the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// `round(completed / total * 100)`, 0 when the store is empty.
    pub progress: u32,
}

impl From<&[Task]> for Stats {
    fn from(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let pending = total - completed;
        let progress = if total == 0 {
            0
        } else {
            (completed as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            total,
            completed,
            pending,
            progress,
        }
    }
}
