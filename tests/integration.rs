use tarea::confirm::Gate;
use tarea::error::Result;
use tarea::model::{SortOrder, StatusFilter, TaskPatch};
use tarea::projection::{self, Projection, Stats};
use tarea::service::TaskService;
use tarea::store::tasks::TaskStore;
use tempfile::tempdir;

/// Gate with pre-scripted confirmation answers.
struct ScriptedGate {
    answers: Vec<bool>,
    notices: Vec<String>,
}

impl ScriptedGate {
    fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.to_vec(),
            notices: Vec::new(),
        }
    }
}

impl Gate for ScriptedGate {
    fn notify(&mut self, title: &str, message: &str) -> Result<()> {
        self.notices.push(format!("{title}: {message}"));
        Ok(())
    }

    fn confirm(&mut self, _title: &str, _message: &str) -> Result<bool> {
        Ok(self.answers.remove(0))
    }
}

#[test]
fn test_full_workflow() {
    let dir = tempdir().unwrap();
    let mut gate = ScriptedGate::new(&[false, true]);
    let mut service = TaskService::open(dir.path(), &mut gate).unwrap();

    // Add one task: id 1, pending.
    let milk = service
        .submit("Buy milk", Some("2024-01-05"))
        .unwrap()
        .unwrap();
    assert_eq!(milk.id, 1);
    assert!(!milk.completed);

    let stats = Stats::from(service.store().tasks());
    assert_eq!(
        (stats.total, stats.completed, stats.pending, stats.progress),
        (1, 0, 1, 0)
    );

    // Second task with an earlier due date sorts first ascending.
    service.submit("Walk dog", Some("2024-01-01")).unwrap();
    let asc = projection::project(service.store().tasks(), &Projection::default());
    assert_eq!(asc.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 1]);

    // The sort toggle reverses the order.
    assert_eq!(service.toggle_sort().unwrap(), SortOrder::Desc);
    let desc = projection::project(
        service.store().tasks(),
        &Projection {
            sort: service.session().sort,
            ..Default::default()
        },
    );
    assert_eq!(desc.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);

    // Toggle-complete drives the stats to 50%.
    assert!(service.toggle(1).unwrap().unwrap().completed);
    let stats = Stats::from(service.store().tasks());
    assert_eq!((stats.completed, stats.pending, stats.progress), (1, 1, 50));

    // Declined delete leaves the collection alone; confirmed removes.
    assert!(service.delete(2).unwrap().is_none());
    assert_eq!(service.store().len(), 2);
    assert!(service.delete(2).unwrap().is_some());
    assert_eq!(service.store().len(), 1);

    let stats = Stats::from(service.store().tasks());
    assert_eq!((stats.total, stats.progress), (1, 100));
}

#[test]
fn test_persist_reload_round_trip() {
    let dir = tempdir().unwrap();
    let mut gate = ScriptedGate::new(&[]);
    let mut service = TaskService::open(dir.path(), &mut gate).unwrap();
    service.submit("one", Some("2024-01-01")).unwrap();
    service.submit("two", Some("2024-02-01")).unwrap();
    service.toggle(2).unwrap();
    let before = service.store().tasks().to_vec();
    drop(service);

    let reopened = TaskStore::open(dir.path()).unwrap();
    assert_eq!(reopened.tasks(), before);
    assert_eq!(reopened.next_id(), 3);
}

#[test]
fn test_clear_then_add_restarts_at_id_1() {
    let dir = tempdir().unwrap();
    let mut gate = ScriptedGate::new(&[true]);
    let mut service = TaskService::open(dir.path(), &mut gate).unwrap();
    service.submit("one", Some("2024-01-01")).unwrap();
    service.submit("two", Some("2024-02-01")).unwrap();

    assert!(service.delete_all().unwrap());
    let fresh = service.submit("fresh", Some("2024-03-01")).unwrap();
    assert_eq!(fresh.unwrap().id, 1);
    drop(service);

    // The reset survives a reload.
    let reopened = TaskStore::open(dir.path()).unwrap();
    assert_eq!(reopened.next_id(), 2);
}

#[test]
fn test_update_missing_id_surfaces_error_ack() {
    let dir = tempdir().unwrap();
    let mut gate = ScriptedGate::new(&[]);
    let mut service = TaskService::open(dir.path(), &mut gate).unwrap();
    service.submit("one", Some("2024-01-01")).unwrap();
    let before = service.store().tasks().to_vec();

    let result = service
        .update(
            42,
            TaskPatch {
                text: Some("ghost".into()),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(result.is_none());
    assert_eq!(service.store().tasks(), before);
    assert!(gate.notices.iter().any(|n| n == "Error: task 42 not found"));
}

#[test]
fn test_projection_composes_search_filter_sort() {
    let dir = tempdir().unwrap();
    let mut gate = ScriptedGate::new(&[]);
    let mut service = TaskService::open(dir.path(), &mut gate).unwrap();
    service.submit("Buy milk", Some("2024-01-05")).unwrap();
    service.submit("Buy bread", Some("2024-01-02")).unwrap();
    service.submit("Walk dog", Some("2024-01-01")).unwrap();
    service.toggle(2).unwrap();

    let query = Projection {
        search: Some("buy".into()),
        filter: StatusFilter::Pending,
        sort: SortOrder::Asc,
    };
    let visible = projection::project(service.store().tasks(), &query);
    assert_eq!(visible.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);

    // Same inputs, same output.
    let again = projection::project(service.store().tasks(), &query);
    assert_eq!(
        visible.iter().map(|t| t.id).collect::<Vec<_>>(),
        again.iter().map(|t| t.id).collect::<Vec<_>>()
    );
}
