use thiserror::Error;

#[derive(Debug, Error)]
pub enum TareaError {
    #[error("task {0} not found")]
    TaskNotFound(u64),

    #[error("invalid due date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("task store corrupt: {0}: {1}")]
    CorruptStore(String, String),

    #[error("locked by another process: {0}")]
    Locked(String),

    #[error("cannot determine data directory (set --dir, TAREA_DIR, or HOME)")]
    NoDataDir,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TareaError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TaskNotFound(_) => "task_not_found",
            Self::InvalidDate(_) => "invalid_date",
            Self::CorruptStore(_, _) => "corrupt_store",
            Self::Locked(_) => "locked",
            Self::NoDataDir => "no_data_dir",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, TareaError>;
