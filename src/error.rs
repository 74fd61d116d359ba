use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GlocError>;

#[derive(Error, Debug)]
pub enum GlocError {
    #[error("Failed to clone '{location}': {reason}")]
    Clone { location: String, reason: String },
    #[error("Failed to check out commit {commit}: {reason}")]
    Checkout { commit: String, reason: String },
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Repository has no active branch (HEAD is detached)")]
    NoActiveBranch,
    #[error("Interrupted")]
    Interrupted,
    #[error("Failed to walk working tree: {0}")]
    Walk(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
}

// gix errors are large, keep them boxed so `Result<T>` stays small.
impl From<gix::open::Error> for GlocError {
    fn from(err: gix::open::Error) -> Self {
        GlocError::Git(Box::new(err))
    }
}

impl From<gix::object::find::existing::Error> for GlocError {
    fn from(err: gix::object::find::existing::Error) -> Self {
        GlocError::ObjectFind(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for GlocError {
    fn from(err: gix::object::commit::Error) -> Self {
        GlocError::Commit(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for GlocError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GlocError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for GlocError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        GlocError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for GlocError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        GlocError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for GlocError {
    fn from(err: gix::objs::decode::Error) -> Self {
        GlocError::ObjectDecode(Box::new(err))
    }
}
