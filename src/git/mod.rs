pub mod repo;
pub mod scratch;

pub use repo::GitRepo;
pub use scratch::ScratchClone;
