pub mod db;
pub mod snapshot_repository;

pub use snapshot_repository::{PgSnapshotRepository, SnapshotRepository};
