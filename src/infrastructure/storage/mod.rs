//! Storage backends for the dataset and artifact slots

pub mod fs;
pub mod in_memory;

pub use fs::{FsArtifactStore, FsDatasetStore};
pub use in_memory::{InMemoryArtifactStore, InMemoryDatasetStore};
