pub mod file_writer;
pub mod generator;
pub mod transformer;

pub use file_writer::{DryRunFileSystem, FileSystem, StandardFileSystem};
pub use generator::{ScaffoldGenerator, DEFAULT_SLUG_FIELD};
