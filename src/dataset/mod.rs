pub mod generator;
pub mod writer;

pub use generator::{generate, GeneratorConfig, ProjectRecord, ASSET_CLASSES};
pub use writer::{write_csv, write_csv_file};
