pub mod catalog;
pub mod loader;
pub mod paginator;
pub mod stats;

pub use catalog::DatasetCatalog;
pub use loader::Loader;
pub use paginator::Paginator;
