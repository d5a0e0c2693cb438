pub mod catalog;
pub mod root;

pub use catalog::CatalogController;
pub use root::RootController;
