//! Business logic service layer

mod page_loader;

pub use page_loader::{LoadOutcome, PageLoader};
