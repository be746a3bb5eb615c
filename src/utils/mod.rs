pub mod collection_ext;
pub mod error;

pub use collection_ext::{difference_ordered, unique_ordered};
pub use error::{EditorError, EditorResult};
