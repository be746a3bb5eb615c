pub mod dimensions;
pub mod functions;
pub mod options;
pub mod query;

pub use dimensions::*;
pub use functions::*;
pub use options::*;
pub use query::*;
