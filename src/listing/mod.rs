mod page;
mod query;

pub use page::*;
pub use query::*;
