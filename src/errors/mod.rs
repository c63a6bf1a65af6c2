mod listing;
mod pagination;
mod schedule;
mod tag;

pub use listing::*;
pub use pagination::*;
pub use schedule::*;
pub use tag::*;
