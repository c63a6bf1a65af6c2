mod tag_set;

pub use tag_set::*;
