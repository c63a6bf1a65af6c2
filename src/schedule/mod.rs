mod event;
mod modal;

pub use event::*;
pub use modal::*;
