mod pager;
mod state;
mod window;

pub use pager::*;
pub use state::*;
pub use window::*;
