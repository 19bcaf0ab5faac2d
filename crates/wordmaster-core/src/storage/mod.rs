mod entry;
mod slot;
mod store;

pub use entry::*;
pub use slot::*;
pub use store::*;
