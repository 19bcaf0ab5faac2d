mod difficulty;
mod session;

pub use difficulty::*;
pub use session::*;
