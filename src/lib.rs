mod gui;
mod saves;
mod session;

pub use gui::{App, Config};
pub use saves::{SaveDir, SaveError};
pub use session::Session;
