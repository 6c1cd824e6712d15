mod display;
mod session;

pub use display::render_board;
pub use session::{SessionError, SessionOptions, run_session};
