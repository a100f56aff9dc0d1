pub mod dashboard;
mod panels;
pub mod terminal_guard;

pub use dashboard::Dashboard;
pub use terminal_guard::{install_panic_hook, TerminalGuard};
