mod output;
mod runner;
pub mod transport;

pub use output::*;
pub use runner::*;
pub use transport::Transport;
