mod config;
mod errors;
mod gateway;
mod general;
mod models;
mod results;
mod stats;
mod token;

pub use config::*;
pub use errors::*;
pub use gateway::*;
pub use general::*;
pub use models::*;
pub use results::*;
pub use stats::*;
pub use token::*;
