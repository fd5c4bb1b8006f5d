pub mod config;
pub mod db;
pub mod error;
pub mod sanitize;
pub mod server;
pub mod validation;

mod utils;

pub use db::Store;
pub use error::{Entity, NotefulError};
pub use server::router::{NotefulState, noteful_router};
