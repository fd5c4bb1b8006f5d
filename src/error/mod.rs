mod noteful;

pub use noteful::{Entity, NotefulError};
