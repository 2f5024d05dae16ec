// Domain layer module
pub mod base;
pub mod value_objects;
pub mod validation;
pub mod aggregates;
pub mod events;

pub use base::*;
pub use value_objects::*;
pub use validation::*;
pub use aggregates::*;
pub use events::*;
