//! Domain entities.

mod todo;

pub use todo::TodoItem;
