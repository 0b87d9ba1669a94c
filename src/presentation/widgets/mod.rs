mod greeting;
mod node_view;
mod todo_list_card;

pub use greeting::Greeting;
pub use node_view::NodeView;
pub use todo_list_card::TodoListCard;
