pub mod category;
pub mod recommendation;
