pub mod field;
pub mod stage;
pub mod text;
