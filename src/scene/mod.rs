pub mod layout;
pub mod ops;
pub mod stage;
