pub mod builtins;
pub mod core;
pub mod keywords;
pub mod operators;
pub mod primitive;
