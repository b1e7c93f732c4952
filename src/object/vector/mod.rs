/// Atomic vectors
///
/// Vectors hold one of the four atomic modes. All coercion between modes is
/// handled within rust's type system through [`coercion::CoercibleInto`],
/// following the precedence logical < integer < double < character.
///
pub mod coercion;
pub mod operators;
pub mod rep;
pub mod types;

mod core;
pub use core::*;
pub use rep::Rep;
