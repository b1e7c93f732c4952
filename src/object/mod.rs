mod core;
pub use core::*;

mod ast;
pub use ast::*;

mod cow;
pub use cow::*;

mod dims;
pub use dims::*;

mod environment;
pub use environment::*;

mod frame;
pub use frame::*;

mod list;
pub use list::*;

pub mod format;
pub use format::FormatOptions;

mod vector;
pub use vector::*;
