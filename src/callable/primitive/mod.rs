mod all;
pub use all::*;

mod c;
pub use c::*;

mod data_frame;
pub use data_frame::*;

mod dim;
pub use dim::*;

mod dimnames;
pub use dimnames::*;

mod identical;
pub use identical::*;

mod is_na;
pub use is_na::*;

mod is_null;
pub use is_null::*;

mod length;
pub use length::*;

mod list;
pub use list::*;

mod matrix;
pub use matrix::*;

mod names;
pub use names::*;

mod order;
pub use order::*;

mod outer;
pub use outer::*;

mod paste;
pub use paste::*;

mod print;
pub use print::*;

mod q;
pub use q::*;

mod rep;
pub use rep::*;

mod sample;
pub use sample::*;

mod seq;
pub use seq::*;

mod sets;
pub use sets::*;

mod type_reflection;
pub use type_reflection::*;

mod vector;
pub use vector::*;

mod which;
pub use which::*;
