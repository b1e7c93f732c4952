use super::coercion::AtomicMode;
use super::OptionNA;

/// Storage modes of atomic vectors, ordered by coercion precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    Logical,
    Integer,
    Double,
    Character,
}

impl Mode {
    /// The name reported by `typeof()`
    pub fn type_name(&self) -> &'static str {
        match self {
            Mode::Logical => "logical",
            Mode::Integer => "integer",
            Mode::Double => "double",
            Mode::Character => "character",
        }
    }

    /// The name used when printing an empty vector, as in `numeric(0)`
    pub fn empty_name(&self) -> &'static str {
        match self {
            Mode::Double => "numeric",
            _ => self.type_name(),
        }
    }
}

pub type Double = OptionNA<f64>;
impl AtomicMode for Double {
    const MODE: Mode = Mode::Double;
}

pub type Integer = OptionNA<i32>;
impl AtomicMode for Integer {
    const MODE: Mode = Mode::Integer;
}

pub type Logical = OptionNA<bool>;
impl AtomicMode for Logical {
    const MODE: Mode = Mode::Logical;
}

pub type Character = OptionNA<String>;
impl AtomicMode for Character {
    const MODE: Mode = Mode::Character;
}
