use super::types::*;
use super::OptionNA;
use crate::object::format::format_double;

/// Significant digits kept when a double is converted to a string
const CHARACTER_DIGITS: usize = 15;

pub trait AtomicMode {
    const MODE: Mode;

    fn is_double() -> bool {
        Self::MODE == Mode::Double
    }
    fn is_integer() -> bool {
        Self::MODE == Mode::Integer
    }
    fn is_logical() -> bool {
        Self::MODE == Mode::Logical
    }
    fn is_character() -> bool {
        Self::MODE == Mode::Character
    }
}

pub trait CoercibleInto<T>: Sized {
    fn coerce_into(self) -> T;
}

impl<T> CoercibleInto<T> for T {
    #[inline]
    fn coerce_into(self) -> T {
        self
    }
}

impl CoercibleInto<Integer> for Logical {
    fn coerce_into(self) -> Integer {
        self.map(|x| x as i32)
    }
}

impl CoercibleInto<Double> for Logical {
    fn coerce_into(self) -> Double {
        self.map(|x| x as i32 as f64)
    }
}

impl CoercibleInto<Character> for Logical {
    fn coerce_into(self) -> Character {
        self.map(|x| if x { "TRUE" } else { "FALSE" }.to_string())
    }
}

impl CoercibleInto<Logical> for Integer {
    fn coerce_into(self) -> Logical {
        self.map(|x| x != 0)
    }
}

impl CoercibleInto<Double> for Integer {
    fn coerce_into(self) -> Double {
        self.map(|x| x as f64)
    }
}

impl CoercibleInto<Character> for Integer {
    fn coerce_into(self) -> Character {
        self.map(|x| x.to_string())
    }
}

impl CoercibleInto<Logical> for Double {
    fn coerce_into(self) -> Logical {
        match self {
            OptionNA::Some(x) if !x.is_nan() => OptionNA::Some(x != 0.0),
            _ => OptionNA::NA,
        }
    }
}

impl CoercibleInto<Integer> for Double {
    fn coerce_into(self) -> Integer {
        match self {
            OptionNA::Some(x) if x.is_finite() => OptionNA::Some(x.trunc() as i32),
            _ => OptionNA::NA,
        }
    }
}

impl CoercibleInto<Character> for Double {
    fn coerce_into(self) -> Character {
        self.map(|x| format_double(x, CHARACTER_DIGITS))
    }
}

impl CoercibleInto<Logical> for Character {
    fn coerce_into(self) -> Logical {
        match self {
            OptionNA::Some(x) => match x.as_str() {
                "TRUE" | "true" | "True" | "T" => OptionNA::Some(true),
                "FALSE" | "false" | "False" | "F" => OptionNA::Some(false),
                _ => OptionNA::NA,
            },
            OptionNA::NA => OptionNA::NA,
        }
    }
}

impl CoercibleInto<Double> for Character {
    fn coerce_into(self) -> Double {
        match self {
            OptionNA::Some(x) => parse_double(&x).map_or(OptionNA::NA, OptionNA::Some),
            OptionNA::NA => OptionNA::NA,
        }
    }
}

impl CoercibleInto<Integer> for Character {
    fn coerce_into(self) -> Integer {
        CoercibleInto::<Double>::coerce_into(self).coerce_into()
    }
}

fn parse_double(x: &str) -> Option<f64> {
    match x.trim() {
        "Inf" => Some(f64::INFINITY),
        "-Inf" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        s => s.parse::<f64>().ok().filter(|x| x.is_finite()),
    }
}

/// Coerce a slice of values, reporting whether any new `NA`s appeared
pub fn coerce_values<T, U>(values: &[T]) -> (Vec<U>, bool)
where
    T: CoercibleInto<U> + Clone + IsNA,
    U: IsNA,
{
    let mut introduced_na = false;
    let coerced = values
        .iter()
        .map(|x| {
            let y: U = x.clone().coerce_into();
            introduced_na |= y.is_na() && !x.is_na();
            y
        })
        .collect();

    (coerced, introduced_na)
}

pub trait IsNA {
    fn is_na(&self) -> bool;
}

impl<T> IsNA for OptionNA<T> {
    fn is_na(&self) -> bool {
        matches!(self, OptionNA::NA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_truncate_into_integers() {
        let x: Integer = OptionNA::Some(2.9).coerce_into();
        assert_eq!(x, OptionNA::Some(2));
        let x: Integer = OptionNA::Some(-2.9).coerce_into();
        assert_eq!(x, OptionNA::Some(-2));
        let x: Integer = OptionNA::Some(f64::NAN).coerce_into();
        assert_eq!(x, OptionNA::NA);
    }

    #[test]
    fn doubles_print_compactly_as_characters() {
        let x: Character = OptionNA::Some(2.0).coerce_into();
        assert_eq!(x, OptionNA::Some("2".to_string()));
        let x: Character = OptionNA::Some(0.1).coerce_into();
        assert_eq!(x, OptionNA::Some("0.1".to_string()));
    }

    #[test]
    fn unparseable_strings_become_na() {
        let values = vec![OptionNA::Some("1.5".to_string()), OptionNA::Some("a".into())];
        let (coerced, introduced_na): (Vec<Double>, bool) = coerce_values(&values);
        assert_eq!(coerced, vec![OptionNA::Some(1.5), OptionNA::NA]);
        assert!(introduced_na);
    }
}
