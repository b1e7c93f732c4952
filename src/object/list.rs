use super::types::Character;
use super::{Obj, Rep};

pub type List = Rep<Obj>;

impl List {
    /// Build a list from optionally named elements
    ///
    /// The list only carries names when at least one element is named;
    /// unnamed elements then receive an empty name.
    ///
    pub fn from_pairs<I>(pairs: I) -> List
    where
        I: IntoIterator<Item = (Option<String>, Obj)>,
    {
        let (names, values): (Vec<Option<String>>, Vec<Obj>) = pairs.into_iter().unzip();
        let named = names.iter().any(Option::is_some);
        let names = named.then(|| {
            names
                .into_iter()
                .map(|name| Character::Some(name.unwrap_or_default()))
                .collect()
        });

        List::from(values).with_names(names)
    }

    /// Elements paired with their names, if any
    pub fn pairs(&self) -> Vec<(Option<String>, Obj)> {
        let names = self.names();
        self.iter()
            .enumerate()
            .map(|(i, value)| {
                let name = names
                    .and_then(|names| names.get(i))
                    .and_then(|name| name.clone().as_option())
                    .filter(|name| !name.is_empty());
                (name, value.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r_expect;

    #[test]
    fn names_only_when_any_element_is_named() {
        let l = List::from_pairs(vec![(None, Obj::from(1)), (None, Obj::from(2))]);
        assert!(l.names().is_none());

        let l = List::from_pairs(vec![(Some("a".into()), Obj::from(1)), (None, Obj::Null)]);
        assert_eq!(
            l.names(),
            Some(&[Character::Some("a".into()), Character::Some("".into())][..])
        );
    }

    #[test]
    fn copy_on_write_single_bracket() {
        r_expect! {{"
            l1 = list(1)
            l2 = l1
            l1[1] = 2
            l1[[1]] == 2 & l2[[1]] == 1
        "}}
    }

    #[test]
    fn copy_on_write_double_bracket_names() {
        r_expect! {{r#"
            l1 = list(a = 1)
            l2 = l1
            l1[["a"]] = 2
            l1$a == 2 & l2$a == 1
        "#}}
    }

    #[test]
    fn copy_on_write_slice_names() {
        r_expect! {{r#"
            l = list(a = 1, b = 2, c = 3)
            l1 = l
            l1[c("a", "b")] = list(10, 20)
            l1$a == 10 && l1$b == 20 & l$a == 1 & l$b == 2
        "#}}
    }

    #[test]
    fn copy_on_write_nested() {
        r_expect! {{r#"
            l = list(a = list(b = 1))
            l1 = l
            l1$a$b = 2
            l1$a$b == 2 & l$a$b == 1
        "#}}
    }
}
