use std::ops::Deref;
use std::rc::Rc;

/// Internal data representation for copy-on-write semantics.
///
/// Cloning shares the underlying allocation. The data is only copied when
/// it is mutated while another handle still refers to it, so selections
/// and assignments never leak into other bindings of the same value.
#[derive(Debug, Default)]
pub struct CowObj<T: Clone>(Rc<T>);

impl<T: Clone> Clone for CowObj<T> {
    fn clone(&self) -> Self {
        CowObj(Rc::clone(&self.0))
    }
}

impl<T: Clone + PartialEq> PartialEq for CowObj<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl<T: Clone> From<T> for CowObj<T> {
    fn from(x: T) -> Self {
        CowObj(Rc::new(x))
    }
}

impl<T: Clone> Deref for CowObj<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Clone> CowObj<T> {
    /// Get mutable access to the internal data.
    /// In case more than one reference to the internal data exists,
    /// the data is cloned.
    pub fn with_inner_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(Rc::make_mut(&mut self.0))
    }

    /// Take ownership of the data, cloning only if it is shared
    pub fn into_inner(self) -> T {
        Rc::try_unwrap(self.0).unwrap_or_else(|rc| (*rc).clone())
    }

    pub fn is_shared(&self) -> bool {
        Rc::strong_count(&self.0) > 1
    }
}

#[cfg(test)]
mod tests {
    use super::CowObj;

    #[test]
    fn with_inner_mut_copies_shared_data() {
        let x = CowObj::from(vec![1, 2]);
        let mut y = x.clone();
        assert!(x.is_shared());

        y.with_inner_mut(|v| v.push(3));
        assert_eq!(*x, vec![1, 2]);
        assert_eq!(*y, vec![1, 2, 3]);
        assert!(!x.is_shared());
    }

    #[test]
    fn with_inner_mut_reuses_unique_data() {
        let mut x = CowObj::from(vec![1]);
        x.with_inner_mut(|v| v[0] = 2);
        assert_eq!(x.into_inner(), vec![2]);
    }
}
