use core::fmt;
use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use hashbrown::HashMap;

use crate::callable::builtins::BUILTIN;
use crate::error::Error;

use super::Obj;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    pub values: RefCell<HashMap<String, Obj>>,
    pub parent: Option<Rc<Environment>>,
}

impl Environment {
    pub fn from_builtins() -> Rc<Environment> {
        let env = Rc::new(Environment::default());
        for (name, builtin) in BUILTIN.iter() {
            env.insert(String::from(*name), Obj::Function(builtin.clone()));
        }
        env
    }

    /// A fresh global environment whose parent holds the builtins
    pub fn global() -> Rc<Environment> {
        Rc::new(Environment {
            parent: Some(Environment::from_builtins()),
            ..Default::default()
        })
    }

    pub fn insert(&self, name: String, value: Obj) {
        self.values.borrow_mut().insert(name, value);
    }

    pub fn get(&self, name: &str) -> Result<Obj, Error> {
        if let Some(value) = self.values.borrow().get(name) {
            return Ok(value.clone());
        }

        match &self.parent {
            Some(parent) => parent.get(name),
            None => Err(Error::VariableNotFound(name.to_string())),
        }
    }

    /// Look up a function, skipping bindings that are not functions
    pub fn get_function(&self, name: &str) -> Result<Obj, Error> {
        if let Some(value @ Obj::Function(_)) = self.values.borrow().get(name) {
            return Ok(value.clone());
        }

        match &self.parent {
            Some(parent) => parent.get_function(name),
            None => Err(Error::FunctionNotFound(name.to_string())),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<environment {:?}>", self.values.as_ptr())
    }
}
