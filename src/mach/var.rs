use super::Val;
use std::collections::HashMap;
use std::rc::Rc;

/// ## Variable memory
///
/// Unset variables read as integer zero through [`Var::fetch`];
/// [`Var::get`] tells them apart for arithmetic.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn get(&self, var_name: &str) -> Option<&Val> {
        self.vars.get(var_name)
    }

    pub fn fetch(&self, var_name: &str) -> Val {
        match self.vars.get(var_name) {
            Some(val) => val.clone(),
            None => Val::default(),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: Val) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        }
    }
}
