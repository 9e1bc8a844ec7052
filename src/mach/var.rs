use super::Integer;
use crate::error;
use crate::lang::{is_valid_ident, Error};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Value of a variable that was declared but never assigned.
pub const UNINITIALIZED: Integer = Integer::min_value();

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VarState {
    Declared,
    Initialized,
}

#[derive(Debug, Clone, Copy)]
struct Variable {
    value: Integer,
    state: VarState,
}

/// ## Variable memory
///
/// All variables are global and live until the run ends.
/// `fetch` does not look at the state: a declared variable that was
/// never assigned reads as `UNINITIALIZED`.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Variable>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Declaring again resets the variable.
    pub fn declare(&mut self, var_name: &str) -> Result<()> {
        if !is_valid_ident(var_name) {
            return Err(error!(InvalidIdentifier; var_name));
        }
        if self.vars.len() > u16::max_value() as usize {
            return Err(error!(OutOfMemory));
        }
        self.vars.insert(
            var_name.into(),
            Variable {
                value: UNINITIALIZED,
                state: VarState::Declared,
            },
        );
        Ok(())
    }

    pub fn is_declared(&self, var_name: &str) -> bool {
        self.vars.contains_key(var_name)
    }

    pub fn state(&self, var_name: &str) -> Option<VarState> {
        self.vars.get(var_name).map(|var| var.state)
    }

    pub fn fetch(&self, var_name: &str) -> Result<Integer> {
        match self.vars.get(var_name) {
            Some(var) => Ok(var.value),
            None => Err(error!(UndeclaredVariable; var_name)),
        }
    }

    pub fn store(&mut self, var_name: &str, value: Integer) -> Result<()> {
        match self.vars.get_mut(var_name) {
            Some(var) => {
                var.value = value;
                var.state = VarState::Initialized;
                Ok(())
            }
            None => Err(error!(UndeclaredVariable; var_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_declare_then_store() {
        let mut v = Var::new();
        v.declare("X").unwrap();
        assert_eq!(v.state("X"), Some(VarState::Declared));
        assert_eq!(v.fetch("X").unwrap(), UNINITIALIZED);
        v.store("X", 42).unwrap();
        assert_eq!(v.fetch("X").unwrap(), 42);
        assert_eq!(v.state("X"), Some(VarState::Initialized));
    }

    #[test]
    fn test_redeclare_resets() {
        let mut v = Var::new();
        v.declare("X").unwrap();
        v.store("X", 1).unwrap();
        v.declare("X").unwrap();
        assert_eq!(v.fetch("X").unwrap(), UNINITIALIZED);
        assert_eq!(v.state("X"), Some(VarState::Declared));
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_undeclared() {
        let mut v = Var::new();
        assert!(v.fetch("Y").unwrap_err().is(ErrorCode::UndeclaredVariable));
        assert!(v.store("Y", 1).unwrap_err().is(ErrorCode::UndeclaredVariable));
        assert_eq!(v.state("Y"), None);
    }

    #[test]
    fn test_invalid_identifier() {
        let mut v = Var::new();
        let e = v.declare("9LIVES").unwrap_err();
        assert_eq!(e.to_string(), "INVALID IDENTIFIER; 9LIVES");
        assert!(v.declare("").is_err());
        assert!(v.is_empty());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut v = Var::new();
        v.declare("x").unwrap();
        assert!(v.is_declared("x"));
        assert!(!v.is_declared("X"));
    }
}
