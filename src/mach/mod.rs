/*!
## Rust Machine Module

This Rust module is the SIL execution engine.

*/

pub type Address = usize;
pub type Integer = i32;

mod expr;
mod opcode;
mod operation;
mod program;
mod runtime;
mod stack;
mod var;

pub use expr::evaluate;
pub use expr::rewrite;
pub use opcode::Opcode;
pub use operation::Operation;
pub use operation::Operator;
pub use operation::Relation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use var::Var;
pub use var::VarState;
pub use var::UNINITIALIZED;

#[cfg(test)]
mod tests;
