use crate::error;
use crate::lang::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector
///
/// Each stack knows which error an underflow means to the program:
/// the operand stack reports `StackUnderflow`, the call stack
/// `CallStackUnderflow`, and the evaluator's scratch stacks a
/// `SyntaxError`.

pub struct Stack<T> {
    underflow_code: ErrorCode,
    underflow_message: &'static str,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(underflow_code: ErrorCode, underflow_message: &'static str) -> Stack<T> {
        Stack {
            underflow_code,
            underflow_message,
            vec: vec![],
        }
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }
    fn overflow_check(&self) -> Result<()> {
        if self.vec.len() > self.max_len() {
            Err(error!(OutOfMemory; "STACK OVERFLOW"))
        } else {
            Ok(())
        }
    }
    fn underflow_error(&self) -> Error {
        let error = Error::new(self.underflow_code);
        if self.underflow_message.is_empty() {
            error
        } else {
            error.message(self.underflow_message)
        }
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        self.vec.push(val);
        self.overflow_check()
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
}
