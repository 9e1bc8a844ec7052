use crate::error;
use crate::lang::{split_first_word, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## SIL instruction set
///
/// Every line starts with exactly one of these keywords.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Opcode {
    /// `INTEGER A,B,...` declares variables.
    Integer,
    /// `INPUT A,B,...` reads one line of integers.
    Input,
    /// `LET A=<expression>`
    Let,
    /// `PUSH <expression>` onto the operand stack.
    Push,
    /// `POP A` from the operand stack.
    Pop,
    /// `IF <expression><relation><expression> THEN <action>`
    If,
    Goto,
    Gosub,
    Ret,
    Print,
    Println,
    End,
}

impl Opcode {
    pub fn from_keyword(keyword: &str) -> Option<Opcode> {
        use Opcode::*;
        Some(match keyword {
            "INTEGER" => Integer,
            "INPUT" => Input,
            "LET" => Let,
            "PUSH" => Push,
            "POP" => Pop,
            "IF" => If,
            "GOTO" => Goto,
            "GOSUB" => Gosub,
            "RET" => Ret,
            "PRINT" => Print,
            "PRINTLN" => Println,
            "END" => End,
            _ => return None,
        })
    }

    /// Splits a canonical instruction into its opcode and operands.
    pub fn decode(instruction: &str) -> Result<(Opcode, &str)> {
        let (keyword, operands) = split_first_word(instruction.trim());
        match Opcode::from_keyword(keyword) {
            Some(opcode) => Ok((opcode, operands)),
            None => Err(error!(SyntaxError; keyword)),
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        let s = match self {
            Integer => "INTEGER",
            Input => "INPUT",
            Let => "LET",
            Push => "PUSH",
            Pop => "POP",
            If => "IF",
            Goto => "GOTO",
            Gosub => "GOSUB",
            Ret => "RET",
            Print => "PRINT",
            Println => "PRINTLN",
            End => "END",
        };
        write!(f, "{}", s)
    }
}
