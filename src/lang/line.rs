use super::ident::is_ident_char;
use super::{Error, LineNumber};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## One numbered line of canonical SIL
///
/// Source text is normalized once, here, so the engine only ever
/// sees one spelling of each instruction:
/// `<OPCODE>` or `<OPCODE> <operands>` with the opcode upper-cased and
/// whitespace removed from the operands, except inside `"..."` of a
/// `PRINT`. An `IF` normalizes to `IF <cond> THEN <ACTION> <operands>`.

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: LineNumber,
    instruction: String,
}

impl Line {
    pub fn new(s: &str) -> Result<Line> {
        let (number, code) = split_first_word(s.trim());
        let number = match number.parse::<LineNumber>() {
            Ok(n) if n > 0 && number.bytes().all(|b| b.is_ascii_digit()) => n,
            _ => return Err(error!(SyntaxError; "INVALID LINE NUMBER")),
        };
        if code.is_empty() {
            return Err(error!(SyntaxError, number; "MISSING INSTRUCTION"));
        }
        Ok(Line {
            number,
            instruction: normalize(code),
        })
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.instruction)
    }
}

/// Splits off the first whitespace-delimited word.
/// The remainder has its leading whitespace removed.
pub fn split_first_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim_start()),
        None => (s, ""),
    }
}

/// Finds `THEN` in the body of an `IF`, in any case, as long as
/// it isn't the tail of a longer identifier like `ATHENS` or `A1THEN`.
/// A number directly before it, as in `X<5THEN`, doesn't count.
pub fn split_then(s: &str) -> Option<(&str, &str)> {
    let upper = s.to_ascii_uppercase();
    let mut from = 0;
    while let Some(pos) = upper[from..].find("THEN") {
        let idx = from + pos;
        let run = s[..idx]
            .chars()
            .rev()
            .take_while(|&c| is_ident_char(c))
            .collect::<String>();
        let joined = !run.chars().all(|c| c.is_ascii_digit());
        if !joined {
            return Some((&s[..idx], &s[idx + 4..]));
        }
        from = idx + 4;
    }
    None
}

pub fn normalize(code: &str) -> String {
    let (word, operands) = split_first_word(code.trim());
    let opcode = word.to_ascii_uppercase();
    match opcode.as_str() {
        "END" | "RET" => opcode,
        "PRINT" | "PRINTLN" => join(opcode, &strip_outside_quotes(operands)),
        "IF" => match split_then(operands) {
            Some((cond, action)) => {
                let mut s = join(opcode, &strip_whitespace(cond));
                s.push_str(" THEN");
                let action = normalize(action);
                if !action.is_empty() {
                    s.push(' ');
                    s.push_str(&action);
                }
                s
            }
            None => join(opcode, &strip_whitespace(operands)),
        },
        _ => join(opcode, &strip_whitespace(operands)),
    }
}

fn join(opcode: String, operands: &str) -> String {
    if operands.is_empty() {
        opcode
    } else {
        format!("{} {}", opcode, operands)
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn strip_outside_quotes(s: &str) -> String {
    let mut quoted = false;
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch == '"' {
            quoted = !quoted;
        }
        if quoted || !ch.is_whitespace() {
            out.push(ch);
        }
    }
    out
}
