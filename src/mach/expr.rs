use super::{Integer, Operator, Stack, Var};
use crate::error;
use crate::lang::{Error, ErrorCode};
use tracing::trace;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(Integer),
    LParen,
    RParen,
    Operator(Operator),
}

#[derive(Debug, Clone, Copy)]
enum Pending {
    Paren,
    Operator(Operator),
}

fn tokenize(expr: &str) -> Result<Vec<Token>> {
    let mut tokens = vec![];
    let mut chars = expr.char_indices().peekable();
    while let Some((start, ch)) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }
        if ch.is_ascii_digit() {
            let mut end = start + 1;
            while let Some(&(idx, pk)) = chars.peek() {
                if !pk.is_ascii_digit() {
                    break;
                }
                end = idx + 1;
                chars.next();
            }
            match expr[start..end].parse::<Integer>() {
                Ok(n) => tokens.push(Token::Number(n)),
                Err(_) => return Err(error!(Overflow; &expr[start..end])),
            }
            continue;
        }
        tokens.push(match ch {
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => match Operator::from_char(ch) {
                Some(op) => Token::Operator(op),
                None => return Err(error!(SyntaxError; &format!("UNEXPECTED {:?}", ch))),
            },
        });
    }
    Ok(tokens)
}

fn reduce(op: Operator, values: &mut Stack<Integer>) -> Result<()> {
    let (lhs, rhs) = values.pop_2()?;
    values.push(op.apply(lhs, rhs)?)
}

/// ## Operator-precedence evaluation of integer arithmetic
///
/// `expr` may only hold digits, `+ - * /`, parentheses and whitespace.
/// `*` and `/` bind tighter than `+` and `-`; equal precedence
/// groups left to right.
pub fn evaluate(expr: &str) -> Result<Integer> {
    let mut values: Stack<Integer> = Stack::new(ErrorCode::SyntaxError, "MISSING OPERAND");
    let mut ops: Stack<Pending> = Stack::new(ErrorCode::SyntaxError, "MISSING (");
    for token in tokenize(expr)? {
        match token {
            Token::Number(n) => values.push(n)?,
            Token::LParen => ops.push(Pending::Paren)?,
            Token::RParen => loop {
                match ops.pop()? {
                    Pending::Paren => break,
                    Pending::Operator(op) => reduce(op, &mut values)?,
                }
            },
            Token::Operator(op) => {
                while let Some(&Pending::Operator(top)) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop()?;
                    reduce(top, &mut values)?;
                }
                ops.push(Pending::Operator(op))?;
            }
        }
    }
    while !ops.is_empty() {
        match ops.pop()? {
            Pending::Paren => return Err(error!(SyntaxError; "MISSING )")),
            Pending::Operator(op) => reduce(op, &mut values)?,
        }
    }
    let result = values.pop()?;
    if !values.is_empty() {
        return Err(error!(SyntaxError; "MISSING OPERATOR"));
    }
    trace!(expr, result, "evaluated");
    Ok(result)
}

fn splice(out: &mut String, name: &mut String, vars: &Var) -> Result<()> {
    if name.is_empty() {
        return Ok(());
    }
    let value = vars.fetch(name.as_str())?;
    if value < 0 {
        // The evaluator has no unary minus.
        out.push_str(&format!("(0-{}-1)", -(value + 1)));
    } else {
        out.push_str(&value.to_string());
    }
    name.clear();
    Ok(())
}

/// ## Replace variable names with their values
///
/// Names run until the next operator, parenthesis or whitespace.
/// A digit starts a literal unless it continues a name, so `X1`
/// is one variable. Older SIL ended a name at the first digit and
/// read `X1` as `X` followed by `1`.
pub fn rewrite(expr: &str, vars: &Var) -> Result<String> {
    let mut out = String::with_capacity(expr.len());
    let mut name = String::new();
    for ch in expr.chars() {
        let delimiter =
            ch.is_whitespace() || ch == '(' || ch == ')' || Operator::from_char(ch).is_some();
        if delimiter {
            splice(&mut out, &mut name, vars)?;
            out.push(ch);
        } else if ch.is_ascii_digit() && name.is_empty() {
            out.push(ch);
        } else {
            name.push(ch);
        }
    }
    splice(&mut out, &mut name, vars)?;
    Ok(out)
}
