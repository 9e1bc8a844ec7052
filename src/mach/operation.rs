use super::Integer;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Binary arithmetic
///
/// All arithmetic is checked. Division truncates toward zero.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    pub fn apply(self, lhs: Integer, rhs: Integer) -> Result<Integer> {
        match self {
            Operator::Add => Operation::sum(lhs, rhs),
            Operator::Subtract => Operation::subtract(lhs, rhs),
            Operator::Multiply => Operation::multiply(lhs, rhs),
            Operator::Divide => Operation::divide(lhs, rhs),
        }
    }
}

/// ## Comparison in `IF`
///
/// Only single characters are recognized. When a condition holds
/// more than one, the first of `< > = !` found in that order wins.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Relation {
    Less,
    Greater,
    Equal,
    NotEqual,
}

impl Relation {
    pub fn find(condition: &str) -> Option<(Relation, char)> {
        [
            ('<', Relation::Less),
            ('>', Relation::Greater),
            ('=', Relation::Equal),
            ('!', Relation::NotEqual),
        ]
        .iter()
        .find(|(ch, _)| condition.contains(*ch))
        .map(|&(ch, rel)| (rel, ch))
    }

    pub fn holds(self, lhs: Integer, rhs: Integer) -> bool {
        match self {
            Relation::Less => lhs < rhs,
            Relation::Greater => lhs > rhs,
            Relation::Equal => lhs == rhs,
            Relation::NotEqual => lhs != rhs,
        }
    }
}

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Integer, rhs: Integer) -> Result<Integer> {
        match lhs.checked_add(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn subtract(lhs: Integer, rhs: Integer) -> Result<Integer> {
        match lhs.checked_sub(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn multiply(lhs: Integer, rhs: Integer) -> Result<Integer> {
        match lhs.checked_mul(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn divide(lhs: Integer, rhs: Integer) -> Result<Integer> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_truncating_division() {
        assert_eq!(Operation::divide(7, 2).unwrap(), 3);
        assert_eq!(Operation::divide(-7, 2).unwrap(), -3);
        assert_eq!(Operation::divide(7, -2).unwrap(), -3);
    }

    #[test]
    fn test_divide_errors() {
        assert!(Operation::divide(5, 0)
            .unwrap_err()
            .is(ErrorCode::DivisionByZero));
        assert!(Operation::divide(Integer::min_value(), -1)
            .unwrap_err()
            .is(ErrorCode::Overflow));
    }

    #[test]
    fn test_overflow() {
        assert!(Operation::sum(Integer::max_value(), 1).is_err());
        assert!(Operation::subtract(Integer::min_value(), 1).is_err());
        assert!(Operation::multiply(65536, 65536).is_err());
    }

    #[test]
    fn test_relation_priority() {
        assert_eq!(Relation::find("X<5"), Some((Relation::Less, '<')));
        assert_eq!(Relation::find("X<=5"), Some((Relation::Less, '<')));
        assert_eq!(Relation::find("X=>5"), Some((Relation::Greater, '>')));
        assert_eq!(Relation::find("X!5"), Some((Relation::NotEqual, '!')));
        assert_eq!(Relation::find("X5"), None);
    }

    #[test]
    fn test_relation_holds() {
        assert!(Relation::Less.holds(3, 5));
        assert!(!Relation::Greater.holds(3, 5));
        assert!(Relation::Equal.holds(5, 5));
        assert!(Relation::NotEqual.holds(4, 5));
    }
}
