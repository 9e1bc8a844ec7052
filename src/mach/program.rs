use super::Address;
use crate::lang::{LineNumber, Listing};
use std::rc::Rc;

/// ## The line table
///
/// Lines in ascending line-number order, addressed by index.
/// An address equal to `len()` is one past the last line; running
/// there ends the program.

#[derive(Debug, Clone, Default)]
pub struct Program {
    lines: Vec<(LineNumber, Rc<str>)>,
}

impl Program {
    pub fn new(listing: &Listing) -> Program {
        Program {
            lines: listing
                .lines()
                .map(|line| (line.number(), Rc::from(line.instruction())))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn first(&self) -> Option<LineNumber> {
        self.lines.first().map(|(number, _)| *number)
    }

    pub fn last(&self) -> Option<LineNumber> {
        self.lines.last().map(|(number, _)| *number)
    }

    pub fn line(&self, addr: Address) -> Option<(LineNumber, Rc<str>)> {
        self.lines
            .get(addr)
            .map(|(number, instruction)| (*number, instruction.clone()))
    }

    /// Address of the first line numbered `line_number` or higher.
    pub fn address_of(&self, line_number: LineNumber) -> Address {
        self.lines.partition_point(|(number, _)| *number < line_number)
    }
}

impl From<&Listing> for Program {
    fn from(listing: &Listing) -> Program {
        Program::new(listing)
    }
}
