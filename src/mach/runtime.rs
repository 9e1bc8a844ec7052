use super::{evaluate, rewrite, Address, Integer, Opcode, Program, Relation, Stack, Var};
use crate::error;
use crate::lang::{split_then, Error, ErrorCode, LineNumber, Listing};
use std::rc::Rc;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Execution events
///
/// `Runtime::execute` returns after each event so the host can do
/// the console work in program order.

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Ran off the end of the program, or was already halted.
    Stopped,
    /// `END` was executed.
    End,
    /// The cycle budget ran out; call `execute` again.
    Running,
    Print(String),
    /// Waiting for `Runtime::enter` to supply a line.
    Input,
    Error(Error),
}

#[derive(Debug)]
enum State {
    Running,
    Input {
        line_number: LineNumber,
        names: Vec<Rc<str>>,
    },
    Halted,
}

/// ## Interpreter for one program run
///
/// All state is owned here. Running the same program again, or a
/// different one, needs a new `Runtime`.

#[derive(Debug)]
pub struct Runtime {
    program: Program,
    vars: Var,
    stack: Stack<Integer>,
    calls: Stack<Address>,
    pc: Address,
    current: Option<LineNumber>,
    state: State,
    entered: Option<String>,
    queued: Option<Event>,
    tron: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Program::default())
    }
}

impl From<&Listing> for Runtime {
    fn from(listing: &Listing) -> Runtime {
        Runtime::new(Program::new(listing))
    }
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime {
            program,
            vars: Var::new(),
            stack: Stack::new(ErrorCode::StackUnderflow, ""),
            calls: Stack::new(ErrorCode::CallStackUnderflow, ""),
            pc: 0,
            current: None,
            state: State::Running,
            entered: None,
            queued: None,
            tron: false,
        }
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn stack(&self) -> &Stack<Integer> {
        &self.stack
    }

    /// Print `[line]` before every line that runs.
    pub fn set_trace(&mut self, on: bool) {
        self.tron = on;
    }

    /// Supply the line an `Event::Input` asked for.
    /// Returns false when no input is pending.
    pub fn enter(&mut self, s: &str) -> bool {
        match self.state {
            State::Input { .. } => {
                self.entered = Some(s.trim_end_matches(&['\r', '\n'][..]).to_string());
                true
            }
            _ => false,
        }
    }

    /// Halt with `Break` in the line that ran last.
    pub fn interrupt(&mut self) {
        if let State::Halted = self.state {
            return;
        }
        let mut error = error!(Break);
        if let Some(line_number) = self.current {
            error = error.in_line_number(line_number);
        }
        self.queued = Some(self.fault(error));
    }

    pub fn is_halted(&self) -> bool {
        matches!(self.state, State::Halted)
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.queued.take() {
            return event;
        }
        if let State::Input { .. } = self.state {
            let entered = match self.entered.take() {
                Some(s) => s,
                None => return Event::Input,
            };
            if let State::Input { line_number, names } =
                std::mem::replace(&mut self.state, State::Running)
            {
                if let Err(error) = self.assign_input(&names, &entered) {
                    return self.fault(error.in_line_number(line_number));
                }
            }
        }
        for _ in 0..cycles {
            if let State::Halted = self.state {
                return Event::Stopped;
            }
            let (line_number, instruction) = match self.program.line(self.pc) {
                Some(line) => line,
                None => {
                    debug!(pc = self.pc, "end of program");
                    self.state = State::Halted;
                    return Event::Stopped;
                }
            };
            self.pc += 1;
            self.current = Some(line_number);
            let event = match self.dispatch(line_number, &instruction) {
                Ok(event) => event,
                Err(error) => Some(self.fault(error.in_line_number(line_number))),
            };
            if self.tron {
                self.queued = event;
                return Event::Print(format!("[{}]", line_number));
            }
            if let Some(event) = event {
                return event;
            }
        }
        Event::Running
    }

    fn fault(&mut self, error: Error) -> Event {
        debug!(%error, "halted");
        self.state = State::Halted;
        Event::Error(error)
    }

    fn dispatch(&mut self, line_number: LineNumber, instruction: &str) -> Result<Option<Event>> {
        let (opcode, operands) = Opcode::decode(instruction)?;
        debug!(line_number, %opcode, operands, "dispatch");
        match opcode {
            Opcode::Integer => self.r#integer(operands),
            Opcode::Input => self.r#input(line_number, operands),
            Opcode::Let => self.r#let(operands),
            Opcode::Push => self.r#push(operands),
            Opcode::Pop => self.r#pop(operands),
            Opcode::If => self.r#if(operands),
            Opcode::Goto => self.r#goto(operands),
            Opcode::Gosub => self.r#gosub(operands),
            Opcode::Ret => self.r#ret(),
            Opcode::Print | Opcode::Println => self.r#print(opcode, operands),
            Opcode::End => {
                self.state = State::Halted;
                Ok(Some(Event::End))
            }
        }
    }

    fn eval(&self, expr: &str) -> Result<Integer> {
        evaluate(&rewrite(expr, &self.vars)?)
    }

    fn jump(&mut self, line_number: LineNumber) {
        self.pc = self.program.address_of(line_number);
        debug!(line_number, pc = self.pc, "jump");
    }

    fn r#integer(&mut self, operands: &str) -> Result<Option<Event>> {
        for name in operands.split(',') {
            self.vars.declare(name)?;
        }
        Ok(None)
    }

    fn r#input(&mut self, line_number: LineNumber, operands: &str) -> Result<Option<Event>> {
        let mut names: Vec<Rc<str>> = vec![];
        for name in operands.split(',') {
            if !self.vars.is_declared(name) {
                return Err(error!(UndeclaredVariable; name));
            }
            names.push(name.into());
        }
        self.state = State::Input { line_number, names };
        Ok(Some(Event::Input))
    }

    /// Nothing is assigned unless every value is good.
    fn assign_input(&mut self, names: &[Rc<str>], entered: &str) -> Result<()> {
        let fields: Vec<&str> = entered.split_whitespace().collect();
        if fields.is_empty() || fields.len() != names.len() {
            return Err(error!(MissingInput; &format!(
                "EXPECTED {} VALUE{}",
                names.len(),
                if names.len() == 1 { "" } else { "S" }
            )));
        }
        let mut values: Vec<Integer> = vec![];
        for field in fields {
            match field.parse::<Integer>() {
                Ok(n) => values.push(n),
                Err(_) => return Err(error!(InvalidNumber; field)),
            }
        }
        for (name, value) in names.iter().zip(values) {
            self.vars.store(name, value)?;
        }
        Ok(())
    }

    fn r#let(&mut self, operands: &str) -> Result<Option<Event>> {
        let parts: Vec<&str> = operands.split('=').collect();
        let name = parts[0];
        if !self.vars.is_declared(name) {
            return Err(error!(UndeclaredVariable; name));
        }
        if parts.len() != 2 {
            return Err(error!(InvalidAssignment));
        }
        let expr = parts[1];
        let value = if !expr.is_empty() && expr.bytes().all(|b| b.is_ascii_digit()) {
            match expr.parse::<Integer>() {
                Ok(n) => n,
                Err(_) => return Err(error!(Overflow; expr)),
            }
        } else {
            self.eval(expr)?
        };
        self.vars.store(name, value)?;
        Ok(None)
    }

    fn r#push(&mut self, operands: &str) -> Result<Option<Event>> {
        let value = self.eval(operands)?;
        self.stack.push(value)?;
        Ok(None)
    }

    fn r#pop(&mut self, operands: &str) -> Result<Option<Event>> {
        if !self.vars.is_declared(operands) {
            return Err(error!(UndeclaredVariable; operands));
        }
        let value = self.stack.pop()?;
        self.vars.store(operands, value)?;
        Ok(None)
    }

    fn r#if(&mut self, operands: &str) -> Result<Option<Event>> {
        let (condition, action) = match split_then(operands) {
            Some((condition, action)) => (condition.trim(), action.trim()),
            None => return Err(error!(InvalidCondition; "MISSING THEN")),
        };
        let (relation, ch) = match Relation::find(condition) {
            Some(found) => found,
            None => return Err(error!(InvalidCondition; "MISSING RELATIONAL OPERATOR")),
        };
        let sides: Vec<&str> = condition.split(ch).collect();
        if sides.len() != 2 || sides.iter().any(|side| side.trim().is_empty()) {
            return Err(error!(InvalidCondition));
        }
        let lhs = self.eval(sides[0])?;
        let rhs = self.eval(sides[1])?;
        if !relation.holds(lhs, rhs) {
            return Ok(None);
        }
        let (opcode, operands) = match Opcode::decode(action) {
            Ok(decoded) => decoded,
            Err(_) => {
                debug!(action, "ignored THEN action");
                return Ok(None);
            }
        };
        match opcode {
            Opcode::Print | Opcode::Println => self.r#print(opcode, operands),
            Opcode::Goto => self.r#goto(operands),
            _ => {
                debug!(action, "ignored THEN action");
                Ok(None)
            }
        }
    }

    fn target(operands: &str) -> Result<LineNumber> {
        match operands.parse::<LineNumber>() {
            Ok(n) => Ok(n),
            Err(_) => Err(error!(SyntaxError; "INVALID LINE NUMBER")),
        }
    }

    fn r#goto(&mut self, operands: &str) -> Result<Option<Event>> {
        let line_number = Runtime::target(operands)?;
        self.jump(line_number);
        Ok(None)
    }

    fn r#gosub(&mut self, operands: &str) -> Result<Option<Event>> {
        let line_number = Runtime::target(operands)?;
        self.calls.push(self.pc)?;
        self.jump(line_number);
        Ok(None)
    }

    fn r#ret(&mut self) -> Result<Option<Event>> {
        self.pc = self.calls.pop()?;
        debug!(pc = self.pc, "return");
        Ok(None)
    }

    fn r#print(&mut self, opcode: Opcode, operands: &str) -> Result<Option<Event>> {
        let mut s = if operands.is_empty() {
            String::new()
        } else if self.vars.is_declared(operands) {
            self.vars.fetch(operands)?.to_string()
        } else if operands.starts_with('"') {
            operands.replace('"', "")
        } else {
            self.eval(operands)?.to_string()
        };
        if opcode == Opcode::Println {
            s.push('\n');
        }
        Ok(Some(Event::Print(s)))
    }
}
