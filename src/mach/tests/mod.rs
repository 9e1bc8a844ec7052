use crate::lang::Listing;
use crate::mach::{Event, Runtime};

mod flow_test;

fn runtime(source: &str) -> Runtime {
    Runtime::from(&Listing::parse(source).unwrap())
}

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000, &[])
}

fn run_with_input(runtime: &mut Runtime, input: &[&str]) -> String {
    run_cycles(runtime, 5000, input)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize, input: &[&str]) -> String {
    let mut s = String::new();
    let mut input = input.iter();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped | Event::End => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
            Event::Input => match input.next() {
                Some(line) => {
                    runtime.enter(line);
                }
                None => {
                    s.push_str("?<no input>\n");
                    break;
                }
            },
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}
