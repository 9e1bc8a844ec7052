use sil::lang::Listing;
use sil::mach::Runtime;
use sil::term::drive;
use std::sync::atomic::AtomicBool;

/// Runs `source` to completion, answering each `INPUT` with the next
/// entry of `input`. Output and any error end up in one string.
pub fn exec(source: &str, input: &[&str]) -> String {
    let listing = match Listing::parse(source) {
        Ok(listing) => listing,
        Err(error) => return format!("?{}\n", error),
    };
    let mut runtime = Runtime::from(&listing);
    let mut out: Vec<u8> = vec![];
    let mut input = input.iter().map(|s| s.to_string());
    let interrupted = AtomicBool::new(false);
    let result = drive(
        &mut runtime,
        5000,
        &mut out,
        || Ok(input.next()),
        &interrupted,
    );
    let mut s = String::from_utf8(out).unwrap();
    if let Err(error) = result {
        s.push_str(&format!("?{}\n", error));
    }
    s
}
