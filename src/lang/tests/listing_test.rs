use crate::lang::*;

#[test]
fn test_lines_are_ordered() {
    let listing = Listing::parse("30 END\n10 INTEGER X\n\n20 LET X = 1\n").unwrap();
    let numbers: Vec<LineNumber> = listing.lines().map(|l| l.number()).collect();
    assert_eq!(numbers, [10, 20, 30]);
    assert_eq!(listing.to_string(), "10 INTEGER X\n20 LET X=1\n30 END\n");
}

#[test]
fn test_replaces_duplicate() {
    let listing = Listing::parse("10 PRINTLN 1\n10 PRINTLN 2").unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing.get(10).unwrap().instruction(), "PRINTLN 2");
}

#[test]
fn test_reports_file_line() {
    let e = Listing::parse("10 END\n\nX END").unwrap_err();
    assert_eq!(
        e.to_string(),
        "SYNTAX ERROR; INVALID LINE NUMBER IN LINE 3 OF THE FILE"
    );
}
