use super::*;

#[test]
fn test_goto_skips_forward() {
    let mut r = runtime(
        r#"
10 GOTO 30
20 PRINTLN "SKIPPED"
30 PRINTLN "HERE"
"#,
    );
    assert_eq!(run(&mut r), "HERE\n");
}

#[test]
fn test_goto_does_not_resume_after_jump() {
    let mut r = runtime(
        r#"
10 INTEGER I
20 LET I=0
30 LET I=I+1
40 IF I<3 THEN GOTO 30
50 PRINTLN I
"#,
    );
    assert_eq!(run(&mut r), "3\n");
}

#[test]
fn test_goto_missing_line_continues_at_next() {
    let mut r = runtime(
        r#"
10 GOTO 25
20 PRINTLN 20
30 PRINTLN 30
"#,
    );
    assert_eq!(run(&mut r), "30\n");
}

#[test]
fn test_goto_past_end() {
    let mut r = runtime("10 GOTO 1000\n20 PRINTLN 20");
    assert_eq!(run(&mut r), "");
    assert_eq!(r.execute(1), Event::Stopped);
}

#[test]
fn test_gosub_returns_to_next_entry() {
    let mut r = runtime(
        r#"
10 GOSUB 100
20 PRINTLN "WORLD"
90 END
100 PRINT "HELLO "
110 RET
"#,
    );
    assert_eq!(run(&mut r), "HELLO WORLD\n");
}

#[test]
fn test_nested_gosub() {
    let mut r = runtime(
        r#"
10 GOSUB 100
20 PRINTLN "DONE"
30 END
100 PRINT "A"
110 GOSUB 200
120 PRINT "C"
130 RET
200 PRINT "B"
210 RET
"#,
    );
    assert_eq!(run(&mut r), "ABCDONE\n");
}

#[test]
fn test_recursive_gosub_counts_down() {
    let mut r = runtime(
        r#"
10 INTEGER N
20 LET N=5
30 GOSUB 100
40 END
100 IF N=0 THEN GOTO 140
110 PRINT N
120 LET N=N-1
130 GOSUB 100
140 RET
"#,
    );
    assert_eq!(run(&mut r), "54321");
}

#[test]
fn test_gosub_on_last_line() {
    let mut r = runtime("10 GOTO 30\n20 RET\n30 GOSUB 20");
    assert_eq!(run(&mut r), "");
}

#[test]
fn test_ret_without_gosub() {
    let mut r = runtime("10 PRINTLN 1\n20 RET\n30 PRINTLN 3");
    assert_eq!(run(&mut r), "1\n?RET WITHOUT GOSUB IN 20\n");
}

#[test]
fn test_runaway_gosub() {
    let mut r = runtime("10 GOSUB 10");
    assert_eq!(
        run_cycles(&mut r, 100_000, &[]),
        "?OUT OF MEMORY IN 10; STACK OVERFLOW\n"
    );
}

#[test]
fn test_end_stops_everything() {
    let mut r = runtime(
        r#"
10 GOSUB 100
20 PRINTLN "NOT REACHED"
100 PRINTLN "SUB"
110 END
120 RET
"#,
    );
    assert_eq!(r.execute(100), Event::Print("SUB\n".to_string()));
    assert_eq!(r.execute(100), Event::End);
    assert!(r.is_halted());
    assert_eq!(r.execute(100), Event::Stopped);
}

#[test]
fn test_empty_program() {
    let mut r = Runtime::default();
    assert_eq!(r.execute(100), Event::Stopped);
}

#[test]
fn test_cycles_exhausted() {
    let mut r = runtime("10 GOTO 10");
    assert_eq!(r.execute(10), Event::Running);
    assert_eq!(r.execute(10), Event::Running);
    r.interrupt();
    assert_eq!(
        r.execute(10),
        Event::Error(crate::error!(Break, 10))
    );
    assert_eq!(r.execute(10), Event::Stopped);
}

#[test]
fn test_interrupt_names_last_line_run() {
    let mut r = runtime("10 INTEGER X\n20 LET X = 1\n30 GOTO 10");
    assert_eq!(r.execute(2), Event::Running);
    r.interrupt();
    assert_eq!(r.execute(10), Event::Error(crate::error!(Break, 20)));

    let mut r = runtime("10 INTEGER X\n20 LET X = 1");
    assert_eq!(r.execute(2), Event::Running);
    r.interrupt();
    assert_eq!(r.execute(10), Event::Error(crate::error!(Break, 20)));

    let mut r = runtime("10 END");
    r.interrupt();
    assert_eq!(r.execute(10), Event::Error(crate::error!(Break)));
}

#[test]
fn test_if_print() {
    let source = r#"
10 INTEGER X
20 INPUT X
30 IF X<5 THEN PRINTLN X
40 PRINTLN "NEXT"
"#;
    let mut r = runtime(source);
    assert_eq!(run_with_input(&mut r, &["3"]), "3\nNEXT\n");
    let mut r = runtime(source);
    assert_eq!(run_with_input(&mut r, &["7"]), "NEXT\n");
}

#[test]
fn test_if_relations() {
    let mut r = runtime(
        r#"
10 INTEGER A,B
20 LET A=2
30 LET B=3
40 IF A>B THEN PRINT "GT"
50 IF A=B THEN PRINT "EQ"
60 IF A!B THEN PRINT "NE"
70 IF A+1=B THEN PRINT "SUM"
80 IF A*B>B+A THEN PRINT "MUL"
"#,
    );
    assert_eq!(run(&mut r), "NESUMMUL");
}

#[test]
fn test_if_first_relation_wins() {
    // `<=` is not an operator; the `=` ends up in the right side
    let mut r = runtime("10 INTEGER X\n20 LET X=1\n30 IF X<=5 THEN PRINTLN X");
    assert_eq!(run(&mut r), "?UNDECLARED VARIABLE IN 30; =5\n");
}

#[test]
fn test_if_unsupported_action_ignored() {
    let mut r = runtime(
        r#"
10 INTEGER X
20 IF 1=1 THEN LET X=5
30 IF 1=1 THEN GOSUB 100
40 IF 1=1 THEN BOGUS
50 PRINTLN "OK"
60 END
100 PRINTLN "SUB"
110 RET
"#,
    );
    assert_eq!(run(&mut r), "OK\n");
}

#[test]
fn test_invalid_conditions() {
    let mut r = runtime("10 IF 1 THEN PRINTLN 1");
    assert_eq!(
        run(&mut r),
        "?INVALID CONDITION IN 10; MISSING RELATIONAL OPERATOR\n"
    );
    let mut r = runtime("10 IF 1<2<3 THEN PRINTLN 1");
    assert_eq!(run(&mut r), "?INVALID CONDITION IN 10\n");
    let mut r = runtime("10 IF 1< THEN PRINTLN 1");
    assert_eq!(run(&mut r), "?INVALID CONDITION IN 10\n");
    let mut r = runtime("10 IF 1<2 PRINTLN 1");
    assert_eq!(run(&mut r), "?INVALID CONDITION IN 10; MISSING THEN\n");
}

#[test]
fn test_syntax_error_is_fatal() {
    let mut r = runtime("10 PRINTLN 1\n20 REM COMMENT\n30 PRINTLN 3");
    assert_eq!(run(&mut r), "1\n?SYNTAX ERROR IN 20; REM\n");
}

#[test]
fn test_bad_goto_target() {
    let mut r = runtime("10 GOTO X");
    assert_eq!(run(&mut r), "?SYNTAX ERROR IN 10; INVALID LINE NUMBER\n");
}

#[test]
fn test_trace() {
    let mut r = runtime("10 PRINTLN 1\n20 GOTO 40\n30 PRINTLN 3\n40 END");
    r.set_trace(true);
    assert_eq!(run(&mut r), "[10]1\n[20][40]");
}
