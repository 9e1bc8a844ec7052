/*!
# Statements
*/

pub mod END {
    /*!
    ## `END`
    Immediately stop the program. Pending `GOSUB` returns are discarded.
    ```text
    10 PRINTLN "HELLO"
    20 END
    30 PRINTLN "THIS DOES NOT PRINT"
    ```
    */
}

pub mod GOSUB {
    /*!
    ## `GOSUB <line number>`
    Remember the line that follows this one and jump to the subroutine.
    `RET` comes back to the remembered line.
    ```text
    10 GOSUB 100
    20 PRINTLN "WORLD"
    90 END
    100 PRINT "HELLO "
    110 RET
    ```
    */
}

pub mod GOTO {
    /*!
    ## `GOTO <line number>`
    Continue at the given line. When no line has that number, execution
    continues at the next higher line.
    */
}

pub mod IF {
    /*!
    ## `IF <expression><relation><expression> THEN <action>`
    Run the action when the comparison holds. The action may be `PRINT`,
    `PRINTLN` or `GOTO`. Any other action is ignored.
    ```text
    10 INTEGER A
    20 LET A = 10
    30 IF A < 30 THEN PRINTLN A
    40 IF A ! 10 THEN GOTO 100
    ```
    */
}

pub mod INPUT {
    /*!
    ## `INPUT <variable>[,<variable>...]`
    Read one line of whole numbers separated by spaces, one for each
    variable. A line with too few or too many numbers is a
    `MISSING INPUT` error and no variable changes.
    */
}

pub mod INTEGER {
    /*!
    ## `INTEGER <variable>[,<variable>...]`
    Declare variables. Declaring a variable again resets it.
    */
}

pub mod LET {
    /*!
    ## `LET <variable>=<expression>`
    Assign the value of an expression to a declared variable.
    ```text
    10 INTEGER X
    20 LET X = 2 + 3 * 4
    30 PRINTLN X
    ```
    */
}

pub mod POP {
    /*!
    ## `POP <variable>`
    Remove the top of the operand stack and store it in a variable.
    Popping an empty stack is a `STACK UNDERFLOW` error.
    */
}

pub mod PRINT {
    /*!
    ## `PRINT <variable>|"<text>"|<expression>`
    Print a value or text without starting a new line.
    `PRINTLN` does the same and then starts a new line.
    ```text
    10 PRINT "ANSWER: "
    20 PRINTLN 6 * 7
    ```
    */
}

pub mod PUSH {
    /*!
    ## `PUSH <expression>`
    Push the value of an expression onto the operand stack.
    ```text
    10 INTEGER A, B
    20 PUSH 1
    30 PUSH 2
    40 POP A
    50 POP B
    60 PRINT A
    70 PRINTLN B
    ```
    */
}

pub mod RET {
    /*!
    ## `RET`
    Return from the most recent `GOSUB`. Without one it is a
    `RET WITHOUT GOSUB` error.
    */
}
