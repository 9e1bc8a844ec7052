/*!
# Expressions and Variables

SIL has one type of data: the signed 32-bit integer. Variable names
start with a letter, `_` or `$`, followed by letters, digits, `_` or `$`.

```text
10 INTEGER COUNT, $TOTAL, _tmp2
```

A declared variable that was never assigned holds -2147483648.
Reading it is not an error.

Expressions use `+`, `-`, `*`, `/` and parentheses. Multiplication
and division are done before addition and subtraction; otherwise work
proceeds left to right. Division discards the remainder.

```text
PRINTLN 2 + 3 * 4
 14
PRINTLN (2 + 3) * 4
 20
PRINTLN 7 / 2
 3
```

There is no unary minus. Write `0-5` for negative five.
A result that doesn't fit in 32 bits is an `OVERFLOW` error and
dividing by zero is a `DIVISION BY ZERO` error.

## Conditions

`IF` compares two expressions with one of four single-character
operators. The first of `<`, `>`, `=`, `!` present in the condition
is the one used, so there is no `<=` or `>=`.

| Operator | True when |
|----------|-----------|
| `<` | left is less than right |
| `>` | left is greater than right |
| `=` | both are equal |
| `!` | they differ |

*/
