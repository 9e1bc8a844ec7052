/*!
# Introductory Tutorial for SIL

SIL programs are plain text files. Every line starts with a line number
followed by exactly one instruction. Run one or more programs by naming
them on the command line.

<pre><code>&nbsp;$ sil hello.sil
&nbsp;Hello World
</code></pre>

Here is `hello.sil`.

```text
10 PRINTLN "Hello World"
20 END
```

Line numbers decide the order lines run in, not their order in the file.
Gaps are fine and encouraged; number by tens so you have room to insert
lines later. Keywords may be typed in any case. Variable names may not:
`x` and `X` are different variables.

Every variable holds a 32-bit signed integer and must be declared before
it is used.

```text
10 INTEGER A, B
20 INPUT A, B
30 PRINT "THE SUM IS "
40 PRINTLN A + B
```

`INPUT` waits for one line with exactly as many whole numbers as it
names, separated by spaces.

<pre><code>&nbsp;$ sil sum.sil
&nbsp;3 4
&nbsp;THE SUM IS 7
</code></pre>

Loops are made from `IF` and `GOTO`.

```text
10 INTEGER I
20 LET I = 1
30 PRINTLN I
40 LET I = I + 1
50 IF I < 4 THEN GOTO 30
```

Any error stops the program and reports the line it happened on.

<pre><code>&nbsp;?UNDECLARED VARIABLE IN 20; Y
</code></pre>

Stop a running program with CTRL-C. Pass `--trace` to see each line
number as it runs, or `--verbose` for debug logging on stderr.

*/
