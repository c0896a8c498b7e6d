/*!
# Introductory Tutorial for bf-vm

A program is a string of bytes. Eight of them are instructions and
everything else is commentary, so programs may be annotated freely.

| Byte | Effect |
|------|--------|
| `>`  | Move the data pointer one cell right. |
| `<`  | Move the data pointer one cell left. |
| `+`  | Add one to the current cell, 255 wraps to 0. |
| `-`  | Subtract one from the current cell, 0 wraps to 255. |
| `.`  | Append the current cell to the output. |
| `,`  | Read one input byte into the current cell. |
| `[`  | If the current cell is 0, continue after the matching `]`. |
| `]`  | If the current cell is not 0, continue after the matching `[`. |

Save the following as `hello.b` and run it.

<pre><code>&nbsp;  ++++++++[>++++++++<-]>+. print A
&nbsp;$ bfvm hello.b
&nbsp;  A
</code></pre>

The tape starts as 30000 zero cells with the data pointer on the
first one. Walking off either end is an error; there is no wrap-around
for the pointer.

<pre><code>&nbsp;$ echo '<' > left.b
&nbsp;$ bfvm left.b
&nbsp;  <b>OUT OF BOUNDS AT 0 (DP 0)</b>
</code></pre>

Brackets are matched before the first instruction runs. A program with
an unmatched bracket never touches the tape.

<pre><code>&nbsp;$ echo '+++[>+.' > open.b
&nbsp;$ bfvm open.b
&nbsp;  <b>UNMATCHED [ AT 3</b>
</code></pre>

Input comes from `--input` or `--input-file`. Once it runs out, `,`
stores 0, so the classic echo loop ends by itself. `--eof unchanged`
leaves the cell alone instead.

<pre><code>&nbsp;$ echo '+[,.]' > echo.b
&nbsp;$ bfvm echo.b --input hello
&nbsp;  hello
</code></pre>

## Stepping

`--step` stops before every instruction and shows where it is.
Press ENTER to run one instruction, `c` to continue, `l` to list the
code around the instruction pointer, or `q` to halt. While continuing,
CTRL-C returns to the prompt.

<pre><code>&nbsp;$ bfvm hello.b --step
&nbsp;  ip 0 '+'  dp 0  cell 0
&nbsp;> <i>{ENTER}</i>
&nbsp;  ip 1 '+'  dp 0  cell 1
&nbsp;> q
&nbsp;  <b>HALTED AT 1 (DP 0)</b>
</code></pre>

Runs of `+`, `-`, `>` and `<` execute in one go, and `[-]` or `[+]`
clears the cell without looping. Neither changes what a program does.
While stepping, runs are taken one instruction at a time; a clear idiom
is still a single step and the next stop is just after its `]`.
`--timeout` does not cost the run-folding speedup.

*/
