/*!
Tools for building a formula.

Formulas are read from strings by a recursive descent parser over the grammar:

```text
Formula   := Atom | "~" Formula | "(" Expr ")"
Expr      := Formula ( "&" Formula )+
           | Formula ( "|" Formula )+
           | Formula "->" Formula
           | Formula "<->" Formula
           | Formula
Atom      := Letter Digit*
```

There is no implicit precedence.
So, a chain may not mix `&` and `|` without parentheses, and `->` and `<->` are strictly binary.
Whitespace between tokens is skipped.

Chains are built with the splicing [constructors](crate::structures::formula::Formula::and) of a formula, and so `(a&(b&c))` is read to the same formula as `(a&b&c)`.

# Examples

```rust
# use otter_cnf::builder::parse;
# use otter_cnf::structures::formula::Formula;
let formula = parse("(~e|~(a->b)|~((b<->~a)|~(v3&e)))").unwrap();
assert_eq!(formula.atoms(), vec!["e", "a", "b", "v3"]);

let nested = parse("(a&(b&c))").unwrap();
assert_eq!(nested, parse("(a&b&c)").unwrap());

assert!(parse("(a&b|c)").is_err());
```

The nesting depth of a formula is bounded, by default at [DEFAULT_DEPTH_LIMIT](crate::config::DEFAULT_DEPTH_LIMIT), and a formula nested too deeply is rejected with a [ResourceError](crate::types::err::ResourceError).
*/

mod parse;
pub use parse::{parse, parse_with_depth_limit};
