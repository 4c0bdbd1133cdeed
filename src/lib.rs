/*!

A `print` in the style of Python's, for any mix of Rust values.

```
use pythonic_print::{pformat, pprint};

pprint!("hello", "world", 42, 3.14).unwrap();               // hello world 42 3.14
pprint!(("tuples", "inside", ("tuples",))).unwrap();        // (tuples, inside, (tuples))
assert_eq!(pformat!([1, 2, 3], vec![(1, 'a')]), "{1, 2, 3} {(1, a)}");
```

Each argument is rendered by the strategy its type is classified under (see `strategy`): text for
types with a native textual form, `{...}` for arrays and containers, `(...)` for tuples, and `[[X]]`
for anything else. The choice is made per type at compile time.

*/

mod aggregate;
mod error;
mod format;
mod print;
mod printable;
mod scalars;
mod sequence;
mod strategy;
#[doc(hidden)]
pub mod dispatch;
pub mod logging;

pub use error::{PrintError, Result};
pub use format::{DisplayForm, Formatter};
pub use print::{print, print_to, render, render_line, Arguments};
pub use printable::{Direct, Opaque, Pretty, Printable, OPAQUE_TOKEN};
pub use sequence::render_elements;
pub use strategy::{classify, Strategy};
