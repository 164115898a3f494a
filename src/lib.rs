//! Minimize four-variable Boolean functions with Karnaugh maps and render them as Verilog.
//!
//! A function is defined by its [minterms](Minterm) (the rows of the truth table where it is true) and by
//! optional don't-care terms (rows where its value is not constrained). Both are [sets of minterms](MintermSet)
//! over the variables A, B, C and D, where A is the most significant bit of the minterm index.
//!
//! ```
//! use kmap::{Function, Minterm, MintermSet};
//! # use kmap::KmapError;
//! # fn main() -> Result<(), KmapError> {
//!
//! // Raw values are validated: they must be in [0,15] and the two sets must be disjoint
//! let function = Function::new(vec![5, 6, 9, 13, 15], vec![1, 7, 14])?;
//! assert!(Function::new(vec![5, 16], Vec::<i64>::new()).is_err());
//! assert!(Function::new(vec![5, 6], vec![6]).is_err());
//!
//! // Sets of minterms can also be parsed
//! let minterms: MintermSet = "0, 2, 8, 10".parse()?;
//! assert!(minterms.contains(Minterm::new(8)?));
//! # Ok(())
//! # }
//! ```
//!
//! # The Karnaugh map
//!
//! The [Grid] places each minterm on a 4x4 map where rows are indexed by AB and columns by CD, both following
//! the reflected binary sequence 00, 01, 11, 10. Neighbouring cells differ by a single variable, and the
//! map wraps around its edges.
//!
//! A [Grouping] is a rectangle of 1, 2, 4 or 8 cells which are all true or don't-care.
//! [Groupings::enumerate] lists all of them, and each grouping gives a product [Term] containing
//! the variables which take the same value in all covered minterms.
//!
//! ```
//! use kmap::{Function, Groupings};
//! # use kmap::KmapError;
//! # fn main() -> Result<(), KmapError> {
//!
//! let function = Function::new(vec![0, 2, 8, 10], Vec::<i64>::new())?;
//! let grid = function.grid();
//! println!("{}", grid);
//!
//! for (_, grouping) in Groupings::enumerate(&grid).iter() {
//!     println!("{} => {}", grouping, grouping.term());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Minimization
//!
//! The [cover selection](select_cover) picks the essential groupings, then completes them with the smallest
//! number of additional groupings. Among covers of the same size, the one with the fewest literals wins.
//! The result is a [sum of products](SopExpr) with sorted terms.
//!
//! ```
//! use kmap::minimize;
//! # use kmap::KmapError;
//! # fn main() -> Result<(), KmapError> {
//!
//! let result = minimize(&[1, 5, 7, 9, 11, 13, 15], &[])?;
//! assert_eq!(result.to_string(), "AD + BD + C'D");
//!
//! // Degenerate cases give constants
//! assert_eq!(minimize(&[], &[])?.to_string(), "0");
//! let high: Vec<u32> = (8..16).collect();
//! assert_eq!(minimize(&[0, 1, 2, 3, 4, 5, 6, 7], &high)?.to_string(), "1");
//! # Ok(())
//! # }
//! ```
//!
//! # Verilog
//!
//! A sum of products (computed or parsed from a string) can be rendered as a Verilog module
//! with a single continuous assignment. The [RenderConfig] selects the names of the module and of its output.
//!
//! ```
//! use kmap::{minimize, RenderConfig};
//! # use kmap::KmapError;
//! # fn main() -> Result<(), KmapError> {
//!
//! let result = minimize(&[0, 2, 8, 10], &[])?;
//! let cfg = RenderConfig::new("corners", "out")?;
//! let code = result.verilog(&cfg);
//! assert!(code.contains("assign out = (~B & ~D);"));
//! # Ok(())
//! # }
//! ```

mod cover;
mod error;
mod grid;
mod grouping;
mod minterm;
mod parse;
mod sop;
mod term;
mod verilog;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use cover::{select_cover, Cover};
pub use error::{KmapError, ParseError};
pub use grid::{inverse, position, Cell, Coord, Grid, GRAY_CODE, SIDE};
pub use grouping::{Grouping, Groupings, Shape, SHAPES};
pub use minterm::{Minterm, MintermSet, Variable, MINTERM_COUNT, VARIABLES, VARIABLE_COUNT};
pub use parse::parse_minterm_list;
pub use sop::{minimize, Function, Minimized, SopExpr};
pub use term::{Literal, Term};
pub use verilog::{
    render_verilog, render_verilog_str, RenderConfig, VerilogModule, DEFAULT_RENDER_CFG,
};
