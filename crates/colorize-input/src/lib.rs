//! Line-oriented input helpers.
//!
//! Small readers that turn an input source into lines of text or a byte
//! matrix, one row per line.
//!
//! ```
//! use colorize_input::{read_byte_matrix, read_lines};
//!
//! let lines = read_lines("first\r\nsecond\n".as_bytes()).unwrap();
//! assert_eq!(lines, vec!["first", "second"]);
//!
//! let grid = read_byte_matrix("#.\n.#".as_bytes()).unwrap();
//! assert_eq!(grid[1][1], b'#');
//! ```

mod error;
mod lines;

pub use error::InputError;
pub use lines::{read_byte_matrix, read_file_lines, read_lines};
