//! A registry of days, each pairing an input with named exercises.
//!
//! ```
//! use colorize_exercises::{Day, Exercise, Registry};
//!
//! fn count_lines(input: &mut dyn std::io::Read) -> anyhow::Result<serde_json::Value> {
//!     Ok(colorize_input::read_lines(input)?.len().into())
//! }
//!
//! let registry = Registry::new();
//! registry
//!     .register("day01", Day::new("inputs/day01.txt").exercise("part1", Exercise::new("count lines", count_lines)))
//!     .unwrap();
//!
//! let answer = registry.run("day01", "part1", &mut "a\nb\n".as_bytes()).unwrap();
//! assert_eq!(answer, 2);
//! ```

mod error;
mod registry;

pub use error::RegistryError;
pub use registry::{Day, Exercise, ExerciseImplementation, Registry};
