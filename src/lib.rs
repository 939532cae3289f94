//! Fluent pattern matching over a single subject.
//!
//! ```
//! use fluent_pattern_match::{pattern_match, Animal, Cat, Dog};
//!
//! let animal = Animal::from(Cat::new("Sally"));
//! let description = pattern_match(&animal)
//!     .returns::<String>()?
//!     .case(|dog: &Dog| format!("a dog called {}", dog.name))
//!     .case(|cat: &Cat| format!("a cat called {}", cat.name))
//!     .otherwise(|a| format!("an animal called {}", a.name()))
//!     .result_or_default();
//! assert_eq!(description, "a cat called Sally");
//! # Ok::<(), fluent_pattern_match::MatchError>(())
//! ```
pub mod errors;
pub mod context;
pub mod narrow;
pub mod animal; // example subject hierarchy, also drives the CLI

pub use animal::{describe, describe_strict, Animal, Cat, Dog, Skunk};
pub use context::{pattern_match, Matchable, PatternMatch};
pub use errors::{MatchError, Result};
pub use narrow::Narrow;
