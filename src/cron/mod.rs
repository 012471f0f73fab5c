//! Parser entry points
//!
//! ```
//! use cronix::{CronMode, CronParser};
//!
//! let mut parser = CronParser::with_mode(CronMode::Quartz);
//! let expression = parser.parse("0 5 4 * * ? *").unwrap();
//! assert_eq!(expression.day_of_week().unwrap().value(), "?");
//! assert_eq!(expression.value(), "0 5 4 * * ? *");
//! ```

mod input;
mod options;
mod parser;

pub use input::{CronInput, CronRecord};
pub use options::ParserOptions;
pub use parser::{CronParser, ParseFailure};
