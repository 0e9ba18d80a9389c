// #![warn(clippy::pedantic)]

pub mod circuit;
pub mod common;
pub mod generate;
pub mod logging;
pub mod oracle;
pub mod register;
pub mod search;
pub mod util;
mod instrument;

pub use circuit::{Circuit, Gate, Toffoli};
pub use generate::{generate, Generator};
pub use oracle::{check, fredkin, verify, Mismatch, Verdict};
pub use search::{enumerate, search, SearchConfig, SearchOutcome};
