//! UI abstraction layer
//!
//! Backend-agnostic traits for prompting and printing, so the interactive
//! session can run against dialoguer and stdout in the binary and against
//! scripted doubles in tests.
//!
//! - **`UserInput`** - single choice, multi choice and confirmation prompts
//! - **`OutputWriter`** - results and notices with a severity level
//!
//! The scripted doubles in `mock` are compiled for unit tests and when the
//! `testing` feature is enabled.

pub mod input;
#[cfg(any(test, feature = "testing"))]
pub mod mock;
pub mod output;

pub use input::{DialoguerInput, InputError, UserInput};
#[cfg(any(test, feature = "testing"))]
pub use mock::{BufferedWriter, ScriptedInput, ScriptedResponse};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
