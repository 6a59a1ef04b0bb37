//! Shared test harness for the navi workspace.
//!
//! Tests build an in-memory SQLite database with [`TestBuilder`], insert fixtures through the
//! helpers on [`TestContext`], then hand the connection to the code under test.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::date, TestBuilder, TestContext, TestError};
}
