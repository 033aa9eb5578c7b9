//! The multi subject harness.
//!
//! A [`MultiTest`] runs every registered test once per registered
//! constructor, each time against freshly constructed subjects.

pub use multi_test::*;

/// Name of the implicit constructor enabled by
/// [`MultiTest::with_default_constructor`].
pub const DEFAULT_CONSTRUCTOR_NAME: &str = "Default constructor";
