//! Compile time choice between rendering a value and leaving it opaque.
//!
//! The assertion macros call `(&Render(&value)).render()` with both traits in
//! scope. Method resolution prefers [`RenderDebug`], which only applies when
//! the value is [`Debug`], and falls back to [`RenderOpaque`] through one more
//! auto-ref otherwise. This only works on concrete types, so it is used from
//! macros and not from generic functions.

use std::fmt::Debug;

#[doc(hidden)]
pub struct Render<'v, T: ?Sized>(pub &'v T);

#[doc(hidden)]
pub trait RenderDebug {
    fn render(&self) -> Option<String>;
}

impl<T: Debug + ?Sized> RenderDebug for Render<'_, T> {
    fn render(&self) -> Option<String> {
        Some(format!("{:?}", self.0))
    }
}

#[doc(hidden)]
pub trait RenderOpaque {
    fn render(&self) -> Option<String>;
}

impl<T: ?Sized> RenderOpaque for &Render<'_, T> {
    fn render(&self) -> Option<String> {
        None
    }
}
