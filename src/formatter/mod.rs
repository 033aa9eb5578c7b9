//! Rendering results for humans.
//!
//! [`pretty::PrettyFormatter`] writes single results and whole multi test
//! summaries to any [`std::io::Write`] target, colored when the target is a
//! terminal or when asked to via [`color::ColorSetting`].

pub mod color;
pub mod pretty;
