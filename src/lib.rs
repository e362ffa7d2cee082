//! nnago - reading-time estimation for the nnago blog.
//!
//! The core is [`reading::ReadingTimeEstimator`]: word count divided by an
//! assumed reading speed (240 words per minute by default), rounded up.
//! Around it sit front matter parsing, article loading and the `nnago.toml`
//! configuration used by the `nnago` binary.

pub mod article;
pub mod cli;
pub mod config;
pub mod front_matter;
pub mod logger;
pub mod reading;

pub use reading::{ReadingTime, ReadingTimeError, ReadingTimeEstimator, Tokenization};
