//! Probability building blocks for MLN weight handling.
//!
//! Markov Logic Networks attach a log-odds weight to each logical formula.
//! This crate hosts the conversions between probability space and weight
//! space used when moving formulas between the two representations:
//! - `logit`: probability -> log-odds, in `f64` and arbitrary-precision
//!   decimal forms
//! - `logistic`: log-odds -> probability

pub mod weights;

pub use weights::{logistic, logit, logit_decimal};
