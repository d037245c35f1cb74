//! Module for reading and writing networks, and parsing function term formulas
pub mod formula_parse;
pub mod json;
