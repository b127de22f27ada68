#![forbid(unsafe_code)]
//! lsr — a BSD-flavored `ls` with a width-fitted multi-column layout.

pub mod cli;
pub mod entry;
pub mod error;
pub mod fmt;
pub mod owner;
pub mod sort;
pub mod terminal;
pub mod traverse;
pub mod walk;
