#![doc = include_str!("../README.md")]

pub mod case;
pub mod error;
pub mod fasta;
pub mod ids;
pub mod modes;
pub mod record;
pub mod sample;
pub mod select;

pub use crate::{
    case::Case,
    error::{Error, Result},
    record::Record,
    sample::Sampler,
    select::Selector,
};
