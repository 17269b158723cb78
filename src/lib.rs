#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

pub mod a_list;
mod collection;
pub mod d_list;
mod error;
pub mod order;

pub use a_list::{ArrayCollection, DEFAULT_CAPACITY};
pub use collection::Collection;
pub use d_list::{Entry, LinkedCollection};
pub use error::CollectionError;
pub use order::Orderable;
