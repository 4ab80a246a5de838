//! Checklist model and loading

pub mod builtin;
pub mod model;

pub use builtin::builtin;
pub use model::{Checklist, Item, ItemDetails, Pairs, Phase, Priority, Status, TimeEstimate};
