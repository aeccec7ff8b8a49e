//! ID wrapper types.

mod entry;
mod id_macro;

pub use entry::EntryId;
