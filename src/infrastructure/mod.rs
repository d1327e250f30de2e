//! Low-level building blocks: string hashing and the open-addressed table

pub mod hash;
pub mod hash_table;
