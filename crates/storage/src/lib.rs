#![forbid(unsafe_code)]

pub mod json;
pub mod keys;
pub mod repository;
pub mod sqlite;
