//! Infrastructure layer for the products module.

pub mod storage;
