//! Flutter bridge crate for the InterLexi Arabic core.

pub mod api;
