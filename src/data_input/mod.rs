// src/data_input/mod.rs

pub mod channel_set;
pub mod log_parser;
pub mod log_schema;
