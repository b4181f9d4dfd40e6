// src/data_analysis/mod.rs

pub mod derivative;
pub mod kinematics;
