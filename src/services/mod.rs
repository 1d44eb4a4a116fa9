// Service module exports
// Navigation engine, value normalization and the collaborators around them

pub mod error;
pub mod navigation;
pub mod normalizer;
pub mod settings;
pub mod week_numbers;
