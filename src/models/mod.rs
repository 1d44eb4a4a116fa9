// Module exports for models
// Views, values and configuration shared by the services

pub mod granularity;
pub mod settings;
pub mod value;
