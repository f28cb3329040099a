pub mod organization_model;
pub mod service_model;

pub use organization_model::*;
pub use service_model::*;
