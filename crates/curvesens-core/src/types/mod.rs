//! Domain-specific value types.

mod currency;
mod curve_name;
mod point;

pub use currency::Currency;
pub use curve_name::CurveName;
pub use point::{ForwardPointSensitivity, PointSensitivity, SensitivityPoint};
