mod epsilon;
mod hinge;

pub use epsilon::epsilon_insensitive_update;
pub use hinge::hinge_gradient;
