mod binary_svc;
mod epsilon_svr;
mod sampler;

pub use binary_svc::BinarySvc;
pub use epsilon_svr::EpsilonSvr;
pub use sampler::{ExampleSampler, RandomSampler};
