pub mod candidate;
pub mod defaults;
pub mod normalizer;

pub use candidate::Candidate;
pub use defaults::{revenue_risk, RiskTier, GENERIC_CUSTOMER_IMPACT, GENERIC_REVENUE_IMPACT};
pub use normalizer::normalize;
