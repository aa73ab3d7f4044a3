pub mod compliance_trend;
pub mod distribution;

pub use compliance_trend::ComplianceTrendReport;
pub use distribution::DistributionReport;
