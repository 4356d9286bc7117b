//! Page-level components. Each analyzer page is a thin wrapper around the
//! shared [`AnalyzerView`](crate::pipelines::AnalyzerView) with its own
//! pipeline configuration.

mod compare;
mod home;
mod keywords;
mod transformer;
mod vader;

pub use compare::Compare;
pub use home::Home;
pub use keywords::Keywords;
pub use transformer::Transformer;
pub use vader::Vader;
