//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod diagnostic_sink;
mod user_source;

#[cfg(test)]
pub use diagnostic_sink::MockDiagnosticSink;
pub use diagnostic_sink::{DiagnosticSink, NoOpDiagnostics, TracingDiagnostics};
#[cfg(test)]
pub use user_source::MockUserSource;
pub use user_source::{FixtureUserSource, UserSource, UserSourceError};
