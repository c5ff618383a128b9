mod resolve;

pub use resolve::{CertificateResolver, ResolveError};
