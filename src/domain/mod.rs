pub mod certificate;
pub mod codec;
pub mod route;

pub use certificate::DisplayRecord;
pub use codec::CodecError;
pub use route::CertificateRoute;
