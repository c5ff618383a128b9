pub mod application;
pub mod config;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-export commonly used types
pub use application::{CertificateResolver, ResolveError};
pub use config::{Config, ConfigError};
pub use domain::{CertificateRoute, CodecError, DisplayRecord};
pub use infrastructure::ledger::{Ledger, LedgerError};
pub use infrastructure::rpc::JsonRpcLedger;
