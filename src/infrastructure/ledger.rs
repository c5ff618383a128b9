use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Transport error: {0}")]
    Transport(#[from] hyper::Error),

    #[error("Failed to build request: {0}")]
    Request(#[from] hyper::http::Error),

    #[error("Ledger node answered HTTP {0}")]
    Http(hyper::StatusCode),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Invalid ledger response: {0}")]
    InvalidResponse(String),

    #[error("{0} not found")]
    NotFound(String),
}

/// A certification as stored by the contract. Names are 32-byte words
/// (`0x`-prefixed hex) holding the hex of the name, left-padded with zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationRecord {
    pub bride: String,
    pub groom: String,
}

impl CertificationRecord {
    /// An unset mapping entry reads back as all zeros.
    pub fn is_empty(&self) -> bool {
        let is_zero = |word: &str| {
            word.strip_prefix("0x")
                .unwrap_or(word)
                .chars()
                .all(|c| c == '0')
        };
        is_zero(&self.bride) && is_zero(&self.groom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    pub block_number: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub number: u64,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
}

/// Read-only view of the chain holding the certification contract.
#[async_trait]
pub trait Ledger: Send + Sync {
    async fn accounts(&self) -> Result<Vec<String>, LedgerError>;

    async fn certification(
        &self,
        id: u64,
        from: Option<&str>,
    ) -> Result<CertificationRecord, LedgerError>;

    async fn transaction_receipt(&self, tx_hash: &str) -> Result<TransactionReceipt, LedgerError>;

    async fn block(&self, number: u64) -> Result<Block, LedgerError>;
}
