use crate::domain::certificate::format_block_timestamp;
use crate::domain::codec::{decode_certification_id, decode_ledger_name, from_hex, CodecError};
use crate::domain::{CertificateRoute, DisplayRecord};
use crate::infrastructure::ledger::{Ledger, LedgerError};
use hyper::StatusCode;
use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Malformed route parameter: {0}")]
    Codec(#[from] CodecError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Certification {0} does not exist")]
    CertificationNotFound(u64),
}

impl ResolveError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ResolveError::Codec(_) => StatusCode::BAD_REQUEST,
            ResolveError::CertificationNotFound(_) | ResolveError::Ledger(LedgerError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            ResolveError::Ledger(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Turns a certificate route into the record shown on the page.
pub struct CertificateResolver {
    ledger: Box<dyn Ledger>,
}

impl CertificateResolver {
    pub fn new(ledger: Box<dyn Ledger>) -> Self {
        Self { ledger }
    }

    pub async fn resolve(&self, route: &CertificateRoute) -> Result<DisplayRecord, ResolveError> {
        match route {
            CertificateRoute::Sample { bride, groom } => Self::resolve_sample(bride, groom),
            CertificateRoute::Live { id, tx_hash } => self.resolve_live(id, tx_hash).await,
        }
    }

    /// Names come straight from the URL; the ledger is not consulted.
    pub fn resolve_sample(bride: &str, groom: &str) -> Result<DisplayRecord, ResolveError> {
        Ok(DisplayRecord::sample(from_hex(bride)?, from_hex(groom)?))
    }

    /// Each ledger call waits for the previous one; the first failure wins.
    pub async fn resolve_live(
        &self,
        encoded_id: &str,
        tx_hash: &str,
    ) -> Result<DisplayRecord, ResolveError> {
        let accounts = self.ledger.accounts().await?;
        let id = decode_certification_id(encoded_id)?;

        debug!("Resolving certification {} ({})", id, encoded_id);

        let certification = self
            .ledger
            .certification(id, accounts.first().map(String::as_str))
            .await?;
        if certification.is_empty() {
            return Err(ResolveError::CertificationNotFound(id));
        }

        let receipt = self.ledger.transaction_receipt(tx_hash).await?;
        let block = self.ledger.block(receipt.block_number).await?;

        Ok(DisplayRecord {
            bride_name: decode_ledger_name(&certification.bride)?,
            groom_name: decode_ledger_name(&certification.groom)?,
            certificate_id: encoded_id.to_string(),
            transaction_hash: tx_hash.to_string(),
            issued_date: format_block_timestamp(block.timestamp),
        })
    }
}
