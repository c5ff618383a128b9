use crate::domain::certificate::block_datetime;
use crate::infrastructure::ledger::{
    Block, CertificationRecord, Ledger, LedgerError, TransactionReceipt,
};
use async_trait::async_trait;
use hyper::{client::HttpConnector, Body, Client, Method, Request};
use json::JsonValue;
use lazy_static::lazy_static;
use log::debug;
use sha3::{Digest, Keccak256};
use std::sync::atomic::{AtomicU64, Ordering};

lazy_static! {
    static ref CERTIFICATIONS_SELECTOR: [u8; 4] = function_selector("certifications(uint256)");
}

const WORD_SIZE: usize = 32;

/// First four bytes of the Keccak-256 hash of a Solidity function signature.
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

/// Calldata for `certifications(uint256)`.
pub fn certifications_calldata(id: u64) -> String {
    format!("0x{}{:064x}", hex::encode(*CERTIFICATIONS_SELECTOR), id)
}

/// Parse a JSON-RPC hex quantity such as `"0x1a"`.
pub fn parse_quantity(value: &JsonValue, field: &str) -> Result<u64, LedgerError> {
    let text = value
        .as_str()
        .ok_or_else(|| LedgerError::InvalidResponse(format!("{} is missing", field)))?;
    text.strip_prefix("0x")
        .and_then(|digits| u64::from_str_radix(digits, 16).ok())
        .ok_or_else(|| {
            LedgerError::InvalidResponse(format!("{} is not a hex quantity: {}", field, text))
        })
}

/// Split `eth_call` return data into its first two words.
fn decode_certification(data: &str) -> Result<CertificationRecord, LedgerError> {
    let digits = data.strip_prefix("0x").unwrap_or(data);
    let bytes = hex::decode(digits)
        .map_err(|e| LedgerError::InvalidResponse(format!("call result is not hex: {}", e)))?;

    if bytes.len() < 2 * WORD_SIZE {
        return Err(LedgerError::InvalidResponse(format!(
            "call result has {} bytes, expected at least {}",
            bytes.len(),
            2 * WORD_SIZE
        )));
    }

    Ok(CertificationRecord {
        bride: format!("0x{}", hex::encode(&bytes[..WORD_SIZE])),
        groom: format!("0x{}", hex::encode(&bytes[WORD_SIZE..2 * WORD_SIZE])),
    })
}

/// [`Ledger`] backed by an Ethereum JSON-RPC node over HTTP.
pub struct JsonRpcLedger {
    client: Client<HttpConnector>,
    rpc_url: String,
    contract_address: String,
    next_id: AtomicU64,
}

impl JsonRpcLedger {
    pub fn new(rpc_url: &str, contract_address: &str) -> Self {
        Self {
            client: Client::new(),
            rpc_url: rpc_url.to_string(),
            contract_address: contract_address.to_string(),
            next_id: AtomicU64::new(1),
        }
    }

    async fn call(&self, method: &str, params: JsonValue) -> Result<JsonValue, LedgerError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json::object! {
            "jsonrpc" => "2.0",
            "id" => id,
            "method" => method,
            "params" => params
        };

        debug!("RPC {} #{} -> {}", method, id, self.rpc_url);

        let request = Request::builder()
            .method(Method::POST)
            .uri(self.rpc_url.as_str())
            .header("content-type", "application/json")
            .body(Body::from(body.dump()))?;

        let response = self.client.request(request).await?;

        if !response.status().is_success() {
            return Err(LedgerError::Http(response.status()));
        }

        let bytes = hyper::body::to_bytes(response.into_body()).await?;
        let text = std::str::from_utf8(&bytes)
            .map_err(|_| LedgerError::InvalidResponse("body is not UTF-8".to_string()))?;
        let mut reply = json::parse(text).map_err(|e| LedgerError::InvalidResponse(e.to_string()))?;

        if !reply["error"].is_null() {
            return Err(LedgerError::Rpc {
                code: reply["error"]["code"].as_i64().unwrap_or(0),
                message: reply["error"]["message"]
                    .as_str()
                    .unwrap_or("unknown error")
                    .to_string(),
            });
        }

        Ok(reply["result"].take())
    }
}

#[async_trait]
impl Ledger for JsonRpcLedger {
    async fn accounts(&self) -> Result<Vec<String>, LedgerError> {
        let result = self.call("eth_accounts", json::array![]).await?;

        if !result.is_array() {
            return Err(LedgerError::InvalidResponse(
                "eth_accounts did not return an array".to_string(),
            ));
        }

        Ok(result
            .members()
            .filter_map(|account| account.as_str().map(str::to_string))
            .collect())
    }

    async fn certification(
        &self,
        id: u64,
        from: Option<&str>,
    ) -> Result<CertificationRecord, LedgerError> {
        let mut tx = json::object! {
            "to" => self.contract_address.as_str(),
            "data" => certifications_calldata(id)
        };
        if let Some(from) = from {
            tx["from"] = from.into();
        }

        let result = self.call("eth_call", json::array![tx, "latest"]).await?;
        let data = result.as_str().ok_or_else(|| {
            LedgerError::InvalidResponse("eth_call did not return a string".to_string())
        })?;

        decode_certification(data)
    }

    async fn transaction_receipt(&self, tx_hash: &str) -> Result<TransactionReceipt, LedgerError> {
        let result = self
            .call("eth_getTransactionReceipt", json::array![tx_hash])
            .await?;

        if result.is_null() {
            return Err(LedgerError::NotFound(format!(
                "Transaction receipt for {}",
                tx_hash
            )));
        }

        Ok(TransactionReceipt {
            transaction_hash: result["transactionHash"]
                .as_str()
                .unwrap_or(tx_hash)
                .to_string(),
            block_number: parse_quantity(&result["blockNumber"], "blockNumber")?,
        })
    }

    async fn block(&self, number: u64) -> Result<Block, LedgerError> {
        let result = self
            .call(
                "eth_getBlockByNumber",
                json::array![format!("0x{:x}", number), false],
            )
            .await?;

        if result.is_null() {
            return Err(LedgerError::NotFound(format!("Block {}", number)));
        }

        let timestamp = parse_quantity(&result["timestamp"], "timestamp")?;
        if block_datetime(timestamp).is_none() {
            return Err(LedgerError::InvalidResponse(format!(
                "block {} timestamp {} is out of range",
                number, timestamp
            )));
        }

        Ok(Block { number, timestamp })
    }
}
