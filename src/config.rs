use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

pub const LISTEN_ADDR_VAR: &str = "CERTIFICATION_LISTEN_ADDR";
pub const RPC_URL_VAR: &str = "ETHEREUM_RPC_URL";
pub const CONTRACT_ADDRESS_VAR: &str = "CERTIFICATION_CONTRACT_ADDRESS";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub rpc_url: String,
    pub contract_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            name: LISTEN_ADDR_VAR,
            value: listen.clone(),
        })?;

        // Plain HTTP only: the ledger client has no TLS connector.
        let rpc_url = lookup(RPC_URL_VAR).unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        if rpc_url.parse::<hyper::Uri>().is_err() || !rpc_url.starts_with("http://") {
            return Err(ConfigError::Invalid {
                name: RPC_URL_VAR,
                value: rpc_url,
            });
        }

        let contract_address =
            lookup(CONTRACT_ADDRESS_VAR).ok_or(ConfigError::Missing(CONTRACT_ADDRESS_VAR))?;
        if !is_address(&contract_address) {
            return Err(ConfigError::Invalid {
                name: CONTRACT_ADDRESS_VAR,
                value: contract_address,
            });
        }

        Ok(Self {
            listen_addr,
            rpc_url,
            contract_address,
        })
    }
}

fn is_address(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .map(|digits| digits.len() == 40 && digits.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}
