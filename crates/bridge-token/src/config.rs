//! # Token Configuration
//!
//! Initializer arguments, with deployment presets per network.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TOKEN_NETWORK` | Preset to start from | `localhost` |
//! | `TOKEN_NAME` | Token name | `Presearch` |
//! | `TOKEN_SYMBOL` | Token symbol | `PRE` |
//! | `TOKEN_CHAIN_ID` | Chain id | from preset |
//! | `TOKEN_BRIDGE` | Bridge address | `0x4200000000000000000000000000000000000010` |
//! | `TOKEN_REMOTE_TOKEN` | Origin-chain token | from preset |
//! | `TOKEN_TREASURY` | Initial supply recipient | deployer |
//! | `TOKEN_CONTRACT` | Proxy address | from preset |
//! | `TOKEN_CAP` | Cap, whole tokens | `1000000000` |
//! | `TOKEN_INITIAL_SUPPLY` | Initial supply, whole tokens | `500000000` |

use crate::domain::{DeploymentContext, InitParams, DECIMALS};
use serde::{Deserialize, Serialize};
use shared_types::{units, Address};
use std::env;
use thiserror::Error;

/// Canonical L2 standard bridge.
pub const STANDARD_BRIDGE: &str = "0x4200000000000000000000000000000000000010";

const MAINNET_L1_TOKEN: &str = "0xEC213F83defB583af3A000B1c0ada660b1902A0F";
const SEPOLIA_L1_TOKEN: &str = "0x0765C04EF390A63E8b7Bb6A5FCA2F42169C7bB19";

/// Default cap in whole tokens.
pub const DEFAULT_CAP_TOKENS: u64 = 1_000_000_000;

/// Default initial supply in whole tokens.
pub const DEFAULT_INITIAL_SUPPLY_TOKENS: u64 = 500_000_000;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("{0} must not be the zero address")]
    ZeroAddress(&'static str),

    #[error("initial supply {supply} exceeds cap {cap}")]
    SupplyAboveCap { supply: u64, cap: u64 },
}

impl From<ConfigError> for crate::errors::TokenError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidInitialization(err.to_string())
    }
}

// =============================================================================
// NETWORK PRESETS
// =============================================================================

/// Known deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkPreset {
    pub name: &'static str,
    pub chain_id: u64,
    remote_token: &'static str,
    proxy: Option<&'static str>,
}

const PRESETS: [NetworkPreset; 5] = [
    NetworkPreset {
        name: "base-mainnet",
        chain_id: 8453,
        remote_token: MAINNET_L1_TOKEN,
        proxy: Some("0x3816dD4bd44c8830c2FA020A5605bAC72FA3De7A"),
    },
    NetworkPreset {
        name: "base-sepolia",
        chain_id: 84532,
        remote_token: SEPOLIA_L1_TOKEN,
        proxy: Some("0xc0C034725e4eC6DDd23B8D4e6412094BcfB3F5D6"),
    },
    NetworkPreset {
        name: "optimism-mainnet",
        chain_id: 10,
        remote_token: MAINNET_L1_TOKEN,
        proxy: None,
    },
    NetworkPreset {
        name: "localhost",
        chain_id: 31337,
        remote_token: MAINNET_L1_TOKEN,
        proxy: Some("0x959922bE3CAee4b8Cd9a407cc3ac1C251C2007B1"),
    },
    NetworkPreset {
        name: "hardhat",
        chain_id: 31337,
        remote_token: MAINNET_L1_TOKEN,
        proxy: Some("0x959922bE3CAee4b8Cd9a407cc3ac1C251C2007B1"),
    },
];

impl NetworkPreset {
    /// Looks up a preset by network name.
    pub fn for_network(name: &str) -> Result<Self, ConfigError> {
        PRESETS
            .iter()
            .find(|preset| preset.name == name)
            .copied()
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))
    }

    /// Names of all presets.
    pub fn names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|preset| preset.name)
    }

    /// Origin-chain token for this network.
    pub fn remote_token(&self) -> Result<Address, ConfigError> {
        parse_address("remote_token", self.remote_token)
    }

    /// Proxy address, if one is deployed.
    pub fn proxy(&self) -> Result<Option<Address>, ConfigError> {
        self.proxy
            .map(|addr| parse_address("proxy", addr))
            .transpose()
    }
}

// =============================================================================
// TOKEN CONFIG
// =============================================================================

/// First-initialization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub network: String,
    pub chain_id: u64,
    pub bridge: Address,
    pub remote_token: Address,
    /// Initial supply recipient. `None` means the deployer.
    pub treasury: Option<Address>,
    pub contract: Address,
    pub cap_tokens: u64,
    pub initial_supply_tokens: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: "Presearch".to_string(),
            symbol: "PRE".to_string(),
            network: "localhost".to_string(),
            chain_id: 31337,
            bridge: STANDARD_BRIDGE.parse().unwrap_or_default(),
            remote_token: MAINNET_L1_TOKEN.parse().unwrap_or_default(),
            treasury: None,
            contract: "0x959922bE3CAee4b8Cd9a407cc3ac1C251C2007B1"
                .parse()
                .unwrap_or_default(),
            cap_tokens: DEFAULT_CAP_TOKENS,
            initial_supply_tokens: DEFAULT_INITIAL_SUPPLY_TOKENS,
        }
    }
}

impl TokenConfig {
    /// Defaults for a known network.
    pub fn for_network(network: &str) -> Result<Self, ConfigError> {
        let preset = NetworkPreset::for_network(network)?;
        let mut config = Self {
            network: preset.name.to_string(),
            chain_id: preset.chain_id,
            remote_token: preset.remote_token()?,
            ..Self::default()
        };
        if let Some(proxy) = preset.proxy()? {
            config.contract = proxy;
        }
        Ok(config)
    }

    /// Reads configuration from `TOKEN_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`, starting from the
    /// `TOKEN_NETWORK` preset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup("TOKEN_NETWORK") {
            Some(network) => Self::for_network(network.trim())?,
            None => Self::default(),
        };

        if let Some(name) = lookup("TOKEN_NAME") {
            config.name = name;
        }
        if let Some(symbol) = lookup("TOKEN_SYMBOL") {
            config.symbol = symbol;
        }
        if let Some(chain_id) = lookup("TOKEN_CHAIN_ID") {
            config.chain_id = parse_u64("TOKEN_CHAIN_ID", &chain_id)?;
        }
        if let Some(bridge) = lookup("TOKEN_BRIDGE") {
            config.bridge = parse_address("TOKEN_BRIDGE", &bridge)?;
        }
        if let Some(remote) = lookup("TOKEN_REMOTE_TOKEN") {
            config.remote_token = parse_address("TOKEN_REMOTE_TOKEN", &remote)?;
        }
        if let Some(treasury) = lookup("TOKEN_TREASURY") {
            config.treasury = Some(parse_address("TOKEN_TREASURY", &treasury)?);
        }
        if let Some(contract) = lookup("TOKEN_CONTRACT") {
            config.contract = parse_address("TOKEN_CONTRACT", &contract)?;
        }
        if let Some(cap) = lookup("TOKEN_CAP") {
            config.cap_tokens = parse_u64("TOKEN_CAP", &cap)?;
        }
        if let Some(supply) = lookup("TOKEN_INITIAL_SUPPLY") {
            config.initial_supply_tokens = parse_u64("TOKEN_INITIAL_SUPPLY", &supply)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks the settings can initialize a token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bridge.is_zero() {
            return Err(ConfigError::ZeroAddress("bridge"));
        }
        if self.treasury.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::ZeroAddress("treasury"));
        }
        if self.initial_supply_tokens > self.cap_tokens {
            return Err(ConfigError::SupplyAboveCap {
                supply: self.initial_supply_tokens,
                cap: self.cap_tokens,
            });
        }
        Ok(())
    }

    /// Initializer parameters for a deployment by `deployer`.
    #[must_use]
    pub fn init_params(&self, deployer: Address) -> InitParams {
        InitParams {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            decimals: DECIMALS,
            bridge: self.bridge,
            remote_token: self.remote_token,
            treasury: self.treasury.unwrap_or(deployer),
            admin: deployer,
            cap: units(self.cap_tokens, DECIMALS),
            initial_supply: units(self.initial_supply_tokens, DECIMALS),
            deployment: DeploymentContext {
                chain_id: self.chain_id,
                contract: self.contract,
            },
        }
    }
}

fn parse_address(key: &str, value: &str) -> Result<Address, ConfigError> {
    value.parse().map_err(|e: shared_types::ParseError| ConfigError::InvalidValue {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .replace('_', "")
        .parse()
        .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
            key: key.to_string(),
            reason: e.to_string(),
        })
}
