//! # Persistent Schema
//!
//! Everything that survives a logic swap lives in [`TokenStorage`]. Entry
//! points in the service are behaviour only; a new service opened over the
//! same storage sees identical balances, roles, pause state, bridge, cap and
//! nonces.

use super::access_control::RoleRegistry;
use super::authorization::NonceRegistry;
use super::eip712::Eip712State;
use super::ledger::Ledger;
use super::pause::PauseSwitch;
use super::supply::BridgeLink;
use super::upgrade::{InitializationGate, INITIAL_VERSION};
use super::value_objects::{DeploymentContext, Role};
use crate::errors::{TokenError, TokenResult};
use crate::events::TokenEvent;
use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

/// Immutable token metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// First-initialization parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitParams {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub bridge: Address,
    pub remote_token: Address,
    /// Receives the initial supply.
    pub treasury: Address,
    /// Receives every initial role.
    pub admin: Address,
    pub cap: U256,
    pub initial_supply: U256,
    pub deployment: DeploymentContext,
}

/// Persistent token state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStorage {
    pub metadata: TokenMetadata,
    pub deployment: DeploymentContext,
    pub ledger: Ledger,
    pub roles: RoleRegistry,
    pub pause: PauseSwitch,
    pub bridge: BridgeLink,
    pub eip712: Eip712State,
    pub nonces: NonceRegistry,
    pub initialization: InitializationGate,
}

impl TokenStorage {
    /// Runs the first initializer, returning the storage and the events it
    /// emitted.
    ///
    /// The typed-data name and version start empty; a later
    /// reinitialization sets them.
    pub fn initialize(params: &InitParams) -> TokenResult<(Self, Vec<TokenEvent>)> {
        if params.bridge.is_zero() {
            return Err(TokenError::InvalidInitialization("bridge is the zero address".into()));
        }
        if params.treasury.is_zero() {
            return Err(TokenError::InvalidInitialization("treasury is the zero address".into()));
        }
        if params.admin.is_zero() {
            return Err(TokenError::InvalidInitialization("admin is the zero address".into()));
        }
        if params.initial_supply > params.cap {
            return Err(TokenError::InvalidInitialization(format!(
                "initial supply {} exceeds cap {}",
                params.initial_supply, params.cap
            )));
        }

        let mut initialization = InitializationGate::default();
        initialization.advance(INITIAL_VERSION)?;

        let mut events = Vec::new();
        let mut roles = RoleRegistry::new();
        for role in Role::ALL {
            roles.grant(role.id(), params.admin);
            events.push(TokenEvent::RoleGranted {
                role: role.id(),
                account: params.admin,
                sender: params.admin,
            });
        }

        let mut ledger = Ledger::new(params.cap);
        ledger.mint(params.treasury, params.initial_supply)?;
        events.push(TokenEvent::Transfer {
            from: Address::ZERO,
            to: params.treasury,
            value: params.initial_supply,
        });
        events.push(TokenEvent::Initialized {
            version: INITIAL_VERSION,
        });

        let storage = Self {
            metadata: TokenMetadata {
                name: params.name.clone(),
                symbol: params.symbol.clone(),
                decimals: params.decimals,
            },
            deployment: params.deployment,
            ledger,
            roles,
            pause: PauseSwitch::default(),
            bridge: BridgeLink::new(params.bridge, params.remote_token),
            eip712: Eip712State::new("", "", &params.deployment),
            nonces: NonceRegistry::default(),
            initialization,
        };
        Ok((storage, events))
    }

    /// Serializes the storage for a logic swap.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restores storage serialized by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
