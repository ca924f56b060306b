//! # Typed-Data Domain (EIP-712)
//!
//! Binds signed messages to one token instance: name, version, chain id and
//! contract address are hashed into the domain separator, so a signature
//! made for one deployment (or one metadata version) never verifies on
//! another.
//!
//! The separator is cached and only recomputed when the name or version
//! changes through reinitialization.

use super::value_objects::DeploymentContext;
use serde::{Deserialize, Serialize};
use shared_crypto::{keccak256, keccak256_concat};
use shared_types::{u256_to_word, Address, Hash, U256};

/// Canonical domain type string.
pub const EIP712_DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// ERC-5267 field bitmap: name, version, chainId, verifyingContract.
pub const DOMAIN_FIELDS: u8 = 0x0f;

/// `keccak256(EIP712_DOMAIN_TYPE)`.
#[must_use]
pub fn domain_type_hash() -> Hash {
    keccak256(EIP712_DOMAIN_TYPE.as_bytes())
}

/// `keccak256(0x19 0x01 || domain_separator || struct_hash)`.
#[must_use]
pub fn hash_typed_data(domain_separator: &Hash, struct_hash: &Hash) -> Hash {
    keccak256_concat(&[
        &[0x19, 0x01],
        domain_separator.as_bytes(),
        struct_hash.as_bytes(),
    ])
}

/// Computes the separator for a given name, version and deployment.
#[must_use]
pub fn compute_domain_separator(name: &str, version: &str, deployment: &DeploymentContext) -> Hash {
    keccak256_concat(&[
        domain_type_hash().as_bytes(),
        keccak256(name.as_bytes()).as_bytes(),
        keccak256(version.as_bytes()).as_bytes(),
        &u256_to_word(U256::from(deployment.chain_id)),
        &deployment.contract.to_word(),
    ])
}

/// Persisted domain metadata with its cached separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712State {
    name: String,
    version: String,
    cached_separator: Hash,
}

impl Eip712State {
    /// Builds the state and computes its separator.
    #[must_use]
    pub fn new(name: &str, version: &str, deployment: &DeploymentContext) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            cached_separator: compute_domain_separator(name, version, deployment),
        }
    }

    /// Domain name used for signing.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Domain version used for signing.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Cached separator.
    #[must_use]
    pub fn separator(&self) -> Hash {
        self.cached_separator
    }

    /// Replaces name and version. Returns whether the separator changed.
    pub fn update(&mut self, name: &str, version: &str, deployment: &DeploymentContext) -> bool {
        let previous = self.cached_separator;
        *self = Self::new(name, version, deployment);
        previous != self.cached_separator
    }

    /// ERC-5267 view of the domain.
    #[must_use]
    pub fn fields(&self, deployment: &DeploymentContext) -> Eip712DomainFields {
        Eip712DomainFields {
            fields: DOMAIN_FIELDS,
            name: self.name.clone(),
            version: self.version.clone(),
            chain_id: U256::from(deployment.chain_id),
            verifying_contract: deployment.contract,
            salt: Hash::ZERO,
            extensions: Vec::new(),
        }
    }

    /// Compact domain view for building signing payloads off-line.
    #[must_use]
    pub fn info(&self, deployment: &DeploymentContext) -> DomainInfo {
        DomainInfo {
            name: self.name.clone(),
            version: self.version.clone(),
            chain_id: deployment.chain_id,
            contract_address: deployment.contract,
        }
    }
}

/// ERC-5267 `eip712Domain()` tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712DomainFields {
    pub fields: u8,
    pub name: String,
    pub version: String,
    pub chain_id: U256,
    pub verifying_contract: Address,
    pub salt: Hash,
    pub extensions: Vec<U256>,
}

/// Domain parameters a signer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainInfo {
    pub name: String,
    pub version: String,
    pub chain_id: u64,
    pub contract_address: Address,
}

impl DomainInfo {
    /// Separator a signer derives from these parameters.
    #[must_use]
    pub fn separator(&self) -> Hash {
        compute_domain_separator(
            &self.name,
            &self.version,
            &DeploymentContext {
                chain_id: self.chain_id,
                contract: self.contract_address,
            },
        )
    }
}
