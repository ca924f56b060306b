//! Shared test fixtures.

use bridge_token::prelude::*;
use k256::ecdsa::SigningKey;

/// Unix time the manual clock starts at.
pub const GENESIS_TIME: u64 = 1_700_000_000;

/// A deployed token plus the identities around it.
pub struct Deployment {
    pub token: TokenService<ManualClock, InMemoryEventLog>,
    pub deployer: Address,
    pub treasury: Address,
    pub bridge: Address,
}

impl Deployment {
    /// Deploys with the default 1e9 cap and 5e8 initial supply.
    pub fn new() -> Self {
        Self::with_supply(1_000_000_000, 500_000_000)
    }

    /// Deploys with custom cap and initial supply (whole tokens).
    pub fn with_supply(cap_tokens: u64, initial_supply_tokens: u64) -> Self {
        token_telemetry::init_test_logging();

        let deployer = Address::repeat_byte(0xDE);
        let treasury = Address::repeat_byte(0x7E);
        let config = TokenConfig {
            treasury: Some(treasury),
            cap_tokens,
            initial_supply_tokens,
            ..TokenConfig::default()
        };
        let bridge = config.bridge;

        let token = TokenService::initialize(
            &config,
            deployer,
            ManualClock::new(GENESIS_TIME),
            InMemoryEventLog::new(),
        )
        .expect("deployment");
        token.sink().drain();

        Self {
            token,
            deployer,
            treasury,
            bridge,
        }
    }

    /// Moves `amount` base units from the treasury to `to`.
    pub fn fund(&self, to: Address, amount: u64) {
        self.token
            .transfer(self.treasury, to, U256::from(amount))
            .expect("funding transfer");
    }

    /// Runs the post-upgrade hook the deployed V2 ran.
    pub fn upgrade_to_v2(&self) {
        self.token
            .reinitialize(self.deployer, 2, "Presearch", "1")
            .expect("reinitialize");
    }
}

impl Default for Deployment {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh signer backed by a random secp256k1 key.
pub fn random_signer() -> Secp256k1KeyPair {
    let signing_key = SigningKey::random(&mut rand::thread_rng());
    let mut secret = [0u8; 32];
    secret.copy_from_slice(&signing_key.to_bytes());
    Secp256k1KeyPair::from_bytes(secret).expect("random key is valid")
}

/// Random 32-byte nonce.
pub fn random_nonce() -> Nonce {
    Hash::new(rand::random())
}

/// Authorization valid for the hour after `GENESIS_TIME`.
pub fn authorization(from: Address, to: Address, value: u64) -> TransferAuthorization {
    TransferAuthorization {
        from,
        to,
        value: U256::from(value),
        valid_after: U256::from(GENESIS_TIME - 1),
        valid_before: U256::from(GENESIS_TIME + 3_600),
        nonce: random_nonce(),
    }
}

/// Signs `auth` for the domain `token` currently exposes.
pub fn sign(
    token: &impl BridgedTokenApi,
    signer: &Secp256k1KeyPair,
    auth: &TransferAuthorization,
) -> EcdsaSignature {
    auth.sign(signer, &token.domain_info().separator())
        .expect("signing")
}
