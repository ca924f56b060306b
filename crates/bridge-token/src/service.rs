//! # Token Service
//!
//! Serialized entry points over [`TokenStorage`].
//!
//! Every mutating call takes the storage write lock for its whole duration,
//! runs its guards, then its effect. A rejected call leaves storage exactly as
//! it was and emits no events; an accepted call's events reach the sink in
//! order, before the lock is released.

use crate::adapters::{InMemoryEventLog, ManualClock};
use crate::config::TokenConfig;
use crate::domain::{
    check_guards, check_storage, check_validity_window, stage_batch, verify_signer, DomainInfo,
    Eip712DomainFields, Guard, Nonce, Role, RoleId, TokenStorage, TransferAuthorization,
    DEFAULT_ADMIN_ROLE,
};
use crate::errors::TokenResult;
use crate::events::TokenEvent;
use crate::ports::inbound::BridgedTokenApi;
use crate::ports::outbound::{Clock, EventSink};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared_crypto::EcdsaSignature;
use shared_types::{Address, Hash, U256};
use tracing::{debug, info, instrument, warn};

/// Call counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStats {
    /// Mutating calls attempted.
    pub calls: u64,
    /// Calls that committed.
    pub succeeded: u64,
    /// Calls rejected with an error.
    pub rejected: u64,
    /// Signed authorizations consumed.
    pub authorizations_used: u64,
    /// Events handed to the sink.
    pub events_emitted: u64,
}

/// The token state machine.
pub struct TokenService<C: Clock, E: EventSink> {
    storage: RwLock<TokenStorage>,
    clock: C,
    sink: E,
    stats: RwLock<ServiceStats>,
}

impl<C: Clock, E: EventSink> TokenService<C, E> {
    /// Deploys a fresh token: runs the first initializer for `deployer`.
    pub fn initialize(config: &TokenConfig, deployer: Address, clock: C, sink: E) -> TokenResult<Self> {
        config.validate()?;
        let (storage, events) = TokenStorage::initialize(&config.init_params(deployer))?;

        info!(
            name = %config.name,
            symbol = %config.symbol,
            chain_id = config.chain_id,
            deployer = %deployer,
            "token initialized"
        );

        let service = Self::from_storage(storage, clock, sink);
        for event in &events {
            service.sink.emit(event);
        }
        service.stats.write().events_emitted = events.len() as u64;
        Ok(service)
    }

    /// Opens existing storage, as a new logic module would after an upgrade.
    pub fn from_storage(storage: TokenStorage, clock: C, sink: E) -> Self {
        Self {
            storage: RwLock::new(storage),
            clock,
            sink,
            stats: RwLock::new(ServiceStats::default()),
        }
    }

    /// Copy of the persistent state.
    pub fn snapshot(&self) -> TokenStorage {
        self.storage.read().clone()
    }

    /// Releases the persistent state.
    pub fn into_storage(self) -> TokenStorage {
        self.storage.into_inner()
    }

    /// Current counters.
    pub fn stats(&self) -> ServiceStats {
        self.stats.read().clone()
    }

    /// The clock in use.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The event sink in use.
    pub fn sink(&self) -> &E {
        &self.sink
    }

    /// Runs one mutating call under the write lock.
    fn execute<T, F>(&self, operation: &'static str, caller: Address, guards: &[Guard], effect: F) -> TokenResult<T>
    where
        F: FnOnce(&mut TokenStorage, &mut Vec<TokenEvent>) -> TokenResult<T>,
    {
        self.execute_counted(operation, caller, guards, effect, |_| {})
    }

    /// Like [`execute`](Self::execute), with `on_success` applied to the
    /// statistics before the storage lock is released.
    fn execute_counted<T, F, S>(
        &self,
        operation: &'static str,
        caller: Address,
        guards: &[Guard],
        effect: F,
        on_success: S,
    ) -> TokenResult<T>
    where
        F: FnOnce(&mut TokenStorage, &mut Vec<TokenEvent>) -> TokenResult<T>,
        S: FnOnce(&mut ServiceStats),
    {
        let mut storage = self.storage.write();
        let mut events = Vec::new();

        let result = check_guards(guards, &storage, &caller)
            .and_then(|()| effect(&mut *storage, &mut events));

        let mut stats = self.stats.write();
        stats.calls += 1;
        match &result {
            Ok(_) => {
                debug_assert!(
                    check_storage(&storage).is_ok(),
                    "{operation} broke a storage invariant"
                );
                stats.succeeded += 1;
                on_success(&mut *stats);
                stats.events_emitted += events.len() as u64;
                for event in &events {
                    self.sink.emit(event);
                }
            }
            Err(err) => {
                stats.rejected += 1;
                warn!(
                    operation,
                    caller = ?caller,
                    kind = ?err.kind(),
                    reason = %err,
                    "call rejected"
                );
            }
        }
        result
    }

    /// Shared body of the signed-transfer entry points. `decode` runs after
    /// the pause guard, so a paused token rejects even malformed signatures
    /// with `ContractPaused`.
    fn authorize_transfer<D>(&self, caller: Address, auth: &TransferAuthorization, decode: D) -> TokenResult<()>
    where
        D: FnOnce() -> TokenResult<EcdsaSignature>,
    {
        self.execute_counted(
            "transfer_with_authorization",
            caller,
            &[Guard::WhenNotPaused],
            |storage, events| {
                let signature = decode()?;
                verify_signer(auth, &signature, &storage.eip712.separator())?;
                check_validity_window(auth, self.clock.now())?;
                storage.nonces.ensure_unused(&auth.from, &auth.nonce)?;

                storage.ledger.transfer(auth.from, auth.to, auth.value)?;
                storage.nonces.consume(auth.from, auth.nonce);

                events.push(TokenEvent::AuthorizationUsed {
                    authorizer: auth.from,
                    nonce: auth.nonce,
                });
                events.push(TokenEvent::Transfer {
                    from: auth.from,
                    to: auth.to,
                    value: auth.value,
                });
                debug!(nonce = ?auth.nonce, submitter = ?caller, "authorization consumed");
                Ok(())
            },
            |stats| stats.authorizations_used += 1,
        )
    }
}

impl<C: Clock, E: EventSink> BridgedTokenApi for TokenService<C, E> {
    fn name(&self) -> String {
        self.storage.read().metadata.name.clone()
    }

    fn symbol(&self) -> String {
        self.storage.read().metadata.symbol.clone()
    }

    fn decimals(&self) -> u8 {
        self.storage.read().metadata.decimals
    }

    fn total_supply(&self) -> U256 {
        self.storage.read().ledger.total_supply()
    }

    fn cap(&self) -> U256 {
        self.storage.read().ledger.cap()
    }

    fn balance_of(&self, account: &Address) -> U256 {
        self.storage.read().ledger.balance_of(account)
    }

    fn bridge(&self) -> Address {
        self.storage.read().bridge.bridge()
    }

    fn remote_token(&self) -> Address {
        self.storage.read().bridge.remote_token()
    }

    // =========================================================================
    // LEDGER
    // =========================================================================

    #[instrument(skip(self))]
    fn transfer(&self, caller: Address, to: Address, amount: U256) -> TokenResult<()> {
        self.execute("transfer", caller, &[Guard::WhenNotPaused], |storage, events| {
            storage.ledger.transfer(caller, to, amount)?;
            events.push(TokenEvent::Transfer {
                from: caller,
                to,
                value: amount,
            });
            debug!(%amount, "transferred");
            Ok(())
        })
    }

    #[instrument(skip(self, recipients, amounts), fields(legs = recipients.len()))]
    fn transfer_batch(&self, caller: Address, recipients: &[Address], amounts: &[U256]) -> TokenResult<()> {
        self.execute("transfer_batch", caller, &[Guard::WhenNotPaused], |storage, events| {
            let staged = stage_batch(&storage.ledger, caller, recipients, amounts)?;
            storage.ledger.apply(staged);
            events.extend(recipients.iter().zip(amounts).map(|(to, value)| TokenEvent::Transfer {
                from: caller,
                to: *to,
                value: *value,
            }));
            debug!(legs = recipients.len(), "batch transferred");
            Ok(())
        })
    }

    // =========================================================================
    // BRIDGE SUPPLY
    // =========================================================================

    #[instrument(skip(self))]
    fn mint(&self, caller: Address, to: Address, amount: U256) -> TokenResult<()> {
        self.execute("mint", caller, &[Guard::WhenNotPaused, Guard::Bridge], |storage, events| {
            storage.ledger.mint(to, amount)?;
            events.push(TokenEvent::Transfer {
                from: Address::ZERO,
                to,
                value: amount,
            });
            events.push(TokenEvent::Mint { account: to, amount });
            info!(?to, %amount, total_supply = %storage.ledger.total_supply(), "minted");
            Ok(())
        })
    }

    #[instrument(skip(self))]
    fn burn(&self, caller: Address, from: Address, amount: U256) -> TokenResult<()> {
        self.execute("burn", caller, &[Guard::WhenNotPaused, Guard::Bridge], |storage, events| {
            storage.ledger.burn(from, amount)?;
            events.push(TokenEvent::Transfer {
                from,
                to: Address::ZERO,
                value: amount,
            });
            events.push(TokenEvent::Burn { account: from, amount });
            info!(?from, %amount, total_supply = %storage.ledger.total_supply(), "burned");
            Ok(())
        })
    }

    // =========================================================================
    // PAUSE
    // =========================================================================

    #[instrument(skip(self))]
    fn pause(&self, caller: Address) -> TokenResult<()> {
        self.execute("pause", caller, &[Guard::Role(Role::Pauser.id())], |storage, events| {
            storage.pause.pause()?;
            events.push(TokenEvent::Paused { account: caller });
            info!("token paused");
            Ok(())
        })
    }

    #[instrument(skip(self))]
    fn unpause(&self, caller: Address) -> TokenResult<()> {
        self.execute("unpause", caller, &[Guard::Role(Role::Pauser.id())], |storage, events| {
            storage.pause.unpause()?;
            events.push(TokenEvent::Unpaused { account: caller });
            info!("token unpaused");
            Ok(())
        })
    }

    fn paused(&self) -> bool {
        self.storage.read().pause.is_paused()
    }

    // =========================================================================
    // ACCESS CONTROL
    // =========================================================================

    fn has_role(&self, role: &RoleId, account: &Address) -> bool {
        self.storage.read().roles.has_role(role, account)
    }

    fn get_role_admin(&self, role: &RoleId) -> RoleId {
        self.storage.read().roles.role_admin(role)
    }

    fn get_role_member_count(&self, role: &RoleId) -> usize {
        self.storage.read().roles.member_count(role)
    }

    fn get_role_member(&self, role: &RoleId, index: usize) -> Option<Address> {
        self.storage.read().roles.member(role, index)
    }

    #[instrument(skip(self))]
    fn grant_role(&self, caller: Address, role: RoleId, account: Address) -> TokenResult<()> {
        self.execute("grant_role", caller, &[Guard::AdminOf(role)], |storage, events| {
            if storage.roles.grant(role, account) {
                events.push(TokenEvent::RoleGranted {
                    role,
                    account,
                    sender: caller,
                });
                info!(%role, ?account, "role granted");
            }
            Ok(())
        })
    }

    #[instrument(skip(self))]
    fn revoke_role(&self, caller: Address, role: RoleId, account: Address) -> TokenResult<()> {
        self.execute("revoke_role", caller, &[Guard::AdminOf(role)], |storage, events| {
            if storage.roles.revoke(&role, &account) {
                events.push(TokenEvent::RoleRevoked {
                    role,
                    account,
                    sender: caller,
                });
                info!(%role, ?account, "role revoked");
            }
            Ok(())
        })
    }

    #[instrument(skip(self))]
    fn renounce_role(&self, caller: Address, role: RoleId, confirmation: Address) -> TokenResult<()> {
        self.execute("renounce_role", caller, &[Guard::Account(confirmation)], |storage, events| {
            if storage.roles.revoke(&role, &caller) {
                events.push(TokenEvent::RoleRevoked {
                    role,
                    account: caller,
                    sender: caller,
                });
                info!(%role, "role renounced");
            }
            Ok(())
        })
    }

    // =========================================================================
    // SIGNED AUTHORIZATION
    // =========================================================================

    #[instrument(skip(self, auth, signature), fields(from = ?auth.from, to = ?auth.to, value = %auth.value))]
    fn transfer_with_authorization(
        &self,
        caller: Address,
        auth: &TransferAuthorization,
        signature: &EcdsaSignature,
    ) -> TokenResult<()> {
        self.authorize_transfer(caller, auth, || Ok(*signature))
    }

    #[instrument(skip(self, auth, signature), fields(from = ?auth.from, to = ?auth.to, len = signature.len()))]
    fn transfer_with_authorization_bytes(
        &self,
        caller: Address,
        auth: &TransferAuthorization,
        signature: &[u8],
    ) -> TokenResult<()> {
        self.authorize_transfer(caller, auth, || Ok(EcdsaSignature::from_bytes(signature)?))
    }

    fn authorization_state(&self, authorizer: &Address, nonce: &Nonce) -> bool {
        self.storage.read().nonces.is_used(authorizer, nonce)
    }

    fn domain_separator(&self) -> Hash {
        self.storage.read().eip712.separator()
    }

    fn eip712_domain(&self) -> Eip712DomainFields {
        let storage = self.storage.read();
        storage.eip712.fields(&storage.deployment)
    }

    fn domain_info(&self) -> DomainInfo {
        let storage = self.storage.read();
        storage.eip712.info(&storage.deployment)
    }

    // =========================================================================
    // UPGRADE
    // =========================================================================

    #[instrument(skip(self))]
    fn reinitialize(&self, caller: Address, target_version: u64, name: &str, version: &str) -> TokenResult<()> {
        self.execute(
            "reinitialize",
            caller,
            &[Guard::Role(DEFAULT_ADMIN_ROLE)],
            |storage, events| {
                storage.initialization.advance(target_version)?;
                let deployment = storage.deployment;
                if storage.eip712.update(name, version, &deployment) {
                    events.push(TokenEvent::Eip712DomainChanged);
                }
                events.push(TokenEvent::Initialized {
                    version: target_version,
                });
                info!(
                    version = target_version,
                    separator = %storage.eip712.separator(),
                    "reinitialized"
                );
                Ok(())
            },
        )
    }

    fn initialized_version(&self) -> u64 {
        self.storage.read().initialization.version()
    }
}

/// Token with default config, deployed by `deployer`, on a manual clock with
/// an in-memory event log.
pub fn create_test_service(deployer: Address) -> TokenResult<TokenService<ManualClock, InMemoryEventLog>> {
    TokenService::initialize(
        &TokenConfig::default(),
        deployer,
        ManualClock::default(),
        InMemoryEventLog::new(),
    )
}

// =============================================================================
// TESTS
// =============================================================================
