//! # Logic Swap and Reinitialization
//!
//! A swap is modelled as serializing [`TokenStorage`], dropping the service,
//! and opening a new service over the restored storage. Persistent state must
//! come through untouched; only the reinitializer may change domain metadata.
//!
//! [`TokenStorage`]: bridge_token::prelude::TokenStorage

#[cfg(test)]
mod tests {
    use crate::fixtures::{authorization, random_signer, sign, Deployment, GENESIS_TIME};
    use bridge_token::prelude::*;

    fn swap_logic(d: Deployment) -> TokenService<ManualClock, InMemoryEventLog> {
        let json = d.token.into_storage().to_json().expect("serialize storage");
        let storage = TokenStorage::from_json(&json).expect("restore storage");
        TokenService::from_storage(storage, ManualClock::new(GENESIS_TIME), InMemoryEventLog::new())
    }

    #[test]
    fn test_state_survives_logic_swap() {
        let d = Deployment::new();
        let holder = Address::repeat_byte(0x0A);
        let operator = Address::repeat_byte(0x0F);
        let deployer = d.deployer;
        let bridge = d.bridge;

        let signer = random_signer();
        d.fund(signer.address(), 50);
        d.fund(holder, 1_234);
        let auth = authorization(signer.address(), holder, 50);
        let sig = sign(&d.token, &signer, &auth);
        d.token
            .transfer_with_authorization(holder, &auth, &sig)
            .unwrap();
        d.token
            .grant_role(deployer, Role::Pauser.id(), operator)
            .unwrap();
        d.token.pause(operator).unwrap();

        let before = d.token.snapshot();
        let token = swap_logic(d);

        assert_eq!(token.snapshot(), before);
        assert_eq!(token.balance_of(&holder), U256::from(1_284u64));
        assert!(token.paused());
        assert!(token.has_role(&Role::Pauser.id(), &operator));
        assert!(token.authorization_state(&signer.address(), &auth.nonce));
        assert_eq!(token.bridge(), bridge);
        assert_eq!(token.initialized_version(), 1);
    }

    #[test]
    fn test_v2_reinitialize_after_swap() {
        let d = Deployment::new();
        let deployer = d.deployer;
        d.fund(Address::repeat_byte(0x0A), 99);
        let before = d.token.snapshot();

        let token = swap_logic(d);
        token.reinitialize(deployer, 2, "Presearch", "1").unwrap();

        let after = token.snapshot();
        assert_eq!(after.ledger, before.ledger);
        assert_eq!(after.roles, before.roles);
        assert_eq!(after.pause, before.pause);
        assert_eq!(after.bridge, before.bridge);
        assert_eq!(after.nonces, before.nonces);
        assert_eq!(after.metadata, before.metadata);
        assert_eq!(after.deployment, before.deployment);

        assert_eq!(token.initialized_version(), 2);
        assert_eq!(token.domain_info().name, "Presearch");
        assert_eq!(token.domain_info().version, "1");
        assert_eq!(token.name(), "Presearch");
        assert!(check_storage(&after).is_ok());
    }

    #[test]
    fn test_reinitialize_runs_once_per_version() {
        let d = Deployment::new();
        d.upgrade_to_v2();
        let separator = d.token.domain_separator();

        for target in [1, 2] {
            let err = d
                .token
                .reinitialize(d.deployer, target, "Hijack", "9")
                .unwrap_err();
            assert_eq!(
                err,
                TokenError::AlreadyInitialized {
                    current: 2,
                    target
                }
            );
        }
        assert_eq!(d.token.domain_separator(), separator);
        assert_eq!(d.token.initialized_version(), 2);

        d.token.reinitialize(d.deployer, 3, "Presearch", "2").unwrap();
        assert_eq!(d.token.initialized_version(), 3);
        assert_ne!(d.token.domain_separator(), separator);
    }

    #[test]
    fn test_reinitialize_requires_admin() {
        let d = Deployment::new();
        let err = d
            .token
            .reinitialize(d.treasury, 2, "Presearch", "1")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(d.token.initialized_version(), 1);
    }

    #[test]
    fn test_reinitialize_allowed_while_paused() {
        let d = Deployment::new();
        d.token.pause(d.deployer).unwrap();
        d.upgrade_to_v2();
        assert!(d.token.paused());
        assert_eq!(d.token.initialized_version(), 2);
    }

    #[test]
    fn test_reinitialize_events() {
        let d = Deployment::new();
        d.upgrade_to_v2();
        assert_eq!(
            d.token.sink().events(),
            vec![
                TokenEvent::Eip712DomainChanged,
                TokenEvent::Initialized { version: 2 },
            ]
        );
    }

    #[test]
    fn test_storage_json_is_stable_across_roundtrips() {
        let d = Deployment::new();
        d.fund(Address::repeat_byte(1), 5);
        let storage = d.token.snapshot();

        let once = TokenStorage::from_json(&storage.to_json().unwrap()).unwrap();
        let twice = TokenStorage::from_json(&once.to_json().unwrap()).unwrap();
        assert_eq!(once, storage);
        assert_eq!(twice, storage);
    }
}
