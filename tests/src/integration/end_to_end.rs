//! # End-to-End Ledger Flows
//!
//! Deploy, transfer, batch, bridge supply, pause, and roles, driven through
//! the public API only.

#[cfg(test)]
mod tests {
    use crate::fixtures::Deployment;
    use bridge_token::prelude::*;

    fn x() -> Address {
        Address::repeat_byte(0x0A)
    }

    fn y() -> Address {
        Address::repeat_byte(0x0B)
    }

    fn assert_supply_invariant(deployment: &Deployment) {
        let storage = deployment.token.snapshot();
        check_supply_invariants(&storage).expect("supply invariant");
        assert!(deployment.token.total_supply() <= deployment.token.cap());
    }

    // =========================================================================
    // DEPLOYMENT
    // =========================================================================

    #[test]
    fn test_deployment_matches_live_token() {
        let d = Deployment::new();
        let token = &d.token;

        assert_eq!(token.name(), "Presearch");
        assert_eq!(token.symbol(), "PRE");
        assert_eq!(token.decimals(), 18);
        assert_eq!(token.total_supply(), units(500_000_000, 18));
        assert_eq!(token.cap(), units(1_000_000_000, 18));
        assert_eq!(token.balance_of(&d.treasury), units(500_000_000, 18));
        assert_eq!(token.balance_of(&d.deployer), U256::zero());

        let bridge: Address = STANDARD_BRIDGE.parse().unwrap();
        assert_eq!(token.bridge(), bridge);
        assert_eq!(token.l2_bridge(), bridge);

        let l1: Address = "0xEC213F83defB583af3A000B1c0ada660b1902A0F".parse().unwrap();
        assert_eq!(token.remote_token(), l1);
        assert_eq!(token.l1_token(), l1);
    }

    #[test]
    fn test_deployer_holds_each_role_alone() {
        let d = Deployment::new();
        for role in Role::ALL {
            assert!(d.token.has_role(&role.id(), &d.deployer));
            assert_eq!(d.token.get_role_member_count(&role.id()), 1);
            assert_eq!(d.token.get_role_member(&role.id(), 0), Some(d.deployer));
            assert_eq!(d.token.get_role_admin(&role.id()), DEFAULT_ADMIN_ROLE);
        }
    }

    // =========================================================================
    // TRANSFERS
    // =========================================================================

    #[test]
    fn test_transfer_then_batch() {
        let d = Deployment::new();

        d.token
            .transfer(d.treasury, x(), U256::from(100u64))
            .unwrap();
        assert_eq!(d.token.balance_of(&x()), U256::from(100u64));

        d.token
            .transfer_batch(
                d.treasury,
                &[x(), y()],
                &[U256::from(100u64), U256::from(100u64)],
            )
            .unwrap();
        assert_eq!(d.token.balance_of(&x()), U256::from(200u64));
        assert_eq!(d.token.balance_of(&y()), U256::from(100u64));
        assert_eq!(
            d.token.balance_of(&d.treasury),
            units(500_000_000, 18) - U256::from(300u64)
        );
        assert_supply_invariant(&d);
    }

    #[test]
    fn test_batch_needs_full_amount() {
        let d = Deployment::new();
        let sender = Address::repeat_byte(0x5E);

        d.fund(sender, 199);
        let err = d
            .token
            .transfer_batch(sender, &[x(), y()], &[U256::from(100u64), U256::from(100u64)])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientBalance);

        d.fund(sender, 1);
        d.token
            .transfer_batch(sender, &[x(), y()], &[U256::from(100u64), U256::from(100u64)])
            .unwrap();
        assert_eq!(d.token.balance_of(&sender), U256::zero());
    }

    #[test]
    fn test_batch_second_leg_failure_reverts_first() {
        let d = Deployment::new();
        let sender = Address::repeat_byte(0x5E);
        d.fund(sender, 150);
        d.token.sink().drain();
        let before = d.token.snapshot();

        let err = d
            .token
            .transfer_batch(sender, &[x(), y()], &[U256::from(100u64), U256::from(100u64)])
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InsufficientBalance);
        assert_eq!(d.token.balance_of(&x()), U256::zero());
        assert_eq!(d.token.balance_of(&sender), U256::from(150u64));
        assert_eq!(d.token.snapshot(), before);
        assert!(d.token.sink().is_empty());
    }

    #[test]
    fn test_batch_length_mismatch() {
        let d = Deployment::new();
        let err = d
            .token
            .transfer_batch(d.treasury, &[x(), y()], &[U256::one()])
            .unwrap_err();
        assert_eq!(
            err,
            TokenError::LengthMismatch {
                recipients: 2,
                amounts: 1
            }
        );
    }

    #[test]
    fn test_insufficient_funds_leaves_balances() {
        let d = Deployment::new();
        d.fund(x(), 500);

        let err = d.token.transfer(x(), y(), U256::from(501u64)).unwrap_err();
        assert_eq!(
            err,
            TokenError::InsufficientBalance {
                account: x(),
                balance: U256::from(500u64),
                needed: U256::from(501u64),
            }
        );
        assert_eq!(d.token.balance_of(&x()), U256::from(500u64));
        assert_eq!(d.token.balance_of(&y()), U256::zero());
    }

    #[test]
    fn test_transfer_to_zero_address_rejected() {
        let d = Deployment::new();
        let err = d
            .token
            .transfer(d.treasury, Address::ZERO, U256::one())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidReceiver);
    }

    // =========================================================================
    // BRIDGE SUPPLY
    // =========================================================================

    #[test]
    fn test_only_bridge_mints_and_burns() {
        let d = Deployment::new();

        for caller in [d.deployer, d.treasury, x()] {
            let err = d.token.mint(caller, x(), U256::one()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OnlyBridge);
            assert_eq!(err.reason(), "only bridge can mint and burn");

            let err = d.token.burn(caller, d.treasury, U256::one()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OnlyBridge);
        }
        assert_eq!(d.token.total_supply(), units(500_000_000, 18));
    }

    #[test]
    fn test_bridge_round_trip() {
        let d = Deployment::new();

        d.token.mint(d.bridge, x(), units(1_000, 18)).unwrap();
        assert_eq!(d.token.balance_of(&x()), units(1_000, 18));
        assert_eq!(d.token.total_supply(), units(500_001_000, 18));

        d.token.burn(d.bridge, x(), units(1_000, 18)).unwrap();
        assert_eq!(d.token.balance_of(&x()), U256::zero());
        assert_eq!(d.token.total_supply(), units(500_000_000, 18));

        let err = d.token.burn(d.bridge, x(), U256::one()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientBalance);
        assert_supply_invariant(&d);
    }

    #[test]
    fn test_mint_beyond_cap_rejected() {
        let d = Deployment::new();

        d.token.mint(d.bridge, x(), units(500_000_000, 18)).unwrap();
        assert_eq!(d.token.total_supply(), d.token.cap());

        let err = d.token.mint(d.bridge, x(), U256::one()).unwrap_err();
        assert_eq!(
            err,
            TokenError::CapExceeded {
                cap: units(1_000_000_000, 18),
                would_be: units(1_000_000_000, 18) + U256::one(),
            }
        );
        assert_eq!(d.token.total_supply(), d.token.cap());
    }

    // =========================================================================
    // PAUSE
    // =========================================================================

    #[test]
    fn test_pause_halts_ledger_but_not_reads() {
        let d = Deployment::new();
        d.fund(x(), 10);
        d.token.pause(d.deployer).unwrap();

        assert_eq!(
            d.token.transfer(x(), y(), U256::one()).unwrap_err(),
            TokenError::ContractPaused
        );
        assert_eq!(
            d.token
                .transfer_batch(x(), &[y()], &[U256::one()])
                .unwrap_err(),
            TokenError::ContractPaused
        );
        assert_eq!(
            d.token.mint(d.bridge, x(), U256::one()).unwrap_err(),
            TokenError::ContractPaused
        );
        assert_eq!(
            d.token.burn(d.bridge, x(), U256::one()).unwrap_err(),
            TokenError::ContractPaused
        );

        assert!(d.token.paused());
        assert_eq!(d.token.balance_of(&x()), U256::from(10u64));

        d.token.unpause(d.deployer).unwrap();
        d.token.transfer(x(), y(), U256::one()).unwrap();
    }

    #[test]
    fn test_pause_by_non_pauser() {
        let d = Deployment::new();
        assert_eq!(
            d.token.pause(d.treasury).unwrap_err().kind(),
            ErrorKind::Unauthorized
        );

        d.token.pause(d.deployer).unwrap();
        assert_eq!(
            d.token.unpause(d.treasury).unwrap_err().kind(),
            ErrorKind::Unauthorized
        );
        assert!(d.token.paused());
    }

    #[test]
    fn test_pause_events() {
        let d = Deployment::new();
        d.token.pause(d.deployer).unwrap();
        d.token.unpause(d.deployer).unwrap();

        assert_eq!(
            d.token.sink().events(),
            vec![
                TokenEvent::Paused {
                    account: d.deployer
                },
                TokenEvent::Unpaused {
                    account: d.deployer
                },
            ]
        );
    }

    // =========================================================================
    // ROLES
    // =========================================================================

    #[test]
    fn test_delegated_pauser() {
        let d = Deployment::new();
        let operator = Address::repeat_byte(0x0F);
        let pauser = Role::Pauser.id();

        d.token.grant_role(d.deployer, pauser, operator).unwrap();
        d.token.pause(operator).unwrap();
        d.token.unpause(operator).unwrap();

        d.token.renounce_role(operator, pauser, operator).unwrap();
        assert_eq!(
            d.token.pause(operator).unwrap_err().kind(),
            ErrorKind::Unauthorized
        );
    }

    #[test]
    fn test_admin_can_hand_over_admin() {
        let d = Deployment::new();
        let multisig = Address::repeat_byte(0x33);

        d.token
            .grant_role(d.deployer, DEFAULT_ADMIN_ROLE, multisig)
            .unwrap();
        d.token
            .revoke_role(multisig, DEFAULT_ADMIN_ROLE, d.deployer)
            .unwrap();

        assert_eq!(d.token.get_role_member(&DEFAULT_ADMIN_ROLE, 0), Some(multisig));
        assert_eq!(d.token.get_role_member_count(&DEFAULT_ADMIN_ROLE), 1);
        assert_eq!(
            d.token
                .grant_role(d.deployer, Role::Pauser.id(), d.deployer)
                .unwrap_err()
                .kind(),
            ErrorKind::Unauthorized
        );
    }

    #[test]
    fn test_stats_count_calls() {
        let d = Deployment::new();
        d.fund(x(), 1);
        let _ = d.token.transfer(y(), x(), U256::one());

        let stats = d.token.stats();
        assert_eq!(stats.calls, 2);
        assert_eq!(stats.succeeded, 1);
        assert_eq!(stats.rejected, 1);
    }
}
