//! Integration tests for bridge access control and configuration.
//!
//! Tests role grant/revoke/renounce, the last-admin guard, validator address
//! rules, and the admin-only configuration setters.

mod helpers;

use common::{HasRoleResponse, Role, RoleMembersResponse};
use cosmwasm_std::Addr;
use cw_multi_test::Executor;

use helpers::{account, attr, deploy, local, mock_app, BridgeApp, Side, ADMIN, CHAIN_A, CHAIN_B};
use swap_bridge::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};

const VALIDATOR: &str = "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf";

fn setup() -> (BridgeApp, Side) {
    let mut app = mock_app();
    let side = deploy(
        &mut app,
        CHAIN_A,
        vec![CHAIN_B],
        vec![VALIDATOR.to_uppercase().replace("0X", "0x")],
        vec![],
    );
    (app, side)
}

fn has_role(app: &BridgeApp, side: &Side, role: Role, address: &str) -> bool {
    let res: HasRoleResponse = app
        .wrap()
        .query_wasm_smart(
            &side.bridge,
            &QueryMsg::HasRole {
                role,
                address: address.to_string(),
            },
        )
        .unwrap();
    res.has_role
}

// ============================================================================
// Bootstrap
// ============================================================================

#[test]
fn test_instantiate_roles() {
    let (app, side) = setup();

    assert!(has_role(&app, &side, Role::Admin, account(ADMIN).as_str()));
    // Validators are stored in canonical lowercase form
    assert!(has_role(&app, &side, Role::Validator, VALIDATOR));
    assert!(!has_role(
        &app,
        &side,
        Role::Validator,
        "0x1111111111111111111111111111111111111111"
    ));

    let res: RoleMembersResponse = app
        .wrap()
        .query_wasm_smart(
            &side.bridge,
            &QueryMsg::RoleMembers {
                role: Role::Validator,
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(res.members, vec![Addr::unchecked(VALIDATOR)]);
}

#[test]
fn test_instantiate_rejects_non_principal_validator() {
    let mut app = mock_app();
    let code_id = app.store_code(helpers::contract_bridge());

    let res = app.instantiate_contract(
        code_id,
        account(ADMIN),
        &InstantiateMsg {
            admin: None,
            token: account("token").to_string(),
            chain_id: CHAIN_A,
            allowed_chains: vec![],
            validators: vec![account("validator").to_string()],
            verify_init_signature: false,
        },
        &[],
        "swap-bridge",
        None,
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Invalid address: validator"));
}

#[test]
fn test_instantiate_rejects_zero_chain_id() {
    let mut app = mock_app();
    let code_id = app.store_code(helpers::contract_bridge());

    let res = app.instantiate_contract(
        code_id,
        account(ADMIN),
        &InstantiateMsg {
            admin: None,
            token: account("token").to_string(),
            chain_id: 0,
            allowed_chains: vec![],
            validators: vec![],
            verify_init_signature: false,
        },
        &[],
        "swap-bridge",
        None,
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Invalid chain ID: 0"));
}

// ============================================================================
// Grant / Revoke / Renounce
// ============================================================================

#[test]
fn test_grant_and_revoke_validator() {
    let (mut app, side) = setup();
    let new_validator = "0x1111111111111111111111111111111111111111";

    let res = app
        .execute_contract(
            account(ADMIN),
            side.bridge.clone(),
            &ExecuteMsg::GrantRole {
                role: Role::Validator,
                address: new_validator.to_string(),
            },
            &[],
        )
        .unwrap();
    assert_eq!(attr(&res, "method").unwrap(), "grant_role");
    assert_eq!(attr(&res, "role").unwrap(), "validator");
    assert_eq!(attr(&res, "changed").unwrap(), "true");
    assert!(has_role(&app, &side, Role::Validator, new_validator));

    // Re-grant is a no-op success
    let res = app
        .execute_contract(
            account(ADMIN),
            side.bridge.clone(),
            &ExecuteMsg::GrantRole {
                role: Role::Validator,
                address: new_validator.to_string(),
            },
            &[],
        )
        .unwrap();
    assert_eq!(attr(&res, "changed").unwrap(), "false");

    app.execute_contract(
        account(ADMIN),
        side.bridge.clone(),
        &ExecuteMsg::RevokeRole {
            role: Role::Validator,
            address: new_validator.to_string(),
        },
        &[],
    )
    .unwrap();
    assert!(!has_role(&app, &side, Role::Validator, new_validator));
}

#[test]
fn test_non_admin_cannot_grant() {
    let (mut app, side) = setup();

    let res = app.execute_contract(
        local(VALIDATOR),
        side.bridge.clone(),
        &ExecuteMsg::GrantRole {
            role: Role::Validator,
            address: "0x1111111111111111111111111111111111111111".to_string(),
        },
        &[],
    );

    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Unauthorized: caller lacks the admin role"),
        "Expected Unauthorized, got: {}",
        err_str
    );
}

#[test]
fn test_validator_must_be_a_principal() {
    let (mut app, side) = setup();

    let res = app.execute_contract(
        account(ADMIN),
        side.bridge.clone(),
        &ExecuteMsg::GrantRole {
            role: Role::Validator,
            address: account("validator").to_string(),
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Invalid address"));

    // Admins can be any valid address
    app.execute_contract(
        account(ADMIN),
        side.bridge.clone(),
        &ExecuteMsg::GrantRole {
            role: Role::Admin,
            address: account("second").to_string(),
        },
        &[],
    )
    .unwrap();
    assert!(has_role(&app, &side, Role::Admin, account("second").as_str()));
}

#[test]
fn test_last_admin_guard() {
    let (mut app, side) = setup();

    let res = app.execute_contract(
        account(ADMIN),
        side.bridge.clone(),
        &ExecuteMsg::RenounceRole { role: Role::Admin },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Cannot remove the last admin"));

    app.execute_contract(
        account(ADMIN),
        side.bridge.clone(),
        &ExecuteMsg::GrantRole {
            role: Role::Admin,
            address: account("second").to_string(),
        },
        &[],
    )
    .unwrap();

    // With a second admin the first may step down
    app.execute_contract(
        account(ADMIN),
        side.bridge.clone(),
        &ExecuteMsg::RenounceRole { role: Role::Admin },
        &[],
    )
    .unwrap();
    assert!(!has_role(&app, &side, Role::Admin, account(ADMIN).as_str()));

    let res = app.execute_contract(
        account("second"),
        side.bridge.clone(),
        &ExecuteMsg::RevokeRole {
            role: Role::Admin,
            address: account("second").to_string(),
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Cannot remove the last admin"));
}

#[test]
fn test_validator_can_renounce() {
    let (mut app, side) = setup();

    // The validator acts from the bech32 account behind its principal
    let res = app
        .execute_contract(
            local(VALIDATOR),
            side.bridge.clone(),
            &ExecuteMsg::RenounceRole {
                role: Role::Validator,
            },
            &[],
        )
        .unwrap();
    assert_eq!(attr(&res, "address").unwrap(), VALIDATOR);
    assert_eq!(attr(&res, "changed").unwrap(), "true");
    assert!(!has_role(&app, &side, Role::Validator, VALIDATOR));

    // An account with no principal cannot renounce a validator role
    let res = app.execute_contract(
        account("outsider"),
        side.bridge.clone(),
        &ExecuteMsg::RenounceRole {
            role: Role::Validator,
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Invalid address: caller"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_update_token_address() {
    let (mut app, side) = setup();

    let res = app.execute_contract(
        account("attacker"),
        side.bridge.clone(),
        &ExecuteMsg::UpdateTokenAddress {
            token: account("newtoken").to_string(),
        },
        &[],
    );
    assert!(res.unwrap_err().root_cause().to_string().contains("Unauthorized"));

    app.execute_contract(
        account(ADMIN),
        side.bridge.clone(),
        &ExecuteMsg::UpdateTokenAddress {
            token: account("newtoken").to_string(),
        },
        &[],
    )
    .unwrap();

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&side.bridge, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.token, account("newtoken"));
}

#[test]
fn test_set_init_signature_check() {
    let (mut app, side) = setup();

    let res = app
        .execute_contract(
            account(ADMIN),
            side.bridge.clone(),
            &ExecuteMsg::SetInitSignatureCheck { enabled: true },
            &[],
        )
        .unwrap();
    assert_eq!(attr(&res, "enabled").unwrap(), "true");

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&side.bridge, &QueryMsg::Config {})
        .unwrap();
    assert!(config.verify_init_signature);
}
