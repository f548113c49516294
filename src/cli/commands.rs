//! The walkthrough command loop and its individual steps.
//!
//! Tokens are matched case-insensitively against the command vocabulary and
//! processed strictly in order. Each step is one blocking sequence of calls
//! through the [`LedgerClient`] seam. Ledger failures abort the run; tokens
//! outside the vocabulary only produce a diagnostic on stdout and the loop
//! moves on.

use crate::artifact;
use crate::config::Settings;
use crate::ledger::{
    AccountId, ContractFunctionParameters, ContractId, FileId, Hbar, LedgerClient, PrivateKey,
    PublicKey,
};
use crate::logging;
use crate::ui::formatter::Formatter;
use crate::Result;
use anyhow::Context;

/// Message handed to the HelloHedera constructor at deployment.
const DEPLOY_MESSAGE: &str = "Hello from Hedera!";

/// Message written by the modify-contract-state step.
const UPDATED_MESSAGE: &str = "Hello from Hedera, again!";

/// Payment attached to the get_message query.
const QUERY_PAYMENT: Hbar = Hbar::new(2);

fn print_info(message: impl AsRef<str>) {
    println!("{}", Formatter::info(message));
}

fn print_success(message: impl AsRef<str>) {
    println!("{}", Formatter::success(message));
}

/// A keypair and the account it controls.
#[derive(Debug, Clone)]
pub struct AccountInfo {
    pub account_id: AccountId,
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

/// A deployed contract and the file holding its bytecode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractInfo {
    pub file_id: FileId,
    pub contract_id: ContractId,
}

/// What the walkthrough has built up so far. Later steps depend on the
/// entities earlier steps created.
#[derive(Debug, Default)]
pub struct WalkthroughState {
    pub new_account: Option<AccountInfo>,
    pub contract: Option<ContractInfo>,
    pub last_message: Option<String>,
}

/// Run the given command tokens, in order, against `client`.
pub fn run_walkthrough(
    client: &mut impl LedgerClient,
    settings: &Settings,
    commands: &[String],
) -> Result<WalkthroughState> {
    let mut state = WalkthroughState::default();

    for token in commands {
        match token.to_lowercase().as_str() {
            "create-account" | "ca" => {
                state.new_account = Some(create_account_and_transfer(client, settings)?);
            }
            "deploy-contract" | "dsc" => {
                state.contract = Some(deploy_contract(client, settings)?);
            }
            "call-contract" | "csc" => {
                let contract = state
                    .contract
                    .as_ref()
                    .context("no contract deployed yet; run deploy-contract first")?;
                state.last_message = Some(call_contract(client, settings, contract)?);
            }
            "modify-contract-state" | "mcs" => {
                let contract = state
                    .contract
                    .as_ref()
                    .context("no contract deployed yet; run deploy-contract first")?;
                modify_contract_state(client, settings, contract)?;
            }
            "sleep" | "sl" => pause(settings),
            _ => {
                logging::log_unknown_command(token);
                println!(
                    "{}",
                    Formatter::warning(format!("*** Unknown command: '{}'", token))
                );
            }
        }
    }

    Ok(state)
}

/// Generate a keypair, create an account for it, then fund it with a
/// zero-net transfer from the operator.
fn create_account_and_transfer(
    client: &mut impl LedgerClient,
    settings: &Settings,
) -> Result<AccountInfo> {
    print_info("Creating a new account and transferring hbar...");

    let private_key = PrivateKey::generate_ed25519();
    let public_key = private_key.public_key();
    print_info("Generated ED25519 keypair:");
    print_info(Formatter::format_keypair(
        &private_key.to_string(),
        &public_key.to_string(),
    ));

    let receipt = client.create_account(&public_key, settings.initial_balance)?;
    let account_id = receipt
        .account_id
        .context("account create receipt carried no account id")?;
    print_success(format!("New account ID: {}", account_id));
    logging::log_account_created(
        &account_id.to_string(),
        &settings.initial_balance.to_string(),
    );

    let balance = client.account_balance(account_id)?;
    print_info(format!("New account balance: {}", balance.hbars));
    logging::log_balance(&account_id.to_string(), &balance.hbars.to_string());

    let operator_id = settings.operator.account_id;
    let receipt = client.transfer_hbar(&[
        (operator_id, -settings.initial_balance),
        (account_id, settings.initial_balance),
    ])?;
    print_success(format!("Transfer status: {}", receipt.status));
    logging::log_transfer(
        &operator_id.to_string(),
        &account_id.to_string(),
        &settings.initial_balance.to_string(),
    );

    let cost = client.account_balance_cost(account_id)?;
    print_info(format!("Cost to ask account balance: {}", cost));

    let balance = client.account_balance(account_id)?;
    print_info(format!("New account balance is: {}", balance.hbars));

    Ok(AccountInfo {
        account_id,
        private_key,
        public_key,
    })
}

/// Store the bundled bytecode on the ledger, then instantiate the contract
/// from it.
fn deploy_contract(client: &mut impl LedgerClient, settings: &Settings) -> Result<ContractInfo> {
    print_info("Deploying the HelloHedera contract...");
    logging::log_loading_artifact(artifact::CONTRACT_ARTIFACT_NAME);

    let bytecode = artifact::contract_bytecode().context("failed to load contract bytecode")?;
    logging::log_bytecode_resolved(bytecode.len());

    let receipt = client.create_file(&bytecode)?;
    let file_id = receipt
        .file_id
        .context("file create receipt carried no file id")?;
    print_success(format!("New contract file ID: {}", file_id));
    logging::log_file_created(&file_id.to_string(), bytecode.len());

    let receipt = client.create_contract(
        file_id,
        settings.gas,
        &ContractFunctionParameters::new().add_string(DEPLOY_MESSAGE),
    )?;
    let contract_id = receipt
        .contract_id
        .context("contract create receipt carried no contract id")?;
    print_success(format!("New contract ID: {}", contract_id));
    logging::log_contract_deployed(&contract_id.to_string());

    Ok(ContractInfo {
        file_id,
        contract_id,
    })
}

/// Query the contract's current message.
fn call_contract(
    client: &mut impl LedgerClient,
    settings: &Settings,
    contract: &ContractInfo,
) -> Result<String> {
    logging::log_contract_call("get_message");

    let result = client.call_contract(
        contract.contract_id,
        settings.gas,
        "get_message",
        QUERY_PAYMENT,
    )?;
    let message = result
        .get_str(0)
        .context("get_message returned no string")?
        .to_owned();
    print_success(format!(
        "{} returns: {}",
        Formatter::format_function_call("get_message", None),
        message
    ));

    Ok(message)
}

/// Overwrite the contract's message.
fn modify_contract_state(
    client: &mut impl LedgerClient,
    settings: &Settings,
    contract: &ContractInfo,
) -> Result<()> {
    logging::log_contract_call("set_message");

    let receipt = client.execute_contract(
        contract.contract_id,
        settings.gas,
        "set_message",
        &ContractFunctionParameters::new().add_string(UPDATED_MESSAGE),
    )?;
    print_success(format!("set_message status: {}", receipt.status));

    Ok(())
}

fn pause(settings: &Settings) {
    let millis = settings.sleep.as_millis() as u64;
    print_info(format!("Sleeping {}ms...", millis));
    logging::log_sleep(millis);
    std::thread::sleep(settings.sleep);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Operator;
    use crate::simulator::SimulatedTestnet;
    use std::time::Duration;

    fn test_settings() -> Settings {
        let private_key = PrivateKey::generate_ed25519();
        Settings {
            operator: Operator {
                account_id: AccountId::new(0, 0, 2),
                public_key: private_key.public_key(),
                private_key,
            },
            gas: 100_000,
            sleep: Duration::from_millis(1),
            initial_balance: Hbar::from_tinybars(1000),
        }
    }

    fn test_client(settings: &Settings) -> SimulatedTestnet {
        let mut client = SimulatedTestnet::for_testnet();
        client.set_operator(
            settings.operator.account_id,
            settings.operator.private_key.clone(),
        );
        client
    }

    fn tokens(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| (*t).to_owned()).collect()
    }

    #[test]
    fn full_walkthrough_builds_all_state() {
        let settings = test_settings();
        let mut client = test_client(&settings);

        let state =
            run_walkthrough(&mut client, &settings, &tokens(&["ca", "dsc", "csc", "mcs"])).unwrap();

        let account = state.new_account.unwrap();
        assert_eq!(
            client.account_balance(account.account_id).unwrap().hbars,
            Hbar::from_tinybars(2000)
        );
        let contract = state.contract.unwrap();
        assert_eq!(
            client.contract_message(contract.contract_id),
            Some("Hello from Hedera, again!")
        );
        assert_eq!(state.last_message.as_deref(), Some("Hello from Hedera!"));
    }

    #[test]
    fn calling_again_after_modify_reads_the_new_message() {
        let settings = test_settings();
        let mut client = test_client(&settings);

        let state = run_walkthrough(
            &mut client,
            &settings,
            &tokens(&["dsc", "csc", "mcs", "csc"]),
        )
        .unwrap();
        assert_eq!(
            state.last_message.as_deref(),
            Some("Hello from Hedera, again!")
        );
    }

    #[test]
    fn tokens_match_case_insensitively() {
        let settings = test_settings();
        let mut client = test_client(&settings);

        let state = run_walkthrough(
            &mut client,
            &settings,
            &tokens(&["Deploy-Contract", "CSC"]),
        )
        .unwrap();
        assert!(state.contract.is_some());
        assert_eq!(state.last_message.as_deref(), Some("Hello from Hedera!"));
    }

    #[test]
    fn unknown_tokens_are_skipped_without_aborting() {
        let settings = test_settings();
        let mut client = test_client(&settings);

        let state = run_walkthrough(
            &mut client,
            &settings,
            &tokens(&["frobnicate", "dsc", "also-not-a-command", "csc"]),
        )
        .unwrap();
        assert!(state.contract.is_some());
        assert!(state.last_message.is_some());
    }

    #[test]
    fn contract_steps_require_a_deployment() {
        let settings = test_settings();
        let mut client = test_client(&settings);

        let err = run_walkthrough(&mut client, &settings, &tokens(&["csc"])).unwrap_err();
        assert!(err.to_string().contains("deploy-contract"));

        let err = run_walkthrough(&mut client, &settings, &tokens(&["mcs"])).unwrap_err();
        assert!(err.to_string().contains("deploy-contract"));
    }

    #[test]
    fn sleep_token_is_recognized() {
        let settings = Settings {
            sleep: Duration::from_millis(1),
            ..test_settings()
        };
        let mut client = test_client(&settings);

        let state = run_walkthrough(&mut client, &settings, &tokens(&["sl", "sleep"])).unwrap();
        assert!(state.new_account.is_none());
        assert!(state.contract.is_none());
    }

    #[test]
    fn empty_token_list_is_a_no_op() {
        let settings = test_settings();
        let mut client = test_client(&settings);

        let state = run_walkthrough(&mut client, &settings, &[]).unwrap();
        assert!(state.new_account.is_none());
        assert!(state.contract.is_none());
        assert!(state.last_message.is_none());
    }
}
