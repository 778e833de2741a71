use soroban_sdk::{contractclient, Address, Env};

/// Interface of a deposit vault: `deposit` takes custody of `assets` of the
/// vault's underlying token (spent from the allowance the router grants) and
/// mints shares for `receiver`. The router trusts the returned share count
/// and does no pre-check of vault capacity or pause state.
#[contractclient(name = "VaultClient")]
pub trait DepositVault {
    fn asset(env: Env) -> Address;

    fn deposit(env: Env, assets: i128, receiver: Address) -> i128;
}
