#![no_std]
//! # Uno Router
//!
//! Routes token swaps through allow-listed DEX aggregators while collecting
//! a protocol fee, pulling the sell side with off-chain-signed permit
//! authorizations instead of standing approvals. Also offers atomic
//! swap-and-send and swap-and-deposit compound operations.
//!
//! The router is a custodian of transit funds only: at the end of every
//! successful call its net sell/buy holdings for that call are back to zero
//! except for the retained fee. Output amounts are always measured as
//! balance deltas around the aggregator call, never read from the
//! aggregator's return data.

use soroban_sdk::{contract, contractimpl, token, Address, BytesN, Env, Vec};

mod error;
mod events;
mod executor;
mod fees;
mod permit;
mod settlement;
mod storage;
mod vault;

use error::RouterError;
use permit::SignedAuthorization;
use settlement::{FeeMode, SwapRequest};
use vault::VaultClient;

#[contract]
pub struct UnoRouter;

#[contractimpl]
impl UnoRouter {
    /// Deploys the router with its administrative role, the permit-transfer
    /// service it pulls through, the chain's native asset contract, and an
    /// initial set of approved swap targets.
    pub fn __constructor(
        e: Env,
        admin: Address,
        permit_service: Address,
        native_token: Address,
        initial_targets: Vec<Address>,
    ) {
        storage::set_admin(&e, &admin);
        storage::set_permit_service(&e, &permit_service);
        storage::set_native_token(&e, &native_token);
        for target in initial_targets.iter() {
            storage::set_target_approved(&e, &target, true);
        }
    }

    /// Swaps the native asset for `buy_token` through an approved target.
    ///
    /// No permit authorization: the native sell side is pulled directly from
    /// the caller under the caller's own transaction authorization. The fee
    /// is a fixed native amount taken up front from the pulled value
    /// (`fee_mode` must be `Input`); any native the target hands back beyond
    /// that fee is refunded to the caller.
    ///
    /// Returns `(tokens_swapped, output_received)`.
    pub fn swap_native_for_tokens(
        e: Env,
        caller: Address,
        request: SwapRequest,
    ) -> Result<(i128, i128), RouterError> {
        caller.require_auth();
        storage::acquire_swap_lock(&e)?;
        storage::extend_instance_ttl(&e);

        let native = storage::get_native_token(&e)?;
        if request.sell_token != native {
            return Err(RouterError::AssetMismatch);
        }
        if request.fee_mode != FeeMode::Input {
            return Err(RouterError::InvalidAmount);
        }

        let this = e.current_contract_address();
        let sell = token::Client::new(&e, &native);
        let pre_pull = sell.balance(&this);

        let settlement =
            settlement::settle(&e, &caller, &request, None, RouterError::NoTokensReceived)?;

        let leftover = sell.balance(&this) - pre_pull - request.fee_amount;
        if leftover > 0 {
            sell.transfer(&this, &caller, &leftover);
        }

        token::Client::new(&e, &request.buy_token).transfer(
            &this,
            &caller,
            &settlement.output_received,
        );

        events::swap_executed(
            &e,
            "native_to_token",
            &caller,
            &request,
            settlement.tokens_swapped,
            settlement.output_received,
            request.fee_amount,
        );
        storage::release_swap_lock(&e);
        Ok((settlement.tokens_swapped, settlement.output_received))
    }

    /// Swaps `sell_token` for `buy_token` through an approved target, pulling
    /// the sell side with a permit authorization. The distribution (output
    /// net of an output-side fee) goes to the caller.
    ///
    /// Returns `(tokens_swapped, output_received)`.
    pub fn swap_tokens_for_tokens(
        e: Env,
        caller: Address,
        request: SwapRequest,
        authorization: SignedAuthorization,
    ) -> Result<(i128, i128), RouterError> {
        caller.require_auth();
        storage::acquire_swap_lock(&e)?;
        storage::extend_instance_ttl(&e);

        let (settlement, distribution) =
            settlement::settle_tokens(&e, &caller, &request, &authorization)?;

        token::Client::new(&e, &request.buy_token).transfer(
            &e.current_contract_address(),
            &caller,
            &distribution,
        );

        events::swap_executed(
            &e,
            "token_to_token",
            &caller,
            &request,
            settlement.tokens_swapped,
            settlement.output_received,
            request.fee_amount,
        );
        storage::release_swap_lock(&e);
        Ok((settlement.tokens_swapped, settlement.output_received))
    }

    /// Swaps `sell_token` for the native asset. `request.fee_amount` is a
    /// percentage rate with 1e18 precision applied to the measured native
    /// delta (`fee_mode` must be `Output`; a zero rate is valid). Fails with
    /// `NoNativeReceived` when the swap produced no native output.
    ///
    /// Returns `(tokens_swapped, output_received)`.
    pub fn swap_tokens_for_native(
        e: Env,
        caller: Address,
        request: SwapRequest,
        authorization: SignedAuthorization,
    ) -> Result<(i128, i128), RouterError> {
        caller.require_auth();
        storage::acquire_swap_lock(&e)?;
        storage::extend_instance_ttl(&e);

        let native = storage::get_native_token(&e)?;
        if request.buy_token != native {
            return Err(RouterError::AssetMismatch);
        }
        if request.fee_mode != FeeMode::Output || request.fee_amount > fees::FEE_PRECISION {
            return Err(RouterError::InvalidAmount);
        }

        let settlement = settlement::settle(
            &e,
            &caller,
            &request,
            Some(&authorization),
            RouterError::NoNativeReceived,
        )?;

        let fee = fees::native_fee(settlement.output_received, request.fee_amount)?;
        let distribution = settlement.output_received - fee;
        if distribution > 0 {
            token::Client::new(&e, &native).transfer(
                &e.current_contract_address(),
                &caller,
                &distribution,
            );
        }

        events::swap_executed(
            &e,
            "token_to_native",
            &caller,
            &request,
            settlement.tokens_swapped,
            settlement.output_received,
            fee,
        );
        storage::release_swap_lock(&e);
        Ok((settlement.tokens_swapped, settlement.output_received))
    }

    /// Token-to-token swap whose distribution is sent to `recipient` instead
    /// of the caller. Emits the base swap event plus a dedicated
    /// swap-and-send event.
    pub fn swap_and_send(
        e: Env,
        caller: Address,
        recipient: Address,
        request: SwapRequest,
        authorization: SignedAuthorization,
    ) -> Result<(i128, i128), RouterError> {
        caller.require_auth();
        storage::acquire_swap_lock(&e)?;
        storage::extend_instance_ttl(&e);

        if recipient == e.current_contract_address() {
            return Err(RouterError::InvalidRecipient);
        }

        let (settlement, distribution) =
            settlement::settle_tokens(&e, &caller, &request, &authorization)?;

        token::Client::new(&e, &request.buy_token).transfer(
            &e.current_contract_address(),
            &recipient,
            &distribution,
        );

        events::swap_executed(
            &e,
            "token_to_token",
            &caller,
            &request,
            settlement.tokens_swapped,
            settlement.output_received,
            request.fee_amount,
        );
        events::swap_and_send(&e, &caller, &recipient, &request.buy_token, distribution);
        storage::release_swap_lock(&e);
        Ok((settlement.tokens_swapped, settlement.output_received))
    }

    /// Token-to-token swap whose distribution is deposited into `vault` for
    /// `receiver`. The vault must declare `request.buy_token` as its
    /// underlying asset; it is granted an exact allowance for the
    /// distribution and trusted to mint shares correctly.
    ///
    /// Returns the share count minted by the vault.
    pub fn swap_and_deposit(
        e: Env,
        caller: Address,
        vault: Address,
        receiver: Address,
        request: SwapRequest,
        authorization: SignedAuthorization,
    ) -> Result<i128, RouterError> {
        caller.require_auth();
        storage::acquire_swap_lock(&e)?;
        storage::extend_instance_ttl(&e);

        let vault_client = VaultClient::new(&e, &vault);
        if vault_client.asset() != request.buy_token {
            return Err(RouterError::AssetMismatch);
        }

        let (settlement, distribution) =
            settlement::settle_tokens(&e, &caller, &request, &authorization)?;

        let this = e.current_contract_address();
        let live_until = e.ledger().sequence() + storage::DAY_IN_LEDGERS;
        token::Client::new(&e, &request.buy_token).approve(
            &this,
            &vault,
            &distribution,
            &live_until,
        );
        let shares = vault_client.deposit(&distribution, &receiver);

        events::swap_executed(
            &e,
            "token_to_token",
            &caller,
            &request,
            settlement.tokens_swapped,
            settlement.output_received,
            request.fee_amount,
        );
        events::swap_and_deposit(&e, &caller, &vault, &receiver, distribution, shares);
        storage::release_swap_lock(&e);
        Ok(shares)
    }

    /// Adds or removes a swap target. Admin only. The matching added/removed
    /// event is emitted even when the call does not change state.
    pub fn set_approval(e: Env, target: Address, approved: bool) -> Result<(), RouterError> {
        storage::require_admin(&e)?;
        storage::extend_instance_ttl(&e);
        storage::set_target_approved(&e, &target, approved);
        events::target_approval(&e, &target, approved);
        Ok(())
    }

    pub fn is_approved(e: Env, target: Address) -> bool {
        storage::is_target_approved(&e, &target)
    }

    /// Sweeps the router's entire balance of `token` to `to`. Admin only.
    /// The fee pool is not tracked separately, so reconciling against
    /// in-flight activity is the admin's responsibility.
    pub fn withdraw_token(e: Env, token: Address, to: Address) -> Result<i128, RouterError> {
        storage::require_admin(&e)?;
        storage::extend_instance_ttl(&e);
        let this = e.current_contract_address();
        let client = token::Client::new(&e, &token);
        let amount = client.balance(&this);
        if amount > 0 {
            client.transfer(&this, &to, &amount);
        }
        events::withdrawal(&e, &token, &to, amount);
        Ok(amount)
    }

    /// Sweeps the router's native-asset balance to `to`. Admin only.
    pub fn withdraw_native(e: Env, to: Address) -> Result<i128, RouterError> {
        let native = storage::get_native_token(&e)?;
        Self::withdraw_token(e, native, to)
    }

    /// Replaces the contract's wasm while preserving the allow-list, the
    /// configuration, and accrued balances. Admin only.
    pub fn upgrade(e: Env, new_wasm_hash: BytesN<32>) -> Result<(), RouterError> {
        storage::require_admin(&e)?;
        e.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }
}
