use soroban_sdk::{contracttype, token, Address, Env, Symbol, Val, Vec};

use crate::error::RouterError;
use crate::executor;
use crate::fees;
use crate::permit::{self, SignedAuthorization};
use crate::storage;

/// How long a sell-token allowance granted to a target stays live. The
/// exhaustion check requires it to be spent within the same invocation, so
/// the window only has to outlast the current ledger.
const ALLOWANCE_LIVE_LEDGERS: u32 = storage::DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeeMode {
    /// Fee deducted from the sell amount before the swap.
    Input,
    /// Fee retained from the swap output after the swap.
    Output,
}

/// One quoted trade against an allow-listed aggregator. `call_fn` and
/// `call_args` are the aggregator's own calling convention, produced
/// off-chain; the router never interprets them.
#[contracttype]
#[derive(Clone, Debug)]
pub struct SwapRequest {
    pub sell_token: Address,
    pub buy_token: Address,
    pub target: Address,
    pub call_fn: Symbol,
    pub call_args: Vec<Val>,
    pub sell_amount: i128,
    pub fee_mode: FeeMode,
    pub fee_amount: i128,
}

pub struct Settlement {
    /// Sell-side principal actually put up for the trade (sell amount net of
    /// an input-side fee).
    pub tokens_swapped: i128,
    /// Measured buy-token balance delta of the router.
    pub output_received: i128,
}

pub fn check_request(request: &SwapRequest) -> Result<(), RouterError> {
    if request.sell_amount <= 0 || request.fee_amount < 0 {
        return Err(RouterError::InvalidAmount);
    }
    if request.fee_mode == FeeMode::Input && request.fee_amount >= request.sell_amount {
        return Err(RouterError::InvalidAmount);
    }
    Ok(())
}

/// Shared swap pipeline: snapshot, pull, exact allowance, target invocation,
/// allowance-exhaustion check, output delta. Output amounts are measured
/// from balances, never taken from the target's return data.
///
/// `authorization` selects the pull mechanism: a permit pull through the
/// transfer service, or a direct caller-authorized token transfer for the
/// native-input variant. `no_output` is the error raised when the swap
/// produced nothing, so native-output variants report `NoNativeReceived`.
pub fn settle(
    e: &Env,
    caller: &Address,
    request: &SwapRequest,
    authorization: Option<&SignedAuthorization>,
    no_output: RouterError,
) -> Result<Settlement, RouterError> {
    if !storage::is_target_approved(e, &request.target) {
        return Err(RouterError::TargetNotApproved);
    }
    check_request(request)?;

    let this = e.current_contract_address();
    let sell = token::Client::new(e, &request.sell_token);
    let buy = token::Client::new(e, &request.buy_token);

    let initial_balance = buy.balance(&this);

    match authorization {
        Some(auth) => permit::pull(e, caller, &request.sell_token, request.sell_amount, auth)?,
        None => sell.transfer(caller, &this, &request.sell_amount),
    }

    let tokens_swapped = match request.fee_mode {
        FeeMode::Input => request.sell_amount - request.fee_amount,
        FeeMode::Output => request.sell_amount,
    };

    // Exact overwrite, never additive; stale grants cannot stack.
    let live_until = e.ledger().sequence() + ALLOWANCE_LIVE_LEDGERS;
    sell.approve(&this, &request.target, &tokens_swapped, &live_until);

    executor::execute(e, &request.target, &request.call_fn, request.call_args.clone());

    // A target that does not spend its whole grant either malfunctioned or
    // left itself approved for a later drain. Both are fatal here.
    let remaining = sell.allowance(&this, &request.target);
    if remaining != 0 {
        return Err(RouterError::AllowanceNotZero);
    }

    let final_balance = buy.balance(&this);
    if final_balance <= initial_balance {
        return Err(no_output);
    }

    Ok(Settlement {
        tokens_swapped,
        output_received: final_balance - initial_balance,
    })
}

/// Pipeline plus output-side fee split, shared by every token-output variant.
pub fn settle_tokens(
    e: &Env,
    caller: &Address,
    request: &SwapRequest,
    authorization: &SignedAuthorization,
) -> Result<(Settlement, i128), RouterError> {
    let settlement = settle(
        e,
        caller,
        request,
        Some(authorization),
        RouterError::NoTokensReceived,
    )?;
    let distribution = fees::distribution_amount(
        settlement.output_received,
        request.fee_mode,
        request.fee_amount,
    )?;
    Ok((settlement, distribution))
}
