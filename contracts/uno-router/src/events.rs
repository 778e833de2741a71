use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::settlement::SwapRequest;

/// Base swap event, one per variant. Topics: `("swap", kind, caller)`;
/// data carries the full settlement picture for off-chain analytics.
pub fn swap_executed(
    e: &Env,
    kind: &str,
    caller: &Address,
    request: &SwapRequest,
    tokens_swapped: i128,
    output_received: i128,
    fee_amount: i128,
) {
    e.events().publish(
        (symbol_short!("swap"), Symbol::new(e, kind), caller.clone()),
        (
            request.sell_token.clone(),
            request.buy_token.clone(),
            request.target.clone(),
            tokens_swapped,
            output_received,
            request.fee_mode,
            fee_amount,
        ),
    );
}

pub fn swap_and_send(e: &Env, caller: &Address, recipient: &Address, buy_token: &Address, amount: i128) {
    e.events().publish(
        (symbol_short!("swap_send"), caller.clone(), recipient.clone()),
        (buy_token.clone(), amount),
    );
}

pub fn swap_and_deposit(
    e: &Env,
    caller: &Address,
    vault: &Address,
    receiver: &Address,
    assets: i128,
    shares: i128,
) {
    e.events().publish(
        (symbol_short!("swap_dep"), caller.clone(), vault.clone()),
        (receiver.clone(), assets, shares),
    );
}

/// Emitted on every `set_approval` call; the direction follows the requested
/// flag, so removing an already-absent target still announces the removal.
pub fn target_approval(e: &Env, target: &Address, approved: bool) {
    let action = if approved {
        symbol_short!("added")
    } else {
        symbol_short!("removed")
    };
    e.events()
        .publish((symbol_short!("target"), action), target.clone());
}

pub fn withdrawal(e: &Env, token: &Address, to: &Address, amount: i128) {
    e.events()
        .publish((symbol_short!("withdraw"), token.clone()), (to.clone(), amount));
}
