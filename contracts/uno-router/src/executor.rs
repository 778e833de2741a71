use soroban_sdk::{Address, Env, Symbol, Val, Vec};

/// Invokes an approved target with caller-supplied function and arguments.
/// The return value is opaque; settlement only trusts balance deltas. A
/// failing target aborts the whole router invocation with the target's own
/// error code, so callers see the aggregator's real failure, never a wrapper.
pub fn execute(e: &Env, target: &Address, call_fn: &Symbol, call_args: Vec<Val>) -> Val {
    e.invoke_contract::<Val>(target, call_fn, call_args)
}
