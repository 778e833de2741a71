use crate::error::RouterError;
use crate::settlement::FeeMode;

/// Precision of the percentage fee rate used by token-to-native swaps.
/// A rate equal to the precision is a 100% fee; zero is a valid no-fee case.
pub const FEE_PRECISION: i128 = 1_000_000_000_000_000_000;

/// Amount of the swap output that leaves the router. For input-side fees the
/// fee was already removed from the swapped principal, so the full output is
/// distributed; for output-side fees the fee stays behind as protocol
/// revenue and must never exceed what the swap produced.
pub fn distribution_amount(
    output_received: i128,
    fee_mode: FeeMode,
    fee_amount: i128,
) -> Result<i128, RouterError> {
    match fee_mode {
        FeeMode::Input => Ok(output_received),
        FeeMode::Output => {
            if fee_amount > output_received {
                return Err(RouterError::FeeExceedsOutput);
            }
            Ok(output_received - fee_amount)
        }
    }
}

/// Percentage fee on a native output delta: `floor(delta * rate / 1e18)`.
pub fn native_fee(native_delta: i128, fee_rate: i128) -> Result<i128, RouterError> {
    let fee = native_delta
        .checked_mul(fee_rate)
        .ok_or(RouterError::InvalidAmount)?
        / FEE_PRECISION;
    Ok(fee)
}
