use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouterError {
    /// Swap target is not on the allow-list
    TargetNotApproved = 1,
    /// The permit service rejected the delegated pull
    TransferFailed = 2,
    /// Target left part of its sell-token allowance unspent
    AllowanceNotZero = 3,
    /// Swap produced no buy-token output
    NoTokensReceived = 4,
    /// Swap produced no native output
    NoNativeReceived = 5,
    /// Output-side fee exceeds what the swap produced
    FeeExceedsOutput = 6,
    /// Amount, fee, or fee rate out of range
    InvalidAmount = 7,
    /// Caller is not the admin
    Unauthorized = 8,
    /// Token does not match what the operation requires
    AssetMismatch = 9,
    /// Distribution recipient must not be the router itself
    InvalidRecipient = 10,
    /// A swap entry point was re-entered mid-swap
    ReentrantCall = 11,
}
