use soroban_sdk::{contracttype, Address, Env};

use crate::error::RouterError;

pub const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_TTL_THRESHOLD: u32 = DAY_IN_LEDGERS * 3;
const INSTANCE_TTL_EXTEND: u32 = DAY_IN_LEDGERS * 7;
const APPROVAL_TTL_THRESHOLD: u32 = DAY_IN_LEDGERS * 7;
const APPROVAL_TTL_EXTEND: u32 = DAY_IN_LEDGERS * 30;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    PermitService,
    NativeToken,
    Approved(Address),
    SwapLock,
}

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

/// Authorization gate for the administrative surface. The stored admin must
/// have signed the current invocation.
pub fn require_admin(e: &Env) -> Result<(), RouterError> {
    let admin: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(RouterError::Unauthorized)?;
    admin.require_auth();
    Ok(())
}

pub fn set_permit_service(e: &Env, service: &Address) {
    e.storage().instance().set(&DataKey::PermitService, service);
}

pub fn get_permit_service(e: &Env) -> Result<Address, RouterError> {
    e.storage()
        .instance()
        .get(&DataKey::PermitService)
        .ok_or(RouterError::TransferFailed)
}

pub fn set_native_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::NativeToken, token);
}

pub fn get_native_token(e: &Env) -> Result<Address, RouterError> {
    e.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .ok_or(RouterError::AssetMismatch)
}

pub fn set_target_approved(e: &Env, target: &Address, approved: bool) {
    let key = DataKey::Approved(target.clone());
    if approved {
        e.storage().persistent().set(&key, &true);
        e.storage()
            .persistent()
            .extend_ttl(&key, APPROVAL_TTL_THRESHOLD, APPROVAL_TTL_EXTEND);
    } else {
        e.storage().persistent().remove(&key);
    }
}

pub fn is_target_approved(e: &Env, target: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Approved(target.clone()))
        .unwrap_or(false)
}

/// Per-call swap lock. A failed invocation rolls the flag back together with
/// everything else, so only the success path releases explicitly.
pub fn acquire_swap_lock(e: &Env) -> Result<(), RouterError> {
    let locked: bool = e
        .storage()
        .temporary()
        .get(&DataKey::SwapLock)
        .unwrap_or(false);
    if locked {
        return Err(RouterError::ReentrantCall);
    }
    e.storage().temporary().set(&DataKey::SwapLock, &true);
    Ok(())
}

pub fn release_swap_lock(e: &Env) {
    e.storage().temporary().remove(&DataKey::SwapLock);
}

#[cfg(test)]
pub fn is_swap_locked(e: &Env) -> bool {
    e.storage()
        .temporary()
        .get(&DataKey::SwapLock)
        .unwrap_or(false)
}
