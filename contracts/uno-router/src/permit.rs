use soroban_sdk::{contractclient, contracttype, Address, Bytes, Env};

use crate::error::RouterError;
use crate::storage;

/// Off-chain-signed transfer authorization, supplied by the caller and
/// verified entirely by the permit service. The router forwards it opaquely;
/// replay protection and expiry live in the service.
#[contracttype]
#[derive(Clone, Debug)]
pub struct SignedAuthorization {
    pub nonce: u64,
    pub deadline: u64,
    pub signature: Bytes,
}

/// Interface of the external permit-transfer service. Moves
/// `requested_amount` of `token` from `owner` to `destination` against a
/// signed authorization, rejecting invalid signatures, expired deadlines,
/// consumed nonces, and requests above the permitted amount.
#[contractclient(name = "PermitServiceClient")]
pub trait PermitService {
    fn permit_transfer_from(
        env: Env,
        owner: Address,
        token: Address,
        permitted_amount: i128,
        requested_amount: i128,
        nonce: u64,
        deadline: u64,
        destination: Address,
        signature: Bytes,
    );
}

/// Pulls exactly `amount` of `token` from `owner` into the router's custody.
/// All-or-nothing: any rejection by the service surfaces as `TransferFailed`.
pub fn pull(
    e: &Env,
    owner: &Address,
    token: &Address,
    amount: i128,
    authorization: &SignedAuthorization,
) -> Result<(), RouterError> {
    let service = storage::get_permit_service(e)?;
    let client = PermitServiceClient::new(e, &service);
    match client.try_permit_transfer_from(
        owner,
        token,
        &amount,
        &amount,
        &authorization.nonce,
        &authorization.deadline,
        &e.current_contract_address(),
        &authorization.signature,
    ) {
        Ok(_) => Ok(()),
        Err(_) => Err(RouterError::TransferFailed),
    }
}
