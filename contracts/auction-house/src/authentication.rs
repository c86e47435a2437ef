use soroban_sdk::{Address, Env, String};

use crate::auction::load_auction;
use crate::errors::Error;
use crate::events::*;
use crate::storage::*;
use crate::types::*;

/// Check that `authenticator` is registered and assigned to a listing that
/// is still awaiting a verdict.
fn require_assigned(
    e: &Env,
    authenticator: &Address,
    auction: &Auction,
) -> Result<Authentication, Error> {
    authenticator.require_auth();

    let registry = get_registry(e).ok_or(Error::NotInitialized)?;
    if !registry.authenticators.contains(authenticator) {
        return Err(Error::AuthenticatorNotRecognized);
    }

    let authentication = get_authentication(e, &auction.id).ok_or(Error::AuthNotPending)?;
    if authentication.authenticator != *authenticator {
        return Err(Error::UnauthorizedAuthenticator);
    }

    if auction.auth_status != AuthStatus::PendingAuth {
        return Err(Error::AuthNotPending);
    }

    Ok(authentication)
}

pub fn upload_auth_report(
    e: &Env,
    authenticator: Address,
    seller: Address,
    nonce: u64,
    report_hash: String,
) -> Result<(), Error> {
    let auction = load_auction(e, &seller, nonce)?;
    let mut authentication = require_assigned(e, &authenticator, &auction)?;

    if report_hash.is_empty() {
        return Err(Error::InvalidReport);
    }

    authentication.report_hash = report_hash.clone();
    authentication.uploaded_at = e.ledger().timestamp();
    set_authentication(e, &authentication);

    AuthReportUploadedEventData {
        authenticator,
        auction_id: auction.id,
        report_hash,
        uploaded_at: authentication.uploaded_at,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(())
}

/// Record the verdict. Only the auth status moves; the auction lifecycle is
/// left to bidding and `end_auction`.
pub fn attest_authentication(
    e: &Env,
    authenticator: Address,
    seller: Address,
    nonce: u64,
    approved: bool,
) -> Result<(), Error> {
    let mut auction = load_auction(e, &seller, nonce)?;
    let mut authentication = require_assigned(e, &authenticator, &auction)?;

    if authentication.report_hash.is_empty() {
        return Err(Error::ReportNotUploaded);
    }

    let verdict = if approved {
        AuthStatus::Approved
    } else {
        AuthStatus::Rejected
    };

    authentication.auth_status = verdict;
    authentication.verified_at = e.ledger().timestamp();
    set_authentication(e, &authentication);

    auction.auth_status = verdict;
    set_auction(e, &auction);

    AuthResolvedEventData {
        authenticator,
        auction_id: auction.id,
        approved,
        verified_at: authentication.verified_at,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(())
}
