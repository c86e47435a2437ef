use soroban_sdk::{token, Address, Env};

use crate::auction::load_auction;
use crate::errors::Error;
use crate::events::*;
use crate::keys;
use crate::storage::*;
use crate::types::*;

/// `floor(amount * bps / 10000)` for non-negative amounts, split on the
/// divisor so the product never exceeds `amount`.
pub fn fee_of(amount: i128, bps: u32) -> Result<i128, Error> {
    let denominator = MAX_FEE_BPS as i128;
    let bps = bps as i128;

    let whole = (amount / denominator)
        .checked_mul(bps)
        .ok_or(Error::ArithmeticOverflow)?;
    let rest = (amount % denominator)
        .checked_mul(bps)
        .ok_or(Error::ArithmeticOverflow)?
        / denominator;

    whole.checked_add(rest).ok_or(Error::ArithmeticOverflow)
}

/// Split a winning bid into platform fee, optional authenticator fee and the
/// seller's remainder. The three parts always sum to `winning_bid`.
pub fn split_proceeds(
    winning_bid: i128,
    platform_fee_bps: u32,
    auth_fee_bps: Option<u32>,
) -> Result<SettlementQuote, Error> {
    let platform_fee = fee_of(winning_bid, platform_fee_bps)?;
    let auth_fee = match auth_fee_bps {
        Some(bps) => fee_of(winning_bid, bps)?,
        None => 0,
    };
    let seller_amount = winning_bid
        .checked_sub(platform_fee)
        .and_then(|rest| rest.checked_sub(auth_fee))
        .ok_or(Error::ArithmeticOverflow)?;

    Ok(SettlementQuote {
        winning_bid,
        platform_fee,
        auth_fee,
        seller_amount,
    })
}

/// Fee split the current highest bid would produce under the current config.
pub fn quote_settlement(e: &Env, seller: Address, nonce: u64) -> Result<SettlementQuote, Error> {
    let config = get_config(e).ok_or(Error::NotInitialized)?;
    let auction = load_auction(e, &seller, nonce)?;
    let auth_fee_bps = auction.authenticator.as_ref().map(|_| config.auth_fee_bps);
    split_proceeds(auction.highest_bid, config.platform_fee_bps, auth_fee_bps)
}

/// Deliver the item to the winner and pay out the winning escrow.
///
/// # Errors
/// * `Error::AuctionNotEnded` - Auction is not in the Ended state
/// * `Error::NotWinner` - Caller is not the highest bidder
/// * `Error::ReserveNotMet` - Highest bid is below the reserve
/// * `Error::AuthenticationPending` / `Error::AuthenticationRejected`
pub fn settle_auction(
    e: &Env,
    winner: Address,
    seller: Address,
    nonce: u64,
) -> Result<SettlementQuote, Error> {
    winner.require_auth();

    let config = get_config(e).ok_or(Error::NotInitialized)?;
    let mut auction = load_auction(e, &seller, nonce)?;

    if auction.auction_status != AuctionStatus::Ended {
        return Err(Error::AuctionNotEnded);
    }

    if auction.highest_bidder.as_ref() != Some(&winner) {
        return Err(Error::NotWinner);
    }

    let bid_id = keys::bid_id(e, &winner, &auction.id);
    let mut bid = get_bid(e, &bid_id).ok_or(Error::NotWinner)?;
    if !bid.is_active {
        return Err(Error::BidNotActive);
    }

    if auction.highest_bid < auction.reserved_price {
        return Err(Error::ReserveNotMet);
    }

    match auction.auth_status {
        AuthStatus::PendingAuth => return Err(Error::AuthenticationPending),
        AuthStatus::Rejected => return Err(Error::AuthenticationRejected),
        AuthStatus::NotRequired | AuthStatus::Approved => {}
    }

    let treasury = config
        .treasuries
        .get(auction.accepted_token.clone())
        .ok_or(Error::InvalidTreasury)?;

    let auth_fee_bps = auction.authenticator.as_ref().map(|_| config.auth_fee_bps);
    let quote = split_proceeds(auction.highest_bid, config.platform_fee_bps, auth_fee_bps)?;

    let escrow = get_escrow_vault(e, &bid_id).ok_or(Error::BidNotActive)?;
    let item_vault = get_item_vault(e, &auction.id).ok_or(Error::ItemNotVaulted)?;

    let contract_address = e.current_contract_address();
    let token_client = token::TokenClient::new(e, &escrow.token);

    if quote.seller_amount > 0 {
        token_client.transfer(&contract_address, &auction.seller, &quote.seller_amount);
    }

    if quote.platform_fee > 0 {
        token_client.transfer(&contract_address, &treasury, &quote.platform_fee);
    }

    if let Some(authenticator) = &auction.authenticator {
        if quote.auth_fee > 0 {
            token_client.transfer(&contract_address, authenticator, &quote.auth_fee);
        }
        if let Some(mut authentication) = get_authentication(e, &auction.id) {
            authentication.fee_amount = quote.auth_fee;
            authentication.fee_paid = true;
            set_authentication(e, &authentication);
        }
    }

    let item_client = token::TokenClient::new(e, &item_vault.item);
    item_client.transfer(&contract_address, &winner, &item_vault.amount);
    remove_item_vault(e, &auction.id);

    remove_escrow_vault(e, &bid_id);
    bid.amount = 0;
    bid.is_active = false;
    bid.is_winner = true;
    set_bid(e, &bid);

    auction.auction_status = AuctionStatus::Settled;
    set_auction(e, &auction);

    AuctionSettledEventData {
        auction_id: auction.id,
        winner,
        final_price: quote.winning_bid,
        platform_fee: quote.platform_fee,
        auth_fee: quote.auth_fee,
        seller_amount: quote.seller_amount,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(quote)
}
