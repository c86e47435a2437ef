//! Deterministic entity ids.
//!
//! Every auction and bid lives under a hash of a fixed tag, its owner and a
//! sequence value, so any client can recompute where an entity is stored.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

const AUCTION_TAG: &[u8] = b"auction";
const BID_TAG: &[u8] = b"bid";

/// `sha256("auction" || xdr(seller) || nonce_be)`
pub fn auction_id(e: &Env, seller: &Address, nonce: u64) -> BytesN<32> {
    let mut preimage = Bytes::from_slice(e, AUCTION_TAG);
    preimage.append(&seller.clone().to_xdr(e));
    preimage.extend_from_array(&nonce.to_be_bytes());
    e.crypto().sha256(&preimage).to_bytes()
}

/// `sha256("bid" || xdr(bidder) || auction_id)`
pub fn bid_id(e: &Env, bidder: &Address, auction_id: &BytesN<32>) -> BytesN<32> {
    let mut preimage = Bytes::from_slice(e, BID_TAG);
    preimage.append(&bidder.clone().to_xdr(e));
    preimage.extend_from_array(&auction_id.to_array());
    e.crypto().sha256(&preimage).to_bytes()
}
