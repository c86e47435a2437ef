use soroban_sdk::{Address, Env, Map, Symbol, Vec};

use crate::errors::Error;
use crate::events::*;
use crate::storage::*;
use crate::types::*;

/// Load the config and check that `admin` is its admin.
pub fn require_admin(e: &Env, admin: &Address) -> Result<PlatformConfig, Error> {
    admin.require_auth();
    let config = get_config(e).ok_or(Error::NotInitialized)?;
    if *admin != config.admin {
        return Err(Error::ExclusiveToAdmin);
    }
    Ok(config)
}

pub fn validate_fees(platform_fee_bps: u32, auth_fee_bps: u32) -> Result<(), Error> {
    if platform_fee_bps > MAX_FEE_BPS || auth_fee_bps > MAX_FEE_BPS {
        return Err(Error::FeeTooHigh);
    }
    // Both fees come out of the same winning bid.
    if platform_fee_bps + auth_fee_bps > MAX_FEE_BPS {
        return Err(Error::FeeTooHigh);
    }
    Ok(())
}

pub fn validate_duration_bounds(min_duration: u64, max_duration: u64) -> Result<(), Error> {
    if min_duration == 0 || max_duration <= min_duration {
        return Err(Error::InvalidDurationBounds);
    }
    Ok(())
}

pub fn initialize(
    e: &Env,
    admin: Address,
    platform_fee_bps: u32,
    auth_fee_bps: u32,
    min_auction_duration: u64,
    max_auction_duration: u64,
    treasuries: Map<Address, Address>,
    authenticators: Vec<Address>,
) -> Result<(), Error> {
    admin.require_auth();

    if has_config(e) {
        return Err(Error::AlreadyInitialized);
    }

    validate_fees(platform_fee_bps, auth_fee_bps)?;
    validate_duration_bounds(min_auction_duration, max_auction_duration)?;

    let config = PlatformConfig {
        admin: admin.clone(),
        platform_fee_bps,
        auth_fee_bps,
        min_auction_duration,
        max_auction_duration,
        treasuries,
        is_paused: false,
        updated_at: e.ledger().timestamp(),
    };

    let mut registry = AuthenticatorsRegistry {
        admin: admin.clone(),
        authenticators: Vec::new(e),
        next_index: 0,
    };
    let total_added = add_authenticators(&mut registry, &authenticators)?;

    set_config(e, &config);
    set_registry(e, &registry);
    extend_instance_ttl(e);

    PlatformInitializedEventData {
        admin,
        platform_fee_bps,
        auth_fee_bps,
        total_authenticators: total_added,
    }
    .publish(e);

    Ok(())
}

/// Append each identity to the registry, bumping `next_index` per entry.
fn add_authenticators(
    registry: &mut AuthenticatorsRegistry,
    identities: &Vec<Address>,
) -> Result<u32, Error> {
    for identity in identities.iter() {
        if registry.authenticators.contains(&identity) {
            return Err(Error::AlreadyRegistered);
        }
        if identity == registry.admin {
            return Err(Error::AdminCannotBeAuthenticator);
        }
        if registry.authenticators.len() >= MAX_AUTHENTICATORS {
            return Err(Error::RegistryFull);
        }
        registry.authenticators.push_back(identity);
        registry.next_index = registry
            .next_index
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;
    }
    Ok(identities.len())
}

pub fn register_authenticators(
    e: &Env,
    admin: Address,
    identities: Vec<Address>,
) -> Result<(), Error> {
    admin.require_auth();

    let mut registry = get_registry(e).ok_or(Error::NotInitialized)?;
    if admin != registry.admin {
        return Err(Error::ExclusiveToAdmin);
    }

    let total_added = add_authenticators(&mut registry, &identities)?;
    set_registry(e, &registry);
    extend_instance_ttl(e);

    AuthsRegisteredEventData {
        admin,
        total_added,
        next_index: registry.next_index,
    }
    .publish(e);

    Ok(())
}

pub fn remove_authenticator(e: &Env, admin: Address, authenticator: Address) -> Result<(), Error> {
    admin.require_auth();

    let mut registry = get_registry(e).ok_or(Error::NotInitialized)?;
    if admin != registry.admin {
        return Err(Error::ExclusiveToAdmin);
    }

    let index = registry
        .authenticators
        .first_index_of(&authenticator)
        .ok_or(Error::AuthenticatorNotInRegistry)?;
    registry.authenticators.remove(index);

    set_registry(e, &registry);
    extend_instance_ttl(e);

    AuthRemovedEventData {
        authenticator,
        timestamp: e.ledger().timestamp(),
    }
    .publish(e);

    Ok(())
}

/// Update fee rates and duration bounds. `None` keeps the current value.
pub fn update_platform_config(
    e: &Env,
    admin: Address,
    platform_fee_bps: Option<u32>,
    auth_fee_bps: Option<u32>,
    min_auction_duration: Option<u64>,
    max_auction_duration: Option<u64>,
) -> Result<(), Error> {
    let mut config = require_admin(e, &admin)?;

    let new_fee = platform_fee_bps.unwrap_or(config.platform_fee_bps);
    let new_auth_fee = auth_fee_bps.unwrap_or(config.auth_fee_bps);
    let new_min = min_auction_duration.unwrap_or(config.min_auction_duration);
    let new_max = max_auction_duration.unwrap_or(config.max_auction_duration);

    validate_fees(new_fee, new_auth_fee)?;
    validate_duration_bounds(new_min, new_max)?;

    let mut fields: Vec<Symbol> = Vec::new(e);
    if new_fee != config.platform_fee_bps {
        config.platform_fee_bps = new_fee;
        fields.push_back(Symbol::new(e, "platform_fee_bps"));
    }
    if new_auth_fee != config.auth_fee_bps {
        config.auth_fee_bps = new_auth_fee;
        fields.push_back(Symbol::new(e, "auth_fee_bps"));
    }
    if new_min != config.min_auction_duration {
        config.min_auction_duration = new_min;
        fields.push_back(Symbol::new(e, "min_auction_duration"));
    }
    if new_max != config.max_auction_duration {
        config.max_auction_duration = new_max;
        fields.push_back(Symbol::new(e, "max_auction_duration"));
    }

    config.updated_at = e.ledger().timestamp();
    set_config(e, &config);
    extend_instance_ttl(e);

    ConfigUpdatedEventData {
        admin,
        fields,
        timestamp: config.updated_at,
    }
    .publish(e);

    Ok(())
}

pub fn set_treasury(e: &Env, admin: Address, token: Address, treasury: Address) -> Result<(), Error> {
    let mut config = require_admin(e, &admin)?;

    config.treasuries.set(token.clone(), treasury.clone());
    config.updated_at = e.ledger().timestamp();
    set_config(e, &config);
    extend_instance_ttl(e);

    TreasurySetEventData { token, treasury }.publish(e);

    Ok(())
}

pub fn toggle_pause(e: &Env, admin: Address) -> Result<bool, Error> {
    let mut config = require_admin(e, &admin)?;

    config.is_paused = !config.is_paused;
    config.updated_at = e.ledger().timestamp();
    set_config(e, &config);
    extend_instance_ttl(e);

    PauseToggledEventData {
        admin,
        is_paused: config.is_paused,
        timestamp: config.updated_at,
    }
    .publish(e);

    Ok(config.is_paused)
}

/// Drop the config and registry. Live auctions are the caller's problem.
pub fn close_platform(e: &Env, admin: Address) -> Result<(), Error> {
    require_admin(e, &admin)?;

    remove_config(e);
    remove_registry(e);

    PlatformClosedEventData {
        admin,
        timestamp: e.ledger().timestamp(),
    }
    .publish(e);

    Ok(())
}
