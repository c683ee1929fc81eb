use crate::access::AccessManager;
use crate::config::ConfigManager;
use crate::price_feed::PriceConverter;
use crate::tracking::TrackingManager;
use crate::types::{Error, MINIMUM_USD};
use soroban_sdk::{log, token::TokenClient, Address, Env, Symbol};

pub struct FundingManager;

impl FundingManager {
    /// Accept `amount` of the native asset from `sender`.
    ///
    /// The contribution is valued before anything is written or moved, so a
    /// rejected call leaves both the ledger and the sender's tokens as they
    /// were.
    pub fn fund(env: &Env, sender: &Address, amount: i128) -> Result<(), Error> {
        sender.require_auth();
        AccessManager::ensure_unlocked(env)?;

        let value = PriceConverter::convert(env, amount)?;
        if value < MINIMUM_USD {
            log!(env, "contribution worth {} below minimum {}", value, MINIMUM_USD);
            return Err(Error::InsufficientContribution);
        }

        let total = TrackingManager::amount_funded(env, sender)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        TrackingManager::set_amount_funded(env, sender, total);
        TrackingManager::record_funder(env, sender);

        let token = TokenClient::new(env, &ConfigManager::native_token(env)?);
        token.transfer(sender, &env.current_contract_address(), &amount);

        env.events().publish(
            (Symbol::new(env, "funded"), sender.clone()),
            (amount, total),
        );
        Ok(())
    }
}
