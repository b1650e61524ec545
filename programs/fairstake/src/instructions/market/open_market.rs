//! Market Opening
//!
//! Promotes a `Draft` market to `Open`. Only the protocol admin may open a
//! market, and only once its start time has passed. The config singleton is
//! the authority of record; the transition cannot run without it.

use anchor_lang::prelude::*;

use crate::state::{Config, Market, MarketStatus};

/// Event emitted when a market opens for staking
#[event]
pub struct MarketOpened {
    pub market_id: u64,
    pub timestamp: i64,
}

#[derive(Accounts)]
pub struct OpenMarket<'info> {
    /// Protocol admin
    #[account(
        constraint = admin.key() == config.admin @ OpenMarketError::Unauthorized,
    )]
    pub admin: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [Market::SEED, config.key().as_ref(), market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,
}

impl<'info> OpenMarket<'info> {
    pub fn open_market(&mut self) -> Result<()> {
        let clock = Clock::get()?;
        self.market.assert_can_open(clock.unix_timestamp)?;

        self.market.status = MarketStatus::Open;

        emit!(MarketOpened {
            market_id: self.market.id,
            timestamp: clock.unix_timestamp,
        });

        msg!("Market {} opened", self.market.id);

        Ok(())
    }
}

#[error_code]
pub enum OpenMarketError {
    #[msg("Only the protocol admin can open a market")]
    Unauthorized,
}
