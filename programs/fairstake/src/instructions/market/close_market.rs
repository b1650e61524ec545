//! Market Closing
//!
//! Moves an `Open` market to `Closed` once its end time has passed. Unlike
//! opening, closing carries no authority gate: any fee payer may crank it,
//! since past `end_ts` there is nothing left to decide. Only the time and
//! status guards apply.

use anchor_lang::prelude::*;

use crate::state::{Config, Market, MarketStatus};

/// Event emitted when a market stops accepting stakes
#[event]
pub struct MarketClosed {
    pub market_id: u64,
    pub timestamp: i64,
}

#[derive(Accounts)]
pub struct CloseMarket<'info> {
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

impl<'info> CloseMarket<'info> {
    pub fn close_market(&mut self) -> Result<()> {
        let clock = Clock::get()?;
        self.market.assert_can_close(clock.unix_timestamp)?;

        self.market.status = MarketStatus::Closed;

        emit!(MarketClosed {
            market_id: self.market.id,
            timestamp: clock.unix_timestamp,
        });

        msg!("Market {} closed", self.market.id);

        Ok(())
    }
}
