//! Emergency pause switch
//!
//! Halts market creation and staking. Lifecycle transitions and payout
//! claims stay live so in-flight markets can still wind down.

use anchor_lang::prelude::*;

use crate::state::Config;

/// Event emitted when the pause flag changes
#[event]
pub struct PausedSet {
    pub paused: bool,
}

#[derive(Accounts)]
pub struct SetPaused<'info> {
    #[account(
        constraint = admin.key() == config.admin @ SetPausedError::Unauthorized,
    )]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> SetPaused<'info> {
    pub fn set_paused(&mut self, paused: bool) -> Result<()> {
        self.config.paused = paused;

        emit!(PausedSet { paused });

        Ok(())
    }
}

#[error_code]
pub enum SetPausedError {
    #[msg("Only the protocol admin can pause the protocol")]
    Unauthorized,
}
