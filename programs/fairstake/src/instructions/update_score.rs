//! Reputation Score Updates
//!
//! The FairScale scoring service computes wallet scores off-chain; its
//! on-chain authority posts them here. Records are upserted so a refreshed
//! score overwrites the previous attestation. Retrying a failed fetch
//! against the scoring service is the poster's job, not the program's.

use anchor_lang::prelude::*;

use crate::state::{Config, ReputationRecord};

/// Event emitted when a wallet's score is posted
#[event]
pub struct ScoreUpdated {
    pub wallet: Pubkey,
    pub score: u32,
    pub timestamp: i64,
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct UpdateScore<'info> {
    #[account(
        mut,
        constraint = score_authority.key() == config.score_authority @ UpdateScoreError::Unauthorized,
    )]
    pub score_authority: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init_if_needed,
        payer = score_authority,
        space = 8 + ReputationRecord::INIT_SPACE,
        seeds = [ReputationRecord::SEED, wallet.as_ref()],
        bump,
    )]
    pub record: Account<'info, ReputationRecord>,

    pub system_program: Program<'info, System>,
}

impl<'info> UpdateScore<'info> {
    pub fn update_score(
        &mut self,
        wallet: Pubkey,
        score: u32,
        bumps: &UpdateScoreBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;

        if self.record.wallet == Pubkey::default() {
            self.record.wallet = wallet;
            self.record.bump = bumps.record;
        }
        self.record.score = score;
        self.record.updated_at = clock.unix_timestamp;

        emit!(ScoreUpdated {
            wallet,
            score,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}

#[error_code]
pub enum UpdateScoreError {
    #[msg("Only the score authority can post reputation scores")]
    Unauthorized,
}
