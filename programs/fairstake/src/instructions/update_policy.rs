//! Policy Tuning
//!
//! Tier thresholds and the multiplier curve are protocol policy, not code.
//! The admin adjusts them here; every write is re-validated against the
//! calculator's invariants so a bad combination can never land on-chain.

use anchor_lang::prelude::*;

use crate::state::Config;

/// Event emitted with the full policy after an update
#[event]
pub struct PolicyUpdated {
    pub protocol_fee_bps: u64,
    pub tier_thresholds: [u32; 3],
    pub tier_multipliers_bps: [u16; 4],
    pub early_boost_bps: u16,
    pub max_multiplier_bps: u16,
}

#[derive(Accounts)]
pub struct UpdatePolicy<'info> {
    #[account(
        constraint = admin.key() == config.admin @ UpdatePolicyError::Unauthorized,
    )]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> UpdatePolicy<'info> {
    pub fn update_policy(
        &mut self,
        protocol_fee_bps: Option<u64>,
        tier_thresholds: Option<[u32; 3]>,
        tier_multipliers_bps: Option<[u16; 4]>,
        early_boost_bps: Option<u16>,
        max_multiplier_bps: Option<u16>,
    ) -> Result<()> {
        let config = &mut self.config;

        if let Some(fee) = protocol_fee_bps {
            require!(fee <= 10_000, UpdatePolicyError::FeeTooHigh);
            config.protocol_fee_bps = fee;
        }
        if let Some(thresholds) = tier_thresholds {
            config.tier_thresholds = thresholds;
        }
        if let Some(multipliers) = tier_multipliers_bps {
            config.tier_multipliers_bps = multipliers;
        }
        if let Some(boost) = early_boost_bps {
            config.early_boost_bps = boost;
        }
        if let Some(cap) = max_multiplier_bps {
            config.max_multiplier_bps = cap;
        }

        config.stake_policy().validate()?;

        emit!(PolicyUpdated {
            protocol_fee_bps: config.protocol_fee_bps,
            tier_thresholds: config.tier_thresholds,
            tier_multipliers_bps: config.tier_multipliers_bps,
            early_boost_bps: config.early_boost_bps,
            max_multiplier_bps: config.max_multiplier_bps,
        });

        Ok(())
    }
}

#[error_code]
pub enum UpdatePolicyError {
    #[msg("Only the protocol admin can tune the policy")]
    Unauthorized,
    #[msg("Protocol fee cannot exceed 10000 basis points")]
    FeeTooHigh,
}
