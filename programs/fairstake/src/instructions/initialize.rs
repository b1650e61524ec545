//! Protocol Initialization
//!
//! Sets up the global configuration singleton. Safe to call more than once:
//! a repeat call signed by the recorded admin is a no-op that leaves the
//! record unchanged, and any other signer is rejected.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

use crate::stake::StakePolicy;
use crate::state::Config;

/// Accounts required for protocol initialization
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Protocol administrator (becomes the admin on first call)
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Global configuration account (created on first call)
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// Collateral token mint (e.g., USDC)
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Initialize the protocol configuration
    pub fn initialize(
        &mut self,
        treasury: Pubkey,
        score_authority: Pubkey,
        protocol_fee_bps: u64,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        if !needs_init(&self.config.admin, &self.admin.key())? {
            msg!("Protocol already initialized, nothing to do");
            return Ok(());
        }

        require!(protocol_fee_bps <= 10_000, InitializeError::FeeTooHigh);

        let policy = StakePolicy::default();

        self.config.set_inner(Config {
            admin: self.admin.key(),
            treasury,
            score_authority,
            collateral_mint: self.collateral_mint.key(),
            protocol_fee_bps,
            market_count: 0,
            tier_thresholds: policy.tier_thresholds,
            tier_multipliers_bps: policy.tier_multipliers_bps,
            early_boost_bps: policy.early_boost_bps,
            max_multiplier_bps: policy.max_multiplier_bps,
            paused: false,
            bump: bumps.config,
        });

        msg!("Protocol initialized!");
        msg!("Admin: {}", self.admin.key());
        msg!("Treasury: {}", treasury);
        msg!("Score authority: {}", score_authority);
        msg!("Fee: {} bps", protocol_fee_bps);

        Ok(())
    }
}

/// Whether the config must be written: true for a fresh account, false for
/// an idempotent re-run by the recorded admin. Anyone else is rejected.
fn needs_init(recorded_admin: &Pubkey, caller: &Pubkey) -> Result<bool> {
    if *recorded_admin == Pubkey::default() {
        return Ok(true);
    }
    require_keys_eq!(*recorded_admin, *caller, InitializeError::AdminMismatch);
    Ok(false)
}

#[error_code]
pub enum InitializeError {
    #[msg("Protocol fee cannot exceed 10000 basis points")]
    FeeTooHigh,
    #[msg("Config already initialized by a different admin")]
    AdminMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_config_initializes() {
        let caller = Pubkey::new_unique();
        assert_eq!(needs_init(&Pubkey::default(), &caller), Ok(true));
    }

    #[test]
    fn reinit_by_same_admin_is_a_noop() {
        let admin = Pubkey::new_unique();
        assert_eq!(needs_init(&admin, &admin), Ok(false));
    }

    #[test]
    fn reinit_by_different_admin_is_rejected() {
        let admin = Pubkey::new_unique();
        let intruder = Pubkey::new_unique();
        assert_eq!(
            needs_init(&admin, &intruder),
            Err(InitializeError::AdminMismatch.into())
        );
    }
}
