//! Prediction Market State
//!
//! Each market runs a strict linear lifecycle:
//!
//! ```text
//! Draft -> Open -> Closed -> Settled
//! ```
//!
//! No skipping, no reverting. Every transition checks the current status
//! before writing the next one, in the same transaction that holds the
//! market account's write lock, so a lost race surfaces as `InvalidState`
//! rather than a silent overwrite.

use anchor_lang::prelude::*;

/// Errors raised by the lifecycle guard methods
#[error_code]
pub enum LifecycleError {
    #[msg("Market is not in the required status for this transition")]
    InvalidState,
    #[msg("Time precondition for this transition has not been reached")]
    TooEarly,
    #[msg("Winning item index is out of range")]
    InvalidWinningItem,
}

/// Individual prediction market account
///
/// Seeds: ["market", config, market_id.to_le_bytes()]
#[account]
#[derive(InitSpace)]
pub struct Market {
    /// Unique market identifier
    pub id: u64,

    /// Market creator's address
    pub creator: Pubkey,

    /// Collateral token mint address
    pub collateral_mint: Pubkey,

    /// Content hash binding the off-chain option list to this market
    pub items_hash: [u8; 32],

    /// Number of stakeable items (2..=16)
    pub item_count: u8,

    /// Unix timestamp from which the market may be opened
    pub start_ts: i64,

    /// Unix timestamp at which staking ends and the market may be closed
    pub end_ts: i64,

    /// Market lifecycle status
    pub status: MarketStatus,

    /// Winning item index (only set after settlement)
    pub winning_item: Option<u8>,

    /// Raw collateral staked across all positions
    pub total_staked: u64,

    /// Effective (weighted) stake across all positions
    pub total_effective: u64,

    /// Effective stake per item; payout weights at settlement
    #[max_len(16)]
    pub item_effective: Vec<u64>,

    /// Collateral available to winners after the protocol fee
    pub payout_pool: u64,

    /// Positions placed on this market
    pub position_count: u64,

    /// Unix timestamp of settlement
    pub settled_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl Market {
    pub const SEED: &'static [u8] = b"market";
    pub const MAX_ITEMS: u8 = 16;

    /// Draft -> Open gate: status and start time. The admin check lives in
    /// the instruction's account constraints; this guard takes no signer.
    pub fn assert_can_open(&self, now: i64) -> Result<()> {
        require!(
            self.status == MarketStatus::Draft,
            LifecycleError::InvalidState
        );
        require!(now >= self.start_ts, LifecycleError::TooEarly);
        Ok(())
    }

    /// Open -> Closed gate: status and end time only. Closing is
    /// permissionless once the staking window has passed.
    pub fn assert_can_close(&self, now: i64) -> Result<()> {
        require!(
            self.status == MarketStatus::Open,
            LifecycleError::InvalidState
        );
        require!(now >= self.end_ts, LifecycleError::TooEarly);
        Ok(())
    }

    /// Closed -> Settled gate: status and a winning item inside the option
    /// list.
    pub fn assert_can_settle(&self, winning_item: u8) -> Result<()> {
        require!(
            self.status == MarketStatus::Closed,
            LifecycleError::InvalidState
        );
        require!(
            winning_item < self.item_count,
            LifecycleError::InvalidWinningItem
        );
        Ok(())
    }
}

/// Market lifecycle status
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum MarketStatus {
    /// Created, not yet open for staking
    #[default]
    Draft,
    /// Open for staking
    Open,
    /// Staking ended, awaiting settlement
    Closed,
    /// Winning item recorded, payouts claimable
    Settled,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(status: MarketStatus) -> Market {
        Market {
            id: 0,
            creator: Pubkey::default(),
            collateral_mint: Pubkey::default(),
            items_hash: [1u8; 32],
            item_count: 4,
            start_ts: 1_000,
            end_ts: 2_000,
            status,
            winning_item: None,
            total_staked: 0,
            total_effective: 0,
            item_effective: vec![0; 4],
            payout_pool: 0,
            position_count: 0,
            settled_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn open_requires_draft() {
        for status in [MarketStatus::Open, MarketStatus::Closed, MarketStatus::Settled] {
            let m = market(status);
            // Even well past start_ts the status gate fires first.
            assert_eq!(
                m.assert_can_open(5_000),
                Err(LifecycleError::InvalidState.into())
            );
        }
    }

    #[test]
    fn open_before_start_is_too_early() {
        let m = market(MarketStatus::Draft);
        assert_eq!(m.assert_can_open(999), Err(LifecycleError::TooEarly.into()));
        assert!(m.assert_can_open(1_000).is_ok());
        assert!(m.assert_can_open(1_500).is_ok());
    }

    #[test]
    fn close_requires_open() {
        for status in [MarketStatus::Draft, MarketStatus::Closed, MarketStatus::Settled] {
            let m = market(status);
            assert_eq!(
                m.assert_can_close(5_000),
                Err(LifecycleError::InvalidState.into())
            );
        }
    }

    #[test]
    fn close_before_end_is_too_early() {
        let m = market(MarketStatus::Open);
        assert_eq!(m.assert_can_close(1_999), Err(LifecycleError::TooEarly.into()));
        assert!(m.assert_can_close(2_000).is_ok());
    }

    #[test]
    fn settle_requires_closed_and_valid_item() {
        let m = market(MarketStatus::Open);
        assert_eq!(
            m.assert_can_settle(0),
            Err(LifecycleError::InvalidState.into())
        );

        let m = market(MarketStatus::Closed);
        assert!(m.assert_can_settle(3).is_ok());
        assert_eq!(
            m.assert_can_settle(4),
            Err(LifecycleError::InvalidWinningItem.into())
        );
    }

    #[test]
    fn no_transition_skips_or_reverts() {
        // Draft cannot close or settle; Settled accepts nothing.
        let draft = market(MarketStatus::Draft);
        assert!(draft.assert_can_close(5_000).is_err());
        assert!(draft.assert_can_settle(0).is_err());

        let settled = market(MarketStatus::Settled);
        assert!(settled.assert_can_open(5_000).is_err());
        assert!(settled.assert_can_close(5_000).is_err());
        assert!(settled.assert_can_settle(0).is_err());
    }
}
