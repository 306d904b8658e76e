use serde::Deserialize;

use crate::errors::BookingError;

const POINTS_PER_BOOKING: u32 = 10;
const REDEEM_COST: u32 = 50;

/// How many points a booking earns and how many a redemption costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoyaltyRules {
    pub points_per_booking: u32,
    pub redeem_cost: u32,
}

impl Default for LoyaltyRules {
    fn default() -> Self {
        Self {
            points_per_booking: POINTS_PER_BOOKING,
            redeem_cost: REDEEM_COST,
        }
    }
}

/// Tracks the reward points accumulated during the session.
#[derive(Debug, Clone, Default)]
pub struct LoyaltyAccount {
    points: u32,
    rules: LoyaltyRules,
}

impl LoyaltyAccount {
    pub fn new(rules: LoyaltyRules) -> Self {
        Self { points: 0, rules }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn rules(&self) -> LoyaltyRules {
        self.rules
    }

    /// Credits the points for one booking and returns how many were earned.
    pub fn earn(&mut self) -> u32 {
        self.points = self.points.saturating_add(self.rules.points_per_booking);
        self.rules.points_per_booking
    }

    /// Spends one redemption worth of points, returning the remaining balance.
    ///
    /// The balance is left untouched when it does not cover the cost.
    pub fn redeem(&mut self) -> Result<u32, BookingError> {
        if self.points < self.rules.redeem_cost {
            return Err(BookingError::InsufficientPoints {
                available: self.points,
                required: self.rules.redeem_cost,
            });
        }
        self.points -= self.rules.redeem_cost;
        Ok(self.points)
    }
}
