//! Run ledger: currency, lives and tallies tracked by the engine.

/// Economy and score state for the current run.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Currency spent on towers.
    pub cookies: u32,
    pub lives: u32,
    pub enemies_killed: u32,
    pub enemies_leaked: u32,
    pub shots_fired: u32,
}

impl Ledger {
    pub fn new(cookies: u32, lives: u32) -> Self {
        Self {
            cookies,
            lives,
            ..Default::default()
        }
    }

    /// Credit a kill reward.
    pub fn credit_kill(&mut self, reward: u32) {
        self.cookies = self.cookies.saturating_add(reward);
        self.enemies_killed += 1;
    }

    /// Take one life for a leaked enemy. Returns the lives left.
    pub fn take_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.enemies_leaked += 1;
        self.lives
    }

    /// Spend cookies if affordable.
    pub fn try_spend(&mut self, amount: u32) -> bool {
        match self.cookies.checked_sub(amount) {
            Some(left) => {
                self.cookies = left;
                true
            }
            None => false,
        }
    }
}
