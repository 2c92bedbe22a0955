//! Knobs for how notes are applied.

/// What to do when a commodity's price is declared again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PricePolicy {
    /// The latest declaration wins.
    #[default]
    Overwrite,
    /// The first declaration wins; later ones only fill in what it lacked.
    KeepFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideConfig {
    pub price_policy: PricePolicy,
    /// Whether declarations like `pish glob is XI` may bind words that no
    /// base declaration covered.
    pub learn_from_composites: bool,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            price_policy: PricePolicy::Overwrite,
            learn_from_composites: true,
        }
    }
}

impl GuideConfig {
    pub fn with_price_policy(mut self, price_policy: PricePolicy) -> Self {
        self.price_policy = price_policy;
        self
    }

    pub fn with_composite_learning(mut self, learn_from_composites: bool) -> Self {
        self.learn_from_composites = learn_from_composites;
        self
    }
}
