use clap::ValueEnum;

/// How a Buy of an already held symbol is recorded.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum LotPolicy {
    /// Every Buy appends its own lot; a Sell draws down the first lot.
    #[default]
    Lots,
    /// One holding per symbol at weighted-average cost.
    Merge,
}
