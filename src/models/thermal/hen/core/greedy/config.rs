/// Configuration for the greedy matching engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyConfig {
    /// How residual duty left after matching is closed with utilities.
    pub residual_closing: ResidualClosing,
}

/// Strategy for closing residual duty after the matching rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResidualClosing {
    /// One utility per side, sized to the total residual on that side and
    /// attributed to the stream with the largest individual residual.
    ///
    /// With more than one residual stream on a side, energy balances only in
    /// aggregate: the attributed stream carries the other streams' residuals.
    #[default]
    Consolidated,

    /// One utility per stream with residual duty.
    PerStream,
}
