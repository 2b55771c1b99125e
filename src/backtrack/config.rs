//! Search configuration.

/// Configuration for the backtracking search.
///
/// The default configuration places no bound on the search: an
/// unsatisfiable problem is explored to exhaustion.
///
/// # Examples
///
/// ```
/// use u_csp::backtrack::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_node_limit(1_000_000)
///     .with_time_limit_ms(5_000)
///     .with_check_interval(256);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Maximum number of tentative assignments. `None` = no limit.
    pub node_limit: Option<u64>,

    /// Wall-clock budget in milliseconds. `None` = no limit.
    pub time_limit_ms: Option<u64>,

    /// Nodes between polls of the cancellation flag and the clock.
    pub check_interval: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            node_limit: None,
            time_limit_ms: None,
            check_interval: 1024,
        }
    }
}

impl SolverConfig {
    pub fn with_node_limit(mut self, nodes: u64) -> Self {
        self.node_limit = Some(nodes);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    pub fn with_check_interval(mut self, nodes: u64) -> Self {
        self.check_interval = nodes;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.check_interval == 0 {
            return Err("check_interval must be positive".into());
        }
        if self.node_limit == Some(0) {
            return Err("node_limit must be positive when set".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive when set".into());
        }
        Ok(())
    }
}
