/// Utilization values available when a label is rendered.
///
/// Both percentages are kept within `0..=100` by the constructors. A snapshot is
/// meant to be created once per update tick and dropped after rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// GPU utilization
    pub primary_percent: u8,
    /// VRAM usage
    pub secondary_percent: u8,
}

impl MetricsSnapshot {
    /// Creates a snapshot clamping both values into `0..=100`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpulabel::metrics::MetricsSnapshot;
    ///
    /// let metrics = MetricsSnapshot::new(142, -3);
    /// assert_eq!(metrics.primary_percent, 100);
    /// assert_eq!(metrics.secondary_percent, 0);
    /// ```
    pub fn new(primary: i64, secondary: i64) -> Self {
        Self {
            primary_percent: clamp_percent(primary),
            secondary_percent: clamp_percent(secondary),
        }
    }

    /// Creates a snapshot from raw device readings.
    ///
    /// The VRAM percentage is `mem_used * 100 / mem_total` rounded down, or 0
    /// when the total is unknown.
    ///
    /// # Arguments
    /// * `utilization` - GPU utilization percentage as reported by the device
    /// * `mem_used` - Used memory in bytes
    /// * `mem_total` - Total memory in bytes
    pub fn from_usage(utilization: u32, mem_used: u64, mem_total: u64) -> Self {
        Self::new(i64::from(utilization), memory_percent(mem_used, mem_total))
    }
}

fn clamp_percent(value: i64) -> u8 {
    // fits in u8 after clamping
    value.clamp(0, 100) as u8
}

fn memory_percent(used: u64, total: u64) -> i64 {
    if total == 0 {
        return 0;
    }
    let percent = u128::from(used) * 100 / u128::from(total);
    i64::try_from(percent).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_values_in_range() {
        let metrics = MetricsSnapshot::new(42, 7);
        assert_eq!(metrics.primary_percent, 42);
        assert_eq!(metrics.secondary_percent, 7);
    }

    #[test]
    fn test_new_clamps_boundaries() {
        assert_eq!(MetricsSnapshot::new(0, 100), MetricsSnapshot::new(-50, 250));
        assert_eq!(MetricsSnapshot::new(i64::MIN, i64::MAX).secondary_percent, 100);
    }

    #[test]
    fn test_from_usage_computes_vram_percent() {
        let metrics = MetricsSnapshot::from_usage(55, 3 * 1024, 8 * 1024);
        assert_eq!(metrics.primary_percent, 55);
        assert_eq!(metrics.secondary_percent, 37);
    }

    #[test]
    fn test_from_usage_without_total() {
        let metrics = MetricsSnapshot::from_usage(10, 512, 0);
        assert_eq!(metrics.secondary_percent, 0);
    }

    #[test]
    fn test_from_usage_huge_values() {
        let metrics = MetricsSnapshot::from_usage(250, u64::MAX, u64::MAX);
        assert_eq!(metrics.primary_percent, 100);
        assert_eq!(metrics.secondary_percent, 100);

        let overfull = MetricsSnapshot::from_usage(0, u64::MAX, 1);
        assert_eq!(overfull.secondary_percent, 100);
    }
}
