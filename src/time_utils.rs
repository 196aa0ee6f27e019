use std::time::Duration;

/// Ticks of the frame clock per second.
pub const NANOS_PER_SEC: u64 = 1_000_000_000;

pub fn duration_to_nanos(d: &Duration) -> u64 {
    d.as_secs().saturating_mul(NANOS_PER_SEC).saturating_add(d.subsec_nanos() as u64)
}
pub fn nanos_to_secs(nanos: u64) -> f32 {
    (nanos as f64 / NANOS_PER_SEC as f64) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(duration_to_nanos(&Duration::new(2, 5)), 2_000_000_005);
        assert_eq!(nanos_to_secs(500_000_000), 0.5);
        assert_eq!(duration_to_nanos(&Duration::from_millis(1500)), 1_500_000_000);
    }
}
