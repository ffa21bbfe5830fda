//! Bounded status polling.

use crate::error::BusError;

/// Call `ready` until it returns `true`, at most `limit` times.
///
/// # Errors
/// [`BusError::Timeout`] if `ready` never returns `true`. A `limit` of
/// zero always times out.
pub fn poll_until(limit: u32, mut ready: impl FnMut() -> bool) -> Result<(), BusError> {
    for _ in 0..limit {
        if ready() {
            return Ok(());
        }
    }
    Err(BusError::Timeout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_flag_returns_on_first_poll() {
        let mut polls = 0;
        let result = poll_until(16, || {
            polls += 1;
            true
        });
        assert_eq!(result, Ok(()));
        assert_eq!(polls, 1);
    }

    #[test]
    fn waits_until_flag_changes() {
        let mut polls = 0;
        let result = poll_until(16, || {
            polls += 1;
            polls == 5
        });
        assert_eq!(result, Ok(()));
        assert_eq!(polls, 5);
    }

    #[test]
    fn stuck_flag_times_out_after_limit() {
        let mut polls = 0;
        let result = poll_until(16, || {
            polls += 1;
            false
        });
        assert_eq!(result, Err(BusError::Timeout));
        assert_eq!(polls, 16);
    }

    #[test]
    fn zero_limit_always_times_out() {
        assert_eq!(poll_until(0, || true), Err(BusError::Timeout));
    }
}
