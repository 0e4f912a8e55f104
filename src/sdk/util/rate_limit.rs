use governor::clock::{Clock, DefaultClock};
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

pub type Limiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

// Google allows far more, this keeps a runaway keystroke loop polite.
const PLACES_PER_SECOND: u32 = 10;

pub fn places_limiter() -> Limiter {
    let quota = Quota::per_second(NonZeroU32::new(PLACES_PER_SECOND).unwrap_or(NonZeroU32::MIN));
    Arc::new(RateLimiter::direct(quota))
}

/// Blocks the calling thread until the limiter admits one more request.
pub fn wait_for_slot(limiter: &Limiter) {
    let clock = DefaultClock::default();
    while let Err(not_until) = limiter.check() {
        let wait = not_until.wait_time_from(clock.now());
        log::debug!("Rate limited, sleeping {:?}", wait);
        std::thread::sleep(wait);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_burst_up_to_quota() {
        let limiter = places_limiter();
        for _ in 0..PLACES_PER_SECOND {
            assert!(limiter.check().is_ok());
        }
        assert!(limiter.check().is_err());
    }

    #[test]
    fn wait_for_slot_returns_once_admitted() {
        let limiter = places_limiter();
        wait_for_slot(&limiter);
        assert!(limiter.check().is_ok());
    }
}
