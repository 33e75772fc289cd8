//! Rate limit checks for the GitHub API.
//!
//! The quota is read once before fetching. Nothing here waits or retries:
//! an exhausted quota aborts the run and the scheduler tries again later.

mod info;

pub use info::RateLimitInfo;

use octocrab::Octocrab;
use tracing::{info, warn};

/// Remaining requests below which a warning is logged.
const LOW_REMAINING_THRESHOLD: u32 = 50;

/// Checks the current rate limit status for the core API (issues, repos).
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: core.remaining as u32,
        reset: core.reset,
        limit: core.limit as u32,
    })
}

/// Logs the core quota and reports whether it is exhausted.
///
/// A failed quota lookup is logged and treated as "not exhausted"; some
/// GitHub Enterprise installations disable the endpoint.
///
/// Returns the reset timestamp if no requests remain.
pub async fn core_quota_exhausted(octocrab: &Octocrab) -> Option<u64> {
    let info = match check_core_rate_limit(octocrab).await {
        Ok(info) => info,
        Err(e) => {
            warn!(error = %e, "Could not read rate limit, continuing");
            return None;
        }
    };

    log_quota(&info);
    info.is_exhausted().then_some(info.reset)
}

fn log_quota(info: &RateLimitInfo) {
    if info.is_low(LOW_REMAINING_THRESHOLD) {
        warn!(
            remaining = info.remaining,
            limit = info.limit,
            reset = info.reset,
            "Rate limit nearly exhausted"
        );
    } else {
        info!(
            remaining = info.remaining,
            limit = info.limit,
            "Rate limit quota"
        );
    }
}
