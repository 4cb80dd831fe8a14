//! Helpers shared by the integration tests

#![allow(dead_code)]

#[cfg(feature = "rand")]
use rand::{Rng, distr::Alphanumeric};

/// Route `log` output through the test harness
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Short alphanumeric string, possibly empty
#[cfg(feature = "rand")]
pub fn random_text<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(0..16);
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}
