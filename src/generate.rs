//! Random `Opt` values for property tests.
//!
//! A fair coin decides between absent and present; present payloads come from
//! the standard distribution or from a caller-supplied generator.

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

use crate::optional::Opt;

impl<V> Distribution<Opt<V>> for StandardUniform
where
    V: Default,
    StandardUniform: Distribution<V>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Opt<V> {
        Opt::sample_with(rng, |rng| rng.random())
    }
}

impl<V: Default> Opt<V> {
    /// Samples an absent or present option, using `payload` for present values.
    pub fn sample_with<R, F>(rng: &mut R, payload: F) -> Self
    where
        R: Rng + ?Sized,
        F: FnOnce(&mut R) -> V,
    {
        if rng.random_bool(0.5) {
            Self::some(payload(rng))
        } else {
            Self::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_samples_both_variants() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples: Vec<Opt<u16>> = (0..200).map(|_| rng.random()).collect();

        assert!(samples.iter().any(Opt::is_absent));
        assert!(samples.iter().any(Opt::is_present));
        assert!(samples
            .iter()
            .filter(|sample| sample.is_absent())
            .all(|sample| sample.as_parts() == (&0, false)));
    }

    #[test]
    fn test_sample_with_custom_payload() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let sample = Opt::sample_with(&mut rng, |_| "fixed".to_string());
            if sample.is_present() {
                assert_eq!(sample.must(), "fixed");
            }
        }
    }
}
