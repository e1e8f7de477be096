use crate::core::zodiac::Aspect;
use crate::models::{Chart, Placement, ScoringWeights};

/// Calculate a compatibility score (0-100) between two charts
///
/// Scoring formula:
/// score = 100 * (
///     sun_affinity * sun_weight +
///     moon_affinity * moon_weight +
///     rising_affinity * rising_weight
/// ) / (sun_weight + moon_weight + rising_weight)
///
/// where each affinity comes from the aspect between the two signs in the
/// same placement.
pub fn calculate_compatibility(seeker: &Chart, candidate: &Chart, weights: &ScoringWeights) -> f64 {
    let total_weight = weights.total();
    if total_weight <= 0.0 {
        return 0.0;
    }

    let weighted: f64 = Placement::ALL
        .into_iter()
        .map(|placement| {
            placement_affinity(seeker, candidate, placement) * weights.for_placement(placement)
        })
        .sum();

    (weighted / total_weight * 100.0).clamp(0.0, 100.0)
}

#[inline]
fn placement_affinity(seeker: &Chart, candidate: &Chart, placement: Placement) -> f64 {
    Aspect::between(seeker.sign(placement), candidate.sign(placement)).affinity()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::zodiac::Sign;

    fn chart(sun: Sign, moon: Sign, rising: Sign) -> Chart {
        Chart::new(sun, moon, rising)
    }

    #[test]
    fn test_identical_charts_score_full() {
        let c = chart(Sign::Aries, Sign::Leo, Sign::Gemini);
        let score = calculate_compatibility(&c, &c, &ScoringWeights::default());
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_symmetric() {
        let a = chart(Sign::Aries, Sign::Leo, Sign::Gemini);
        let b = chart(Sign::Cancer, Sign::Pisces, Sign::Libra);
        let weights = ScoringWeights::default();
        assert_eq!(
            calculate_compatibility(&a, &b, &weights),
            calculate_compatibility(&b, &a, &weights)
        );
    }

    #[test]
    fn test_weighted_combination() {
        let seeker = chart(Sign::Aries, Sign::Aries, Sign::Aries);
        // Trine sun, square moon, opposition rising
        let candidate = chart(Sign::Leo, Sign::Cancer, Sign::Libra);
        let weights = ScoringWeights::default();

        let expected = (0.9 * 0.5 + 0.2 * 0.3 + 0.5 * 0.2) / 1.0 * 100.0;
        let score = calculate_compatibility(&seeker, &candidate, &weights);
        assert!((score - expected).abs() < 1e-9, "got {}", score);
    }

    #[test]
    fn test_weights_are_normalized() {
        let seeker = chart(Sign::Aries, Sign::Taurus, Sign::Gemini);
        let candidate = chart(Sign::Sagittarius, Sign::Taurus, Sign::Pisces);
        let small = ScoringWeights { sun: 1.0, moon: 1.0, rising: 1.0 };
        let large = ScoringWeights { sun: 5.0, moon: 5.0, rising: 5.0 };

        let a = calculate_compatibility(&seeker, &candidate, &small);
        let b = calculate_compatibility(&seeker, &candidate, &large);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_zero_weights_score_zero() {
        let c = chart(Sign::Virgo, Sign::Virgo, Sign::Virgo);
        let weights = ScoringWeights { sun: 0.0, moon: 0.0, rising: 0.0 };
        assert_eq!(calculate_compatibility(&c, &c, &weights), 0.0);
    }

    #[test]
    fn test_score_range() {
        let weights = ScoringWeights::default();
        let seeker = chart(Sign::Scorpio, Sign::Taurus, Sign::Leo);
        for sun in Sign::ALL {
            for moon in Sign::ALL {
                let candidate = chart(sun, moon, Sign::Aquarius);
                let score = calculate_compatibility(&seeker, &candidate, &weights);
                assert!((0.0..=100.0).contains(&score));
            }
        }
    }
}
