// Unit tests for the matching core

use horoscope_matcher::core::{
    calculate_compatibility,
    zodiac::{Aspect, Element, Sign},
    AstroMatcher, MatchMaker,
};
use horoscope_matcher::models::{Chart, Person, ScoringWeights};
use horoscope_matcher::Roster;

fn person(name: &str, sun: Sign, moon: Sign, rising: Sign) -> Person {
    Person {
        name: name.to_string(),
        sun,
        moon,
        rising,
    }
}

#[test]
fn test_every_sign_parses_from_its_name() {
    for sign in Sign::ALL {
        assert_eq!(sign.to_string().parse::<Sign>(), Ok(sign));
        assert_eq!(sign.name().to_lowercase().parse::<Sign>(), Ok(sign));
    }
}

#[test]
fn test_each_element_has_three_signs() {
    for element in [Element::Fire, Element::Earth, Element::Air, Element::Water] {
        let count = Sign::ALL.iter().filter(|s| s.element() == element).count();
        assert_eq!(count, 3);
    }
}

#[test]
fn test_aspect_is_symmetric() {
    for a in Sign::ALL {
        for b in Sign::ALL {
            assert_eq!(Aspect::between(a, b), Aspect::between(b, a));
        }
    }
}

#[test]
fn test_conjunction_has_highest_affinity() {
    let best = Aspect::Conjunction.affinity();
    for a in Sign::ALL {
        for b in Sign::ALL {
            assert!(Aspect::between(a, b).affinity() <= best);
        }
    }
}

#[test]
fn test_sun_dominates_default_weights() {
    let seeker = Chart::new(Sign::Aries, Sign::Aries, Sign::Aries);
    let same_sun = Chart::new(Sign::Aries, Sign::Cancer, Sign::Cancer);
    let same_rising = Chart::new(Sign::Cancer, Sign::Cancer, Sign::Aries);
    let weights = ScoringWeights::default();

    assert!(
        calculate_compatibility(&seeker, &same_sun, &weights)
            > calculate_compatibility(&seeker, &same_rising, &weights)
    );
}

#[test]
fn test_builtin_roster_matches_every_chart() {
    let matcher = AstroMatcher::with_defaults(Roster::builtin().unwrap());

    for sun in Sign::ALL {
        let ranked = matcher.rank(&Chart::new(sun, Sign::Leo, Sign::Gemini));
        assert!(!ranked.is_empty(), "no matches for {} sun", sun);
        assert!(ranked.len() <= AstroMatcher::DEFAULT_LIMIT);
        assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
        assert!(ranked.iter().all(|m| m.score >= AstroMatcher::DEFAULT_MIN_SCORE));

        let names: Vec<String> = ranked.into_iter().map(|m| m.name).collect();
        assert_eq!(matcher.make_matches(sun.name(), "Leo", "Gemini").unwrap(), names);
    }

    let matches = matcher.make_matches("Aries", "Leo", "Gemini").unwrap();
    assert_eq!(matches[..2], ["Quinn", "Kendall"]);
}

#[test]
fn test_matches_ranked_by_score() {
    let roster = Roster::new(vec![
        person("Square", Sign::Cancer, Sign::Cancer, Sign::Cancer),
        person("Trine", Sign::Leo, Sign::Leo, Sign::Leo),
        person("Exact", Sign::Aries, Sign::Aries, Sign::Aries),
        person("Sextile", Sign::Gemini, Sign::Gemini, Sign::Gemini),
    ])
    .unwrap();
    let matcher = AstroMatcher::new(roster, ScoringWeights::default(), 10, 0.0);

    let matches = matcher.make_matches("Aries", "Aries", "Aries").unwrap();
    assert_eq!(matches, vec!["Exact", "Trine", "Sextile", "Square"]);
}

#[test]
fn test_empty_roster_yields_no_matches() {
    let matcher = AstroMatcher::with_defaults(Roster::default());
    assert!(matcher.make_matches("Aries", "Leo", "Gemini").unwrap().is_empty());
}

#[test]
fn test_unknown_sign_reported() {
    let matcher = AstroMatcher::with_defaults(Roster::builtin().unwrap());
    let err = matcher.make_matches("Aries", "Leo", "").unwrap_err();
    assert!(err.to_string().contains("rising"));
}
