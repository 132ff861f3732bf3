//! Property-based tests for the algebra of discrete time.
//!
//! Covers the total order, equality/ordering/canonical consistency, additive
//! identity and composition, immutability, and the infinity sentinel's
//! absorption and dominance.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use zeitgeist::{SymbolicTime, Time, TimeInstant};

const SAFE: i64 = 1 << 40;

fn any_time() -> impl Strategy<Value = Time> {
    prop_oneof![
        8 => any::<i64>().prop_map(Time::symbolic),
        1 => Just(Time::INFINITY),
    ]
}

fn hash_of(t: &Time) -> u64 {
    let mut hasher = DefaultHasher::new();
    t.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn order_is_total_and_transitive(a in any_time(), b in any_time(), c in any_time()) {
        let holds = [a < b, a == b, a > b].iter().filter(|x| **x).count();
        prop_assert_eq!(holds, 1);
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    #[test]
    fn equality_matches_ordering_and_canonical(a in any_time(), b in any_time()) {
        prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
        prop_assert_eq!(a == b, a.canonical() == b.canonical());
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn adding_zero_is_identity(v in any::<i64>()) {
        let t = SymbolicTime::of(v);
        prop_assert_eq!(t.add_periods(0), t);
        prop_assert_eq!(Time::from(t) + 0, Time::from(t));
    }

    #[test]
    fn addition_composes(v in -SAFE..SAFE, p in -SAFE..SAFE, q in -SAFE..SAFE) {
        let t = Time::symbolic(v);
        prop_assert_eq!(t + p + q, t + (p + q));
        prop_assert_eq!(t.checked_add(p).and_then(|x| x.checked_add(q)), t.checked_add(p + q));
    }

    #[test]
    fn addition_never_mutates_receiver(v in any::<i64>(), p in any::<i64>()) {
        let t = SymbolicTime::of(v);
        let _ = t.add_periods(p);
        let _ = t.checked_add(p);
        let _ = t.wrapping_add(p);
        prop_assert_eq!(t.value(), v);
    }

    #[test]
    fn saturating_addition_is_monotone(v in any::<i64>(), p in any::<i64>()) {
        let t = Time::symbolic(v);
        let moved = t + p;
        if p >= 0 {
            prop_assert!(moved >= t);
        } else {
            prop_assert!(moved <= t);
        }
    }

    #[test]
    fn infinity_absorbs_addition(p in any::<i64>()) {
        prop_assert!((Time::INFINITY + p).is_infinite());
        prop_assert_eq!(Time::INFINITY.add_periods(p), Time::INFINITY);
    }

    #[test]
    fn infinity_dominates_finite_times(v in i64::MIN..i64::MAX) {
        let t = Time::symbolic(v);
        prop_assert_eq!(Time::INFINITY.cmp(&t), Ordering::Greater);
        prop_assert_eq!(t.cmp(&Time::INFINITY), Ordering::Less);
    }

    #[test]
    fn display_parse_roundtrip(t in any_time()) {
        let back: Time = t.to_string().parse().unwrap();
        prop_assert_eq!(back, t);
    }
}
