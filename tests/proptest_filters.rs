//! Property tests for filter combinators
//!
//! Every combinator must produce a family satisfying the three closure laws,
//! and each must decide membership exactly as its definition says.


use generators::{
    affine, arb_carrier_and_mask, arb_carrier_and_masks, arb_sized_filter, arb_sized_filter_pair,
    carrier, mask_of, set_from_mask,
};
use proptest::prelude::*;
use setfilter::{Filter, PredSet};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every combinator tree satisfies the closure laws
    #[test]
    fn combinators_preserve_laws((n, spec) in arb_sized_filter()) {
        let f = spec.build(n);
        prop_assert_eq!(f.check_laws(), Ok(()));
    }

    /// principal(s).contains(t) ⟺ s ⊆ t
    #[test]
    fn principal_is_supersets((n, ms) in arb_carrier_and_masks(2)) {
        let c = carrier(n);
        let (s, t) = (set_from_mask(ms[0]), set_from_mask(ms[1]));
        let f = Filter::principal(c.clone(), s.clone());
        prop_assert_eq!(f.contains(&t), c.subset(&s, &t));
    }

    /// bot().contains(t) ⟺ t is the whole carrier
    #[test]
    fn bot_is_whole_only((n, m) in arb_carrier_and_mask()) {
        let f = Filter::bot(carrier(n));
        prop_assert_eq!(f.contains(&set_from_mask(m)), m == (1u64 << n) - 1);
    }

    /// infimum({F, G}).contains(t) ⟺ F.contains(t) ∧ G.contains(t)
    #[test]
    fn infimum_is_conjunction((n, a, b) in arb_sized_filter_pair(), t in 0u64..32) {
        let (f, g) = (a.build(n), b.build(n));
        let inf = Filter::infimum(carrier(n), [f.clone(), g.clone()]).unwrap();
        let t = set_from_mask(t);
        prop_assert_eq!(inf.contains(&t), f.contains(&t) && g.contains(&t));
    }

    /// map(f, F).contains(t) ⟺ F.contains(preimage(f, t))
    #[test]
    fn map_is_preimage((n, spec) in arb_sized_filter(), scale in 0u32..4, shift in 0u32..4, t in 0u64..32) {
        let f = spec.build(n);
        let func = affine(n, scale, shift);
        let mapped = f.map(&func, &carrier(n)).unwrap();
        let t = set_from_mask(t);
        prop_assert_eq!(mapped.contains(&t), f.contains(&t.preimage(&func)));
    }

    /// The closure of a single set is its principal filter
    #[test]
    fn generated_singleton_is_principal((n, m) in arb_carrier_and_mask()) {
        let c = carrier(n);
        let generated = Filter::generated_from(c.clone(), [set_from_mask(m)]);
        let principal = Filter::principal(c, set_from_mask(m));
        prop_assert!(generated.equivalent(&principal).unwrap());
        prop_assert_eq!(generated.accepted_masks().unwrap(), principal.accepted_masks().unwrap());
    }

    /// generated_from accepts every base set, and its witnesses really generate
    #[test]
    fn generated_witnesses((n, ms) in arb_carrier_and_masks(3), t in 0u64..32) {
        let c = carrier(n);
        let base: Vec<_> = ms.iter().map(|&m| set_from_mask(m)).collect();
        let g = Filter::generated_from(c.clone(), base.clone());
        for s in &base {
            prop_assert!(g.contains(s));
        }
        prop_assert_eq!(g.generated().unwrap().base().len(), base.len());

        let t = set_from_mask(t);
        let witness = g.generated().unwrap().witness(&t);
        prop_assert_eq!(witness.is_some(), g.contains(&t));
        if let Some(indices) = witness {
            let meet = PredSet::intersection_all(indices.iter().map(|&i| base[i].clone()));
            prop_assert!(c.subset(&meet, &t));
            // Dropping any chosen set breaks the witness
            for skip in 0..indices.len() {
                let rest = indices.iter().enumerate().filter(|&(k, _)| k != skip).map(|(_, &i)| base[i].clone());
                prop_assert!(!c.subset(&PredSet::intersection_all(rest), &t));
            }
        }
    }

    /// Kernel-based equivalence agrees with exhaustive comparison
    #[test]
    fn equivalence_matches_enumeration((n, a, b) in arb_sized_filter_pair()) {
        let (f, g) = (a.build(n), b.build(n));
        let exhaustive = f.accepted_masks().unwrap() == g.accepted_masks().unwrap();
        prop_assert_eq!(f.equivalent(&g).unwrap(), exhaustive);
    }

    /// Kernel-based ordering agrees with exhaustive comparison
    #[test]
    fn ordering_matches_enumeration((n, a, b) in arb_sized_filter_pair()) {
        let (f, g) = (a.build(n), b.build(n));
        let (fa, ga) = (f.accepted_masks().unwrap(), g.accepted_masks().unwrap());
        prop_assert_eq!(f.is_coarser_than(&g).unwrap(), fa.is_subset(&ga));
    }

    /// A filter is principal on its kernel
    #[test]
    fn filter_is_principal_on_kernel((n, spec) in arb_sized_filter()) {
        let f = spec.build(n);
        let principal = Filter::principal(carrier(n), f.kernel());
        prop_assert_eq!(f.accepted_masks().unwrap(), principal.accepted_masks().unwrap());
    }

    /// neBot ⟺ the kernel is inhabited and is not the whole carrier
    #[test]
    fn ne_bot_iff_kernel_proper((n, spec) in arb_sized_filter()) {
        let f = spec.build(n);
        let kernel = mask_of(n, &f.kernel());
        prop_assert_eq!(f.is_ne_bot(), kernel != 0 && kernel != (1u64 << n) - 1);
        prop_assert_eq!(f.is_ne_bot(), !f.contains(&PredSet::empty()) && !f.is_bot());
    }
}

/// The finite-intersection closure equals the infimum of every filter
/// containing the base, enumerated over a 3-element carrier.
#[test]
fn generated_matches_smallest_filter_containing_base() {
    let n = 3;
    let c = carrier(n);
    let subsets = 1u64 << n;

    // Every family of subsets that happens to satisfy the filter laws
    let all_filters: Vec<(u64, Filter<u32>)> = (0..1u64 << subsets)
        .filter_map(|family| {
            Filter::from_predicate(c.clone(), |t| family & (1 << mask_of(n, t)) != 0)
                .ok()
                .map(|f| (family, f))
        })
        .collect();
    // On a finite carrier the filters are exactly the principal ones
    assert_eq!(all_filters.len(), subsets as usize);

    for base_family in 0..1u64 << subsets {
        let base: Vec<u64> = (0..subsets).filter(|&m| base_family & (1 << m) != 0).collect();
        let containing = all_filters
            .iter()
            .filter(|(family, _)| base.iter().all(|&m| *family & (1 << m) != 0))
            .map(|(_, f)| f.clone());
        let smallest = Filter::infimum(c.clone(), containing).unwrap();
        let generated = Filter::generated_from(c.clone(), base.iter().map(|&m| set_from_mask(m)));

        assert_eq!(
            generated.accepted_masks().unwrap(),
            smallest.accepted_masks().unwrap(),
            "base family {base_family:#b}"
        );
    }
}
