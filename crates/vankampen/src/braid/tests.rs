use super::*;
use crate::group::FreeWord;
use num_complex::Complex64;
use proptest::prelude::*;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn swap_over_top() -> Vec<Strand> {
    vec![
        Strand::new(vec![(0.0, c(1.0, 0.0)), (0.5, c(0.0, 1.0)), (1.0, c(-1.0, 0.0))]),
        Strand::new(vec![(0.0, c(-1.0, 0.0)), (0.5, c(0.0, -1.0)), (1.0, c(1.0, 0.0))]),
    ]
}

#[test]
fn three_strand_example() {
    let paths = vec![
        Strand::new(vec![
            (0.0, c(0.0, 1.0)),
            (0.2, c(-1.0, -0.5)),
            (0.8, c(-1.0, 0.0)),
            (1.0, c(0.0, -1.0)),
        ]),
        Strand::new(vec![(0.0, c(-1.0, 0.0)), (0.5, c(0.0, -1.0)), (1.0, c(1.0, 0.0))]),
        Strand::new(vec![(0.0, c(1.0, 0.0)), (0.5, c(1.0, 1.0)), (1.0, c(0.0, 1.0))]),
    ];
    let b = braid_from_piecewise(&paths);
    assert_eq!(b.letters(), &[1, 2]);
    assert_eq!(b.to_string(), "s1*s2");
    assert_eq!(braid_from_piecewise(&paths), b);
}

#[test]
fn counterclockwise_half_twist_is_positive() {
    let strands = swap_over_top();
    assert_eq!(braid_from_piecewise(&strands).letters(), &[1]);
    let back: Vec<Strand> = strands.iter().map(Strand::reversed).collect();
    assert_eq!(braid_from_piecewise(&back).letters(), &[-1]);
}

#[test]
fn straight_parallel_strands_give_identity() {
    let strands = vec![
        Strand::linear(c(0.0, 0.0), c(0.0, 1.0)),
        Strand::linear(c(1.0, 0.0), c(1.0, 1.0)),
        Strand::linear(c(2.0, 0.0), c(2.0, 1.0)),
    ];
    let b = braid_from_piecewise(&strands);
    assert!(b.is_empty());
    assert_eq!(b.to_string(), "1");
}

#[test]
fn simultaneous_crossings_resolve_deterministically() {
    // Three strands reverse their order through one common point in re.
    let strands = vec![
        Strand::linear(c(-1.0, 0.0), c(1.0, 0.2)),
        Strand::linear(c(0.0, 0.1), c(0.0, -0.1)),
        Strand::linear(c(1.0, 0.0), c(-1.0, 0.3)),
    ];
    let b = braid_from_piecewise(&strands);
    assert_eq!(b.len(), 3);
    assert_eq!(b, braid_from_piecewise(&strands));
    assert_eq!(b.permutation(), vec![2, 1, 0]);
}

#[test]
fn strand_interpolation_hits_samples() {
    let s = &swap_over_top()[0];
    assert_eq!(s.at(0.5), c(0.0, 1.0));
    assert_eq!(s.at(0.25), c(0.5, 0.5));
    assert_eq!(s.start(), c(1.0, 0.0));
    assert_eq!(s.end(), c(-1.0, 0.0));
}

#[test]
fn braid_word_algebra() {
    let b = BraidWord::new(3, vec![1, -2, 2, 1]);
    assert_eq!(b.reduced().letters(), &[1, 1]);
    assert_eq!(b.inverse().letters(), &[-1, -2, 2, -1]);
    assert!((b.clone() * b.inverse()).reduced().is_empty());
    assert_eq!(BraidWord::new(3, vec![1, 2]).permutation(), vec![2, 0, 1]);
    assert_eq!(BraidWord::new(3, vec![2, -1]).to_string(), "s2*s1^-1");
}

#[test]
fn artin_action_on_generators() {
    let s1 = BraidWord::new(2, vec![1]);
    assert_eq!(s1.act_on(&FreeWord::gen(0)), FreeWord::new([1, 2, -1]));
    assert_eq!(s1.act_on(&FreeWord::gen(1)), FreeWord::gen(0));
    let s1_inv = s1.inverse();
    assert_eq!(s1_inv.act_on(&FreeWord::gen(0)), FreeWord::gen(1));
    assert_eq!(s1_inv.act_on(&FreeWord::gen(1)), FreeWord::new([-2, 1, 2]));
}

#[test]
fn braid_relation_holds_in_the_action() {
    let lhs = BraidWord::new(3, vec![1, 2, 1]);
    let rhs = BraidWord::new(3, vec![2, 1, 2]);
    for i in 0..3 {
        assert_eq!(lhs.act_on(&FreeWord::gen(i)), rhs.act_on(&FreeWord::gen(i)));
    }
}

fn letters(n: usize) -> impl Strategy<Value = Vec<i32>> {
    let m = n as i32;
    prop::collection::vec(prop_oneof![1..m, -(m - 1)..0], 0..12)
}

proptest! {
    #[test]
    fn action_fixes_the_product_of_generators(ls in letters(4)) {
        let b = BraidWord::new(4, ls);
        let prod = FreeWord::product_of_gens(0..4);
        prop_assert_eq!(b.act_on(&prod), prod);
    }

    #[test]
    fn action_is_a_right_action(a in letters(3), b in letters(3), w in prop::collection::vec(prop_oneof![1i32..4, -3i32..0], 0..6)) {
        let (a, b) = (BraidWord::new(3, a), BraidWord::new(3, b));
        let w = FreeWord::new(w);
        prop_assert_eq!((&a * &b).act_on(&w), b.act_on(&a.act_on(&w)));
        prop_assert_eq!((&a * &a.inverse()).act_on(&w), w);
    }

    #[test]
    fn extraction_is_deterministic_and_reversible(
        pts in prop::collection::vec((-5.0f64..5.0, -5.0f64..5.0, -5.0f64..5.0, -5.0f64..5.0), 3)
    ) {
        let strands: Vec<Strand> = pts
            .iter()
            .map(|&(a, b, x, y)| Strand::linear(c(a, b), c(x, y)))
            .collect();
        let forward = braid_from_piecewise(&strands);
        prop_assert_eq!(&forward, &braid_from_piecewise(&strands));
        let back: Vec<Strand> = strands.iter().map(Strand::reversed).collect();
        let round_trip = &forward * &braid_from_piecewise(&back);
        prop_assert!(round_trip.reduced().is_empty());
    }
}
