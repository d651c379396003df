use super::segment::match_roots;
use super::*;
use crate::group::FreeWord;

fn poly(s: &str) -> BiPoly {
    s.parse().unwrap()
}

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

#[test]
fn cusp_segment_braid_is_one_positive_crossing() {
    // Above x = 1 the roots of y^3 + 1 are -1 and 1/2 ± i√3/2; the conjugate
    // pair swaps real order as x turns toward 1 + i/2.
    let b = braid_in_segment(&poly("x^2 + y^3"), c(1.0, 0.0), c(1.0, 0.5), &ZvkCfg::default())
        .unwrap();
    assert_eq!(b.strands(), 3);
    assert_eq!(b.letters(), &[2]);
    assert_eq!(b.to_string(), "s2");
}

#[test]
fn segment_followed_by_its_reverse_acts_trivially() {
    let f = poly("y^3 + x^3 - 1");
    let cfg = ZvkCfg::default();
    let (x0, x1) = (c(-15.0 / 7.0, 0.0), c(0.0, 2.5));
    let there = braid_in_segment(&f, x0, x1, &cfg).unwrap();
    let back = braid_in_segment(&f, x1, x0, &cfg).unwrap();
    let round = there * back;
    assert_eq!(round.permutation(), vec![0, 1, 2]);
    for k in 0..3 {
        assert_eq!(round.act_on(&FreeWord::gen(k)), FreeWord::gen(k));
    }
}

#[test]
fn fibers_are_labeled_in_canonical_order() {
    let fiber = fiber_at(&poly("y^3 + x^2"), c(1.0, 0.0), &ZvkCfg::default()).unwrap();
    assert_eq!(fiber.degree(), 3);
    let re: Vec<f64> = fiber.roots.iter().map(|r| r.approx().re).collect();
    assert_eq!(re[1], 0.5);
    assert_eq!(re[2], 0.5);
    assert!(fiber.roots[1].approx().im < 0.0);
    assert!(fiber.roots.iter().enumerate().all(|(k, r)| r.index() == k));
}

#[test]
fn fiber_on_the_discriminant_is_rejected() {
    assert_eq!(
        fiber_at(&poly("y^2 - x"), c(0.0, 0.0), &ZvkCfg::default()).unwrap_err(),
        ZvkError::DegenerateFiber {
            vertex: format!("{}", c(0.0, 0.0)),
            expected: 2,
            found: 1,
        }
    );
}

#[test]
fn nearest_root_matching_never_reuses_a_root() {
    let fiber = fiber_at(&poly("y^2 - 1"), c(0.0, 0.0), &ZvkCfg::default()).unwrap();
    let ok = match_roots(&[c(0.9, 0.0), c(-1.1, 0.0)], &fiber.roots, c(0.0, 0.0)).unwrap();
    assert_eq!(ok, vec![1, 0]);
    let clash = match_roots(&[c(0.9, 0.0), c(1.1, 0.0)], &fiber.roots, c(0.0, 0.0));
    assert!(matches!(clash, Err(ZvkError::RootsTooClose { .. })));
}

#[test]
fn discriminant_of_a_parabola_is_the_origin() {
    let pts = discriminant_points(&poly("y^2 - x"), &ZvkCfg::default()).unwrap();
    assert_eq!(pts.len(), 1);
    assert!(pts[0].contains(c(0.0, 0.0)));
    assert!(discriminant_points(&poly("y - x^2"), &ZvkCfg::default())
        .unwrap()
        .is_empty());
}

#[test]
fn discriminant_with_gaussian_coefficients() {
    // y^2 = x - i branches over x = i only.
    let pts = discriminant_points(&poly("y^2 - x + I"), &ZvkCfg::default()).unwrap();
    assert_eq!(pts.len(), 1);
    assert!(pts[0].contains(c(0.0, 1.0)));
}

#[test]
fn generic_position_shifts_until_lc_is_constant() {
    let cfg = ZvkCfg::default();
    let g = generic_position(&poly("x*y - 1"), false, &cfg).unwrap();
    assert!(g.has_constant_lc_y());
    assert_eq!(g.degree_y(), 2);
    // Already generic, but a squared factor is dropped.
    let g = generic_position(&poly("(y - x)^2"), false, &cfg).unwrap();
    assert_eq!(g.degree_y(), 1);
    // Projectively the total degree must equal the y-degree.
    let g = generic_position(&poly("y - x^2"), true, &cfg).unwrap();
    assert_eq!(g.total_degree(), g.degree_y());

    let strict = ZvkCfg {
        max_shifts: 0,
        ..cfg
    };
    assert_eq!(
        generic_position(&poly("x*y - 1"), false, &strict),
        Err(ZvkError::GenericPosition { attempts: 0 })
    );
    assert_eq!(generic_position(&poly("5"), false, &cfg), Err(ZvkError::NotBivariate));
    assert_eq!(
        generic_position(&BiPoly::zero(), false, &cfg),
        Err(ZvkError::ZeroPolynomial)
    );
}

#[test]
fn a_line_has_free_cyclic_group() {
    let p = fundamental_group(&poly("y - x"), GroupOptions::default(), &ZvkCfg::default())
        .unwrap();
    assert_eq!(p.ngens(), 1);
    assert!(p.relators().is_empty());
}

#[test]
fn two_lines_through_the_origin_give_z_squared() {
    let raw = GroupOptions {
        simplified: false,
        projective: false,
    };
    let p = fundamental_group(&poly("y^2 - x^2"), raw, &ZvkCfg::default()).unwrap();
    // One branch point inside a square of four basepoints.
    assert_eq!(p.ngens(), 2 * 4);
    assert_eq!(p.relators().len(), 2 * 4);
    assert_eq!(p.abelian_invariants(), vec![0, 0]);
}

#[test]
fn summary_reports_what_was_tracked() {
    let s = group_summary(&poly("x*y - 1"), GroupOptions::default(), &ZvkCfg::default()).unwrap();
    assert_eq!(s.generic, poly("y^2 + x*y - 1"));
    assert_eq!(s.degree(), 2);
    // disc_y = x^2 + 4 vanishes at ±2i.
    assert_eq!(s.branch_points, 2);
    assert_eq!(s.presentation.abelian_invariants(), vec![0]);
    assert_eq!(
        s.presentation,
        fundamental_group(&poly("x*y - 1"), GroupOptions::default(), &ZvkCfg::default()).unwrap()
    );
}

#[test]
fn projective_relator_is_the_product_at_vertex_zero() {
    let opts = GroupOptions {
        simplified: false,
        projective: true,
    };
    let p = fundamental_group(&poly("y^2 - x^2 - 1"), opts, &ZvkCfg::default()).unwrap();
    assert_eq!(p.relators()[0], FreeWord::product_of_gens(0..2));
}
