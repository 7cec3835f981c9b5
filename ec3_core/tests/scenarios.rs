//! End-to-end member checks on catalog sections.

use approx::assert_relative_eq;

use ec3_core::buckling::{flexural_reduction_factor, ltb_reduction_factor};
use ec3_core::calculations::beam::{self, BeamForces, BeamInput, DeflectionLimitType};
use ec3_core::calculations::column::{self, ColumnInput};
use ec3_core::calculations::truss_member::{self, TrussMemberInput};
use ec3_core::calculations::LinearForceDistribution;
use ec3_core::materials::{epsilon, BucklingCurve, LtbCurve, SteelGrade};
use ec3_core::sections::{lookup_hollow, lookup_open};
use ec3_core::DesignSettings;

const SPAN_M: f64 = 6.0;

fn simply_supported_beam(q_kn_per_m: f64) -> BeamInput {
    BeamInput {
        label: "UDL beam".to_string(),
        section: lookup_open("UB 457x191x67").unwrap(),
        grade: "S275".to_string(),
        span_m: SPAN_M,
        forces: BeamForces::Distribution(LinearForceDistribution::simply_supported_udl(q_kn_per_m * 1e3, SPAN_M)),
        restraint_positions_m: vec![],
        deflection_limit: DeflectionLimitType::Other,
        max_deflection_mm: None,
    }
}

fn axial_column(n_ed_kn: f64) -> ColumnInput {
    ColumnInput {
        label: "Axial column".to_string(),
        section: lookup_open("UC 254x254x73").unwrap(),
        grade: "S355".to_string(),
        n_ed_kn,
        my_ed_knm: 0.0,
        mz_ed_knm: 0.0,
        v_ed_kn: 0.0,
        lcr_y_m: 4.0,
        lcr_z_m: 4.0,
        psi_y: 1.0,
        psi_z: 1.0,
        lcr_lt_m: None,
    }
}

#[test]
fn simply_supported_beam_passes() {
    let input = simply_supported_beam(30.0);
    let r = beam::calculate(&input, &DesignSettings::default()).unwrap();

    assert_eq!(r.fy_mpa, 275.0);
    assert_eq!(r.classification.section_class, 1);
    assert_relative_eq!(r.m_ed_knm, 135.0, max_relative = 1e-9);
    assert_relative_eq!(r.v_ed_kn, 90.0, max_relative = 1e-9);
    assert_relative_eq!(r.mc_rd_knm, 404.25, max_relative = 1e-9);
    assert!(r.bending_ok);
    assert!(r.shear_ok);

    // no intermediate restraints: one segment over the full span
    assert_eq!(r.ltb_segments.len(), 1);
    assert_eq!(r.governing_segment, Some(0));
    assert_eq!(r.ltb_segments[0].length_mm, 6000.0);

    // 5wL⁴/384EI
    let section = &input.section;
    let expected = 5.0 * 30.0 * SPAN_M.powi(4) * 1e12 / (384.0 * 210_000.0 * section.iy_mm4());
    assert_relative_eq!(r.delta_max_mm, expected, max_relative = 0.01);
    assert_relative_eq!(r.deflection_util, r.delta_max_mm / r.delta_limit_mm, max_relative = 1e-12);

    assert!(r.overall_ok);
    assert!(r.passes());
}

#[test]
fn overloaded_beam_fails() {
    let r = beam::calculate(&simply_supported_beam(90.0), &DesignSettings::default()).unwrap();

    assert!(!r.bending_ok);
    assert!(r.bending_util > 1.0);
    assert!(!r.overall_ok);

    let governing = r.governing_check().unwrap();
    let expected = if r.ltb_util > r.bending_util { "LTB" } else { "bending" };
    assert_eq!(governing.name, expected);
    assert_eq!(governing.utilisation, r.bending_util.max(r.ltb_util));
}

#[test]
fn cantilever_deflection_is_taken_at_the_free_end() {
    let (q_kn_per_m, span_m) = (10.0, 7.0);
    let mut input = simply_supported_beam(q_kn_per_m);
    input.span_m = span_m;
    input.forces = BeamForces::Distribution(LinearForceDistribution {
        shear_at_start_n: q_kn_per_m * 1e3 * span_m,
        moment_at_start_nm: -q_kn_per_m * 1e3 * span_m * span_m / 2.0,
        udl_n_per_m: -q_kn_per_m * 1e3,
    });
    input.deflection_limit = DeflectionLimitType::Cantilever;
    let r = beam::calculate(&input, &DesignSettings::default()).unwrap();

    // qL⁴/8EI with q in N/mm and L in mm
    let expected = q_kn_per_m * (span_m * 1e3).powi(4) / (8.0 * 210_000.0 * input.section.iy_mm4());
    assert_relative_eq!(r.delta_max_mm, expected, max_relative = 1e-9);
    assert_relative_eq!(r.delta_limit_mm, 7000.0 / 180.0, max_relative = 1e-12);
    assert!(r.deflection_util > 1.0);
    assert!(!r.deflection_ok);
    assert!(!r.overall_ok);
}

#[test]
fn load_scaling_is_linear_in_utilisation() {
    let light = beam::calculate(&simply_supported_beam(30.0), &DesignSettings::default()).unwrap();
    let heavy = beam::calculate(&simply_supported_beam(90.0), &DesignSettings::default()).unwrap();
    assert_relative_eq!(heavy.bending_util, 3.0 * light.bending_util, max_relative = 1e-9);
    assert_relative_eq!(heavy.deflection_util, 3.0 * light.deflection_util, max_relative = 1e-9);
}

#[test]
fn pure_axial_column_alternative_equals_n() {
    let input = axial_column(1500.0);
    let r = column::calculate(&input, &DesignSettings::default()).unwrap();

    let n = 1500.0e3 / (input.section.area_mm2() * r.fy_mpa);
    assert_eq!(r.alternative_util, n);
    assert_relative_eq!(r.mn_y_rd_knm, r.my_rd_knm * (1.0 - n) / (1.0 - 0.5 * r.a_w), max_relative = 1e-12);
    assert!(r.alternative_ok);
}

#[test]
fn axial_column_buckling_resistance() {
    let r = column::calculate(&axial_column(1500.0), &DesignSettings::default()).unwrap();
    assert!(r.chi_z <= r.chi_y);
    assert!(r.nb_rd_kn >= 1500.0);
    assert_eq!(r.annex_a.combined_buckling_ok, r.annex_a.eq6_61 <= 1.0 && r.annex_a.eq6_62 <= 1.0);
    assert!(r.overall_ok);

    let squashed = column::calculate(&axial_column(3200.0), &DesignSettings::default()).unwrap();
    assert!(squashed.nb_rd_kn < 3200.0);
    assert!(!squashed.overall_ok);
}

#[test]
fn tension_only_truss_member() {
    let input = TrussMemberInput {
        label: "Tie".to_string(),
        section: lookup_hollow("RHS 150x100x6.3").unwrap(),
        grade: "S355".to_string(),
        compression_kn: 0.0,
        tension_kn: 600.0,
        lcr_in_plane_m: 4.5,
        lcr_out_of_plane_m: 5.0,
        buckling_curve: "a".to_string(),
        has_holes: false,
        net_area_cm2: 0.0,
    };
    let r = truss_member::calculate(&input, &DesignSettings::default()).unwrap();

    assert_eq!(r.compression_util, 0.0);
    assert!(r.compression_ok);
    assert_relative_eq!(r.tension_util, 600.0 / r.nt_rd_kn, max_relative = 1e-12);
    assert_eq!(r.tension_ok, r.tension_util <= 1.0);
    assert_eq!(r.overall_ok, r.tension_ok);

    // buckling data does not affect a tie
    let mut long = input.clone();
    long.lcr_in_plane_m = 20.0;
    long.lcr_out_of_plane_m = 20.0;
    let r_long = truss_member::calculate(&long, &DesignSettings::default()).unwrap();
    assert!(r_long.chi < r.chi);
    assert_eq!(r_long.overall_ok, r.overall_ok);
}

#[test]
fn zero_demand_truss_member_passes() {
    let mut input = TrussMemberInput {
        label: "Zero".to_string(),
        section: lookup_hollow("SHS 80x80x4").unwrap(),
        grade: "S275".to_string(),
        compression_kn: 0.0,
        tension_kn: 0.0,
        lcr_in_plane_m: 2.0,
        lcr_out_of_plane_m: 2.0,
        buckling_curve: "c".to_string(),
        has_holes: true,
        net_area_cm2: 0.0,
    };
    let r = truss_member::calculate(&input, &DesignSettings::default()).unwrap();
    assert_eq!((r.compression_util, r.tension_util), (0.0, 0.0));
    assert!(r.overall_ok);

    input.grade = "S420".to_string();
    assert!(truss_member::calculate(&input, &DesignSettings::default()).is_err());
}

#[test]
fn yield_bands_are_inclusive() {
    for grade in SteelGrade::ALL {
        assert_eq!(grade.yield_strength(16.0), grade.yield_strength(0.0));
        assert!(grade.yield_strength(16.001) < grade.yield_strength(16.0));
    }
    assert_eq!(epsilon(235.0), 1.0);
}

#[test]
fn reduction_factors_stay_in_unit_interval() {
    for curve in BucklingCurve::ALL {
        assert_eq!(flexural_reduction_factor(0.0, curve.alpha()).chi, 1.0);
        let mut prev = 1.0;
        for k in 1..=60 {
            let chi = flexural_reduction_factor(k as f64 * 0.05, curve.alpha()).chi;
            assert!(chi > 0.0 && chi <= 1.0);
            assert!(chi <= prev + 1e-12);
            prev = chi;
        }
    }
    for curve in [LtbCurve::A, LtbCurve::B, LtbCurve::C, LtbCurve::D] {
        for k in 0..=60 {
            let lambda = k as f64 * 0.05;
            let chi = ltb_reduction_factor(lambda, curve.alpha()).chi;
            assert!(chi > 0.0 && chi <= 1.0);
        }
    }
}
