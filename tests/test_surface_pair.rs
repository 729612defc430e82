use cascade_extrema::gp::{Ax3, Dir, Pln, Pnt, Sphere, Torus};
use cascade_extrema::{
    AnalyticSurface, Domain2D, Domain4D, ExtremaConfig, ExtremaError, PlaneTorus, SearchMode, Status,
    SurfacePairSolver,
};

const TOL: f64 = 1e-9;

fn lying_torus() -> Torus {
    Torus::from_ax3(Ax3::new(Pnt::from_coords(0.0, 0.0, 10.0), Dir::dx()), 5.0, 1.0).unwrap()
}

#[test]
fn test_dispatch_plane_torus_both_orders() {
    let plane = AnalyticSurface::from(Pln::new());
    let torus = AnalyticSurface::from(lying_torus());

    let mut forward = SurfacePairSolver::new(&plane, &torus).expect("supported pair");
    let mut backward = SurfacePairSolver::new(&torus, &plane).expect("supported pair");
    assert!(matches!(forward, SurfacePairSolver::PlaneTorus(_)));
    assert!(!forward.is_swapped());
    assert!(backward.is_swapped());

    let a = forward.perform(TOL, SearchMode::Min).clone();
    let b = backward.perform(TOL, SearchMode::Min).clone();
    assert_eq!(a.nb_ext(), 1);
    assert_eq!(b.nb_ext(), 1);
    assert_eq!(a.extrema[0].point1, b.extrema[0].point2);
    assert!((a.extrema[0].square_distance - 16.0).abs() < 1e-9);
    assert_eq!(forward.result(), &a);
}

#[test]
fn test_dispatch_matches_direct_solver() {
    let plane = Pln::from_pnt_dir(Pnt::from_coords(0.0, 0.0, -1.0), Dir::from_coords(0.1, 0.2, 1.0).unwrap());
    let torus = lying_torus();
    let mut direct = PlaneTorus::new(&plane, &torus);
    let mut dispatched = SurfacePairSolver::new(&plane.into(), &torus.into()).unwrap();
    assert_eq!(
        direct.perform(TOL, SearchMode::MinMax),
        dispatched.perform(TOL, SearchMode::MinMax)
    );
}

#[test]
fn test_dispatch_plane_sphere() {
    let sphere = Sphere::from_ax3(Ax3::new(Pnt::from_coords(0.0, 0.0, 5.0), Dir::dz()), 1.0).unwrap();
    let mut solver = SurfacePairSolver::new(&sphere.into(), &Pln::new().into()).unwrap();
    assert!(matches!(solver, SurfacePairSolver::PlaneSphere(_)));
    assert!(solver.is_swapped());

    let result = solver.perform(TOL, SearchMode::MinMax);
    assert_eq!(result.status, Status::Ok);
    assert_eq!(result.nb_ext(), 2);
    assert!((result.min_square_distance().unwrap() - 16.0).abs() < 1e-12);
    assert!((result.max_square_distance().unwrap() - 36.0).abs() < 1e-12);
    // Sphere first: the first point is on the sphere.
    let min = result.extrema[result.min_index().unwrap()];
    assert!((min.point1.z() - 4.0).abs() < 1e-12);
}

#[test]
fn test_dispatch_with_domain() {
    let plane = AnalyticSurface::from(Pln::new());
    let torus = AnalyticSurface::from(lying_torus());
    // Plane rectangle far from the torus footprint rejects everything.
    let domain = Domain4D::new(Domain2D::new(100.0, 200.0, 100.0, 200.0).unwrap(), Domain2D::default());
    let mut solver = SurfacePairSolver::with_domain(&plane, &torus, domain).unwrap();
    let result = solver.perform(TOL, SearchMode::MinMax);
    assert_eq!(result.status, Status::Ok);
    assert_eq!(result.nb_ext(), 0);
}

#[test]
fn test_unsupported_pairs() {
    let torus = AnalyticSurface::from(lying_torus());
    let plane = AnalyticSurface::from(Pln::new());
    let err = SurfacePairSolver::new(&torus, &torus).unwrap_err();
    assert_eq!(err, ExtremaError::UnsupportedSurfacePair("torus / torus".to_string()));
    assert_eq!(err.to_string(), "Unsupported surface pair: torus / torus");
    assert!(SurfacePairSolver::new(&plane, &plane).is_err());
}

#[test]
fn test_solver_config_roundtrip() {
    let config = ExtremaConfig {
        angular_tolerance: 1e-9,
        ..ExtremaConfig::default()
    };
    let json = serde_json::to_string(&config).expect("serializable");
    let back: ExtremaConfig = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, config);

    let mode: SearchMode = serde_json::from_str("\"Max\"").unwrap();
    assert_eq!(mode, SearchMode::Max);

    // A tilt below the angular tolerance counts as parallel.
    let axis = Dir::from_coords(1.0, 0.0, 1e-10).unwrap();
    let torus = Torus::from_ax3(Ax3::new(Pnt::from_coords(0.0, 0.0, 10.0), axis), 5.0, 1.0).unwrap();
    let mut solver = PlaneTorus::new(&Pln::new(), &torus).with_config(back).unwrap();
    let result = solver.perform(TOL, SearchMode::MinMax);
    assert_eq!(result.nb_ext(), 4);
    assert!(result
        .extrema
        .iter()
        .all(|e| e.v2.abs() < 1e-12 || (e.v2 - std::f64::consts::PI).abs() < 1e-12));
}
