//! Unit tests for the four integrators

use glam::Vec3;
use pointmass_core::engine::{Body, ForceModel, KinematicState};
use pointmass_core::integrator::{euler, runge_kutta4, semi_implicit_euler, verlet, IntegratorKind};
use pointmass_core::tests::test_helpers::{approx_eq_vec3, run_steps, single_body};
use pointmass_core::Scenario;

fn state_with_force(position: Vec3, velocity: Vec3, mass: f32, force: Vec3) -> KinematicState {
    let mut state = KinematicState::new(position, velocity, mass);
    state.applied_force = force;
    state
}

#[test]
fn test_zero_dt_is_noop_for_every_integrator() {
    for kind in IntegratorKind::ALL {
        // A distinct history so a Verlet update would be visible
        let body = Body::new(
            "still",
            KinematicState::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.5, 2.0), 2.0)
                .with_previous_position(Vec3::new(0.5, 2.0, 3.5)),
        )
        .with_force(ForceModel::constant(Vec3::new(0.0, 0.0, -10.0)));
        let mut scenario = Scenario::new(vec![body], kind).unwrap();
        let before = scenario.bodies()[0].state;

        scenario.step(0.0).unwrap();

        let after = scenario.bodies()[0].state;
        assert_eq!(after.position, before.position, "{} moved at dt = 0", kind);
        assert_eq!(after.velocity, before.velocity, "{} changed velocity at dt = 0", kind);
        assert_eq!(
            after.previous_position, before.previous_position,
            "{} rewrote its history at dt = 0",
            kind
        );
        assert_eq!(after, before);
        assert_eq!(scenario.elapsed(), 0.0);
    }
}

#[test]
fn test_zero_dt_raw_integrators_keep_state() {
    let start = state_with_force(Vec3::ONE, Vec3::new(3.0, 0.0, 0.0), 1.0, Vec3::Z);

    for advance in [euler, semi_implicit_euler, runge_kutta4] {
        let mut state = start;
        advance(&mut state, 0.0);
        assert_eq!(state.position, start.position);
        assert_eq!(state.velocity, start.velocity);
    }

    // With no history Verlet stays put too
    let mut state = start;
    verlet(&mut state, 0.0);
    assert_eq!(state.position, start.position);
}

#[test]
fn test_euler_uses_old_velocity() {
    let mut state = state_with_force(Vec3::ZERO, Vec3::X, 2.0, Vec3::new(0.0, 4.0, 0.0));
    euler(&mut state, 0.5);

    // x' = x + dt * v, v' = v + dt * F/m
    assert!(approx_eq_vec3(state.position, Vec3::new(0.5, 0.0, 0.0), 1e-6));
    assert!(approx_eq_vec3(state.velocity, Vec3::new(1.0, 1.0, 0.0), 1e-6));
}

#[test]
fn test_semi_implicit_euler_uses_new_velocity() {
    let mut state = state_with_force(Vec3::ZERO, Vec3::X, 2.0, Vec3::new(0.0, 4.0, 0.0));
    semi_implicit_euler(&mut state, 0.5);

    // v' = (1, 1, 0), x' = 0.5 * v'
    assert!(approx_eq_vec3(state.velocity, Vec3::new(1.0, 1.0, 0.0), 1e-6));
    assert!(approx_eq_vec3(state.position, Vec3::new(0.5, 0.5, 0.0), 1e-6));
}

#[test]
fn test_euler_variants_differ_only_in_ordering() {
    let start = state_with_force(
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(0.0, 2.0, 0.0),
        1.0,
        Vec3::new(0.0, 0.0, -10.0),
    );
    let mut explicit = start;
    let mut symplectic = start;
    euler(&mut explicit, 0.1);
    semi_implicit_euler(&mut symplectic, 0.1);

    assert_ne!(explicit.position, symplectic.position);
    assert_eq!(explicit.velocity, symplectic.velocity);

    // The gap is exactly dt^2 * a
    let gap = symplectic.position - explicit.position;
    assert!(approx_eq_vec3(gap, Vec3::new(0.0, 0.0, -0.1), 1e-5));
}

#[test]
fn test_verlet_records_previous_position() {
    let mut state = state_with_force(Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO, 1.0, -2.0 * Vec3::Y)
        .with_previous_position(Vec3::X);
    let before = state.position;

    verlet(&mut state, 0.5);

    assert_eq!(state.previous_position, before);
    // x' = 2 + (2 - 1) + 0.25 * (0, -2, 0)
    assert!(approx_eq_vec3(state.position, Vec3::new(3.0, -0.5, 0.0), 1e-6));
    // Velocity is not tracked
    assert_eq!(state.velocity, Vec3::ZERO);
}

#[test]
fn test_verlet_without_force_is_uniform_motion() {
    let body = Body::new(
        "drifter",
        KinematicState::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, 1.0)
            .with_previous_position(Vec3::new(0.75, 0.0, 0.5)),
    );
    let mut scenario = Scenario::new(vec![body], IntegratorKind::Verlet).unwrap();
    let displacement = Vec3::new(0.25, 0.0, -0.5);

    let mut last = scenario.position(0).unwrap();
    for _ in 0..10 {
        scenario.step(0.1).unwrap();
        let now = scenario.position(0).unwrap();
        assert!(approx_eq_vec3(now - last, displacement, 1e-5));
        last = now;
    }
}

#[test]
fn test_other_integrators_leave_previous_position_alone() {
    let marker = Vec3::new(-99.0, 42.0, 7.0);
    for kind in [
        IntegratorKind::Euler,
        IntegratorKind::SemiImplicitEuler,
        IntegratorKind::RungeKutta4,
    ] {
        let mut state =
            state_with_force(Vec3::ZERO, Vec3::ONE, 1.0, Vec3::Z).with_previous_position(marker);
        kind.advance(&mut state, 0.2);
        assert_eq!(state.previous_position, marker, "{} touched previous_position", kind);
    }
}

#[test]
fn test_rk4_matches_closed_form_under_constant_force() {
    let p0 = Vec3::new(1.0, 2.0, 3.0);
    let v0 = Vec3::new(0.5, -1.0, 2.0);
    let force = Vec3::new(0.0, 3.0, -10.0);
    let mass = 2.0;
    let accel = force / mass;

    for dt in [0.016, 0.1, 0.5, 1.0, 2.0] {
        let mut state = state_with_force(p0, v0, mass, force);
        runge_kutta4(&mut state, dt);

        let expected_p = p0 + v0 * dt + 0.5 * accel * dt * dt;
        let expected_v = v0 + accel * dt;
        assert!(
            approx_eq_vec3(state.position, expected_p, 1e-4),
            "dt = {}: {:?} != {:?}",
            dt,
            state.position,
            expected_p
        );
        assert!(approx_eq_vec3(state.velocity, expected_v, 1e-4));
    }
}

#[test]
fn test_rk4_stays_on_parabola_over_many_steps() {
    let p0 = Vec3::new(-6.0, 1.0, 12.0);
    let force = Vec3::new(0.0, 0.0, -10.0);
    let mut scenario = Scenario::new(
        vec![single_body(p0, Vec3::ZERO, 1.0, force)],
        IntegratorKind::RungeKutta4,
    )
    .unwrap();

    run_steps(&mut scenario, 0.05, 20);

    let t = scenario.elapsed();
    let expected = p0 + 0.5 * force * t * t;
    assert!(approx_eq_vec3(scenario.position(0).unwrap(), expected, 1e-3));
}

#[test]
fn test_switching_integrator_keeps_state() {
    let mut scenario = Scenario::new(
        vec![single_body(Vec3::ZERO, Vec3::X, 1.0, Vec3::new(0.0, -1.0, 0.0))],
        IntegratorKind::Euler,
    )
    .unwrap();
    run_steps(&mut scenario, 0.1, 3);
    let before = scenario.bodies()[0].state;

    scenario.set_integrator(IntegratorKind::RungeKutta4);

    assert_eq!(scenario.integrator(), IntegratorKind::RungeKutta4);
    assert_eq!(scenario.bodies()[0].state, before);
}

#[test]
fn test_integrator_kind_parsing() {
    assert_eq!("euler".parse::<IntegratorKind>().unwrap(), IntegratorKind::Euler);
    assert_eq!(
        "implicit-euler".parse::<IntegratorKind>().unwrap(),
        IntegratorKind::SemiImplicitEuler
    );
    assert_eq!("Verlet".parse::<IntegratorKind>().unwrap(), IntegratorKind::Verlet);
    assert_eq!("rk4".parse::<IntegratorKind>().unwrap(), IntegratorKind::RungeKutta4);
    assert!("leapfrog".parse::<IntegratorKind>().is_err());

    for kind in IntegratorKind::ALL {
        assert_eq!(kind.name().parse::<IntegratorKind>().unwrap(), kind);
    }
}
