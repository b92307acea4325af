//! Procedural orbital animation.
//!
//! Every tick each body adds its spin to its rotation and, if it orbits,
//! advances its phase and is re-placed on a circle around its center:
//!
//! ```text
//! phase += angular_speed
//! x = center.x + cos(phase) * radius
//! y = center.y + height
//! z = center.z + sin(phase) * radius
//! ```
//!
//! Centers are either the origin or another body's position *this tick*, so
//! bodies are updated in an order where every center precedes its dependents.
//! Trackers copy their target's position after all bodies have moved.

use bevy::math::DVec3;
use bevy::prelude::*;
use std::collections::HashMap;

use super::data::{BodyConfig, BodyVisual, OrbitConfig, SceneConfig, TrackerConfig, TrackerKind};

/// Errors raised while resolving a scene table into an animator.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("body name {0:?} is used more than once")]
    DuplicateBody(String),
    #[error("body {body:?} orbits unknown body {center:?}")]
    UnknownCenter { body: String, center: String },
    #[error("tracker {tracker:?} follows unknown body {target:?}")]
    UnknownTarget { tracker: String, target: String },
    #[error("body {0:?} orbits itself")]
    SelfOrbit(String),
    #[error("orbit centers form a cycle through {0:?}")]
    CyclicOrbit(String),
    #[error("{owner:?} has an invalid {field}: {value}")]
    InvalidParameter {
        owner: String,
        field: &'static str,
        value: f64,
    },
}

/// Index of a body inside an [`OrbitalAnimator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(usize);

impl BodyHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Reference point an orbit is centered on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrbitCenter {
    Origin,
    Body(BodyHandle),
}

/// Circular orbit state of one body.
#[derive(Clone, Debug, PartialEq)]
pub struct Orbit {
    pub center: OrbitCenter,
    pub radius: f64,
    pub angular_speed: f64,
    pub height: f64,
    /// Accumulated phase (radians), starts at 0.
    pub phase: f64,
}

impl Orbit {
    /// Point on the orbit for the current phase around `center`.
    pub fn place(&self, center: DVec3) -> DVec3 {
        let (sin, cos) = self.phase.sin_cos();
        DVec3::new(
            center.x + cos * self.radius,
            center.y + self.height,
            center.z + sin * self.radius,
        )
    }
}

/// A positionable, rotatable body.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub name: String,
    pub position: DVec3,
    /// Per-axis Euler angles (radians), accumulated without wraparound.
    pub rotation: DVec3,
    /// Rotation increment per tick.
    pub spin: DVec3,
    /// Geometry radius, not used for animation.
    pub radius: f32,
    pub orbit: Option<Orbit>,
}

/// An element pinned to a body's position.
#[derive(Clone, Debug, PartialEq)]
pub struct Tracker {
    pub name: String,
    pub target: BodyHandle,
    pub position: DVec3,
    pub rotation: DVec3,
    pub spin: DVec3,
    pub kind: TrackerKind,
}

/// All mutable animation state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationState {
    pub bodies: Vec<Body>,
    pub trackers: Vec<Tracker>,
}

/// Owns the simulation state and advances it once per frame.
#[derive(Resource, Clone, Debug)]
pub struct OrbitalAnimator {
    state: SimulationState,
    /// Body indices with every center ahead of its dependents.
    order: Vec<BodyHandle>,
    names: HashMap<String, BodyHandle>,
    ticks: u64,
}

impl OrbitalAnimator {
    /// Resolve a scene table and place every body at phase 0.
    pub fn new(scene: &SceneConfig) -> Result<Self, SceneError> {
        let mut names = HashMap::with_capacity(scene.bodies.len());
        for (index, body) in scene.bodies.iter().enumerate() {
            if names.insert(body.name.clone(), BodyHandle(index)).is_some() {
                return Err(SceneError::DuplicateBody(body.name.clone()));
            }
        }

        let bodies = scene
            .bodies
            .iter()
            .map(|config| resolve_body(config, &names))
            .collect::<Result<Vec<_>, _>>()?;

        let trackers = scene
            .trackers
            .iter()
            .map(|config| resolve_tracker(config, &names))
            .collect::<Result<Vec<_>, _>>()?;

        let order = update_order(&bodies)?;

        let mut animator = Self {
            state: SimulationState { bodies, trackers },
            order,
            names,
            ticks: 0,
        };
        animator.advance_by(0.0);
        Ok(animator)
    }

    /// Advance every body by one fixed per-call increment.
    pub fn tick(&mut self) {
        self.advance(1.0);
    }

    /// Advance by `steps` ticks' worth of motion (fractional allowed).
    pub fn advance(&mut self, steps: f64) {
        self.advance_by(steps);
        self.ticks += 1;
    }

    fn advance_by(&mut self, steps: f64) {
        let bodies = &mut self.state.bodies;
        for &handle in &self.order {
            let center = match bodies[handle.0].orbit.as_ref().map(|o| o.center) {
                Some(OrbitCenter::Body(parent)) => bodies[parent.0].position,
                _ => DVec3::ZERO,
            };

            let body = &mut bodies[handle.0];
            body.rotation += body.spin * steps;
            if let Some(orbit) = body.orbit.as_mut() {
                orbit.phase += orbit.angular_speed * steps;
                body.position = orbit.place(center);
            }
        }

        for tracker in &mut self.state.trackers {
            tracker.position = bodies[tracker.target.0].position;
            tracker.rotation += tracker.spin * steps;
        }
    }

    /// Look up a body by name.
    pub fn handle(&self, name: &str) -> Option<BodyHandle> {
        self.names.get(name).copied()
    }

    /// Body for a handle produced by this animator.
    pub fn body(&self, handle: BodyHandle) -> &Body {
        &self.state.bodies[handle.0]
    }

    /// Look up a body by name.
    pub fn body_named(&self, name: &str) -> Option<&Body> {
        self.handle(name).map(|h| self.body(h))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.state.bodies
    }

    pub fn trackers(&self) -> &[Tracker] {
        &self.state.trackers
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Order in which bodies are updated within a tick.
    pub fn update_order(&self) -> &[BodyHandle] {
        &self.order
    }

    /// Number of `tick`/`advance` calls so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Fewest sphere segments that still produce a closed mesh.
const MIN_SPHERE_SEGMENTS: u32 = 3;

fn check_finite(owner: &str, field: &'static str, value: f64) -> Result<(), SceneError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SceneError::InvalidParameter {
            owner: owner.to_string(),
            field,
            value,
        })
    }
}

fn check_non_negative(owner: &str, field: &'static str, value: f64) -> Result<(), SceneError> {
    check_finite(owner, field, value)?;
    if value < 0.0 {
        return Err(SceneError::InvalidParameter {
            owner: owner.to_string(),
            field,
            value,
        });
    }
    Ok(())
}

fn resolve_spin(owner: &str, spin: [f64; 3]) -> Result<DVec3, SceneError> {
    for value in spin {
        check_finite(owner, "spin", value)?;
    }
    Ok(DVec3::from_array(spin))
}

fn check_visual(owner: &str, visual: &BodyVisual) -> Result<(), SceneError> {
    for channel in visual.color {
        check_non_negative(owner, "color", channel as f64)?;
    }
    if visual.segments < MIN_SPHERE_SEGMENTS {
        return Err(SceneError::InvalidParameter {
            owner: owner.to_string(),
            field: "segments",
            value: visual.segments as f64,
        });
    }
    Ok(())
}

fn check_tracker_kind(owner: &str, kind: &TrackerKind) -> Result<(), SceneError> {
    match *kind {
        TrackerKind::PointLight { intensity, range } => {
            check_non_negative(owner, "light intensity", intensity as f64)?;
            check_non_negative(owner, "light range", range as f64)
        }
        TrackerKind::Ring { radius } => check_non_negative(owner, "ring radius", radius as f64),
    }
}

fn resolve_orbit(
    owner: &str,
    config: &OrbitConfig,
    names: &HashMap<String, BodyHandle>,
) -> Result<Orbit, SceneError> {
    check_non_negative(owner, "orbit radius", config.radius)?;
    check_finite(owner, "angular speed", config.angular_speed)?;
    check_finite(owner, "orbit height", config.height)?;

    let center = match &config.center {
        None => OrbitCenter::Origin,
        Some(name) if name == owner => return Err(SceneError::SelfOrbit(owner.to_string())),
        Some(name) => {
            let handle = names.get(name).ok_or_else(|| SceneError::UnknownCenter {
                body: owner.to_string(),
                center: name.clone(),
            })?;
            OrbitCenter::Body(*handle)
        }
    };

    Ok(Orbit {
        center,
        radius: config.radius,
        angular_speed: config.angular_speed,
        height: config.height,
        phase: 0.0,
    })
}

fn resolve_body(
    config: &BodyConfig,
    names: &HashMap<String, BodyHandle>,
) -> Result<Body, SceneError> {
    check_non_negative(&config.name, "radius", config.radius as f64)?;
    check_visual(&config.name, &config.visual)?;
    let orbit = config
        .orbit
        .as_ref()
        .map(|orbit| resolve_orbit(&config.name, orbit, names))
        .transpose()?;

    Ok(Body {
        name: config.name.clone(),
        position: DVec3::ZERO,
        rotation: DVec3::ZERO,
        spin: resolve_spin(&config.name, config.spin)?,
        radius: config.radius,
        orbit,
    })
}

fn resolve_tracker(
    config: &TrackerConfig,
    names: &HashMap<String, BodyHandle>,
) -> Result<Tracker, SceneError> {
    let target = names
        .get(&config.target)
        .copied()
        .ok_or_else(|| SceneError::UnknownTarget {
            tracker: config.name.clone(),
            target: config.target.clone(),
        })?;
    check_tracker_kind(&config.name, &config.kind)?;

    Ok(Tracker {
        name: config.name.clone(),
        target,
        position: DVec3::ZERO,
        rotation: DVec3::ZERO,
        spin: resolve_spin(&config.name, config.spin)?,
        kind: config.kind.clone(),
    })
}

/// Sort bodies so every orbit center comes before the bodies circling it.
///
/// Bodies keep their table order within the same depth.
fn update_order(bodies: &[Body]) -> Result<Vec<BodyHandle>, SceneError> {
    let parent = |index: usize| match bodies[index].orbit.as_ref().map(|o| o.center) {
        Some(OrbitCenter::Body(handle)) => Some(handle.0),
        _ => None,
    };

    let mut depths = Vec::with_capacity(bodies.len());
    for start in 0..bodies.len() {
        let mut depth = 0usize;
        let mut current = start;
        while let Some(next) = parent(current) {
            depth += 1;
            if depth > bodies.len() {
                return Err(SceneError::CyclicOrbit(bodies[start].name.clone()));
            }
            current = next;
        }
        depths.push(depth);
    }

    let mut order: Vec<BodyHandle> = (0..bodies.len()).map(BodyHandle).collect();
    order.sort_by_key(|handle| depths[handle.0]);
    Ok(order)
}
