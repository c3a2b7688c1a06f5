//! Scene container: actors in insertion order plus the camera that views
//! them.

use glam::Vec3;

use crate::actor::Actor;
use crate::camera::Camera;
use crate::geometry::Aabb;

/// Fraction of the depth range added on both sides by
/// [`Scene::reset_clipping_range`].
const CLIPPING_PADDING: f32 = 0.01;

/// Smallest allowed near/far ratio; keeps depth precision usable.
const NEAR_CLIPPING_TOLERANCE: f32 = 0.001;

/// Stable handle to an actor in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u32);

/// Actors and the camera viewing them.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    actors: Vec<(ActorId, Actor)>,
    camera: Camera,
    next_actor_id: u32,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
}

impl Scene {
    /// Empty scene with the default camera.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an actor and return its handle.
    pub fn add(&mut self, actor: Actor) -> ActorId {
        let id = ActorId(self.next_actor_id);
        self.next_actor_id += 1;
        log::debug!("scene: add {} as {id:?}", actor.label());
        self.actors.push((id, actor));
        self.generation += 1;
        id
    }

    /// Remove an actor, returning it when it was present.
    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        let idx = self.actors.iter().position(|(a, _)| *a == id)?;
        self.generation += 1;
        Some(self.actors.remove(idx).1)
    }

    /// Remove every actor. The camera is kept.
    pub fn clear(&mut self) {
        self.actors.clear();
        self.generation += 1;
    }

    /// Number of actors.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Actors in insertion order.
    pub fn actors(&self) -> impl Iterator<Item = (ActorId, &Actor)> + '_ {
        self.actors.iter().map(|(id, a)| (*id, a))
    }

    /// Look up an actor.
    #[must_use]
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|(a, _)| *a == id).map(|(_, a)| a)
    }

    /// Look up an actor for modification.
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        let actor = self
            .actors
            .iter_mut()
            .find(|(a, _)| *a == id)
            .map(|(_, a)| a)?;
        self.generation += 1;
        Some(actor)
    }

    /// Union of all actor bounds.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        self.actors
            .iter()
            .filter_map(|(_, a)| a.bounds())
            .reduce(Aabb::union)
    }

    /// Mutation counter, for renderers that cache uploads.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Place the camera, keeping its view angle and clipping range.
    pub fn set_camera(&mut self, position: Vec3, focal_point: Vec3, view_up: Vec3) {
        self.camera.position = position;
        self.camera.focal_point = focal_point;
        self.camera.view_up = view_up;
    }

    /// Aim the camera at the center of all actors and back it off along
    /// the current view direction until their bounding sphere fits the
    /// view angle, then reset the clipping range.
    ///
    /// An empty scene leaves the camera untouched.
    pub fn reset_camera(&mut self) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        let center = bounds.center();
        let radius = match bounds.radius() {
            r if r > 0.0 => r,
            _ => 0.5,
        };
        let half_angle = (self.camera.view_angle.to_radians() * 0.5)
            .clamp(1e-3, std::f32::consts::FRAC_PI_2);
        let distance = radius / half_angle.sin();

        let dir = self.camera.direction_of_projection();
        let up = self.camera.orthogonal_view_up();
        self.camera.focal_point = center;
        self.camera.position = center - dir * distance;
        self.camera.view_up = up;
        self.reset_clipping_range();
        log::debug!(
            "scene: camera reset to distance {distance:.2} around {:?}",
            center.to_array()
        );
    }

    /// Fit near/far planes tightly around the actors as seen from the
    /// current camera.
    pub fn reset_clipping_range(&mut self) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        let dir = self.camera.direction_of_projection();
        let (near, far) = bounds.corners().iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY),
            |(lo, hi), c| {
                let d = (*c - self.camera.position).dot(dir);
                (lo.min(d), hi.max(d))
            },
        );
        let pad = (far - near).max(1e-3) * CLIPPING_PADDING;
        let far = (far + pad).max(1e-3);
        let near = (near - pad).max(far * NEAR_CLIPPING_TOLERANCE);
        self.camera.clipping_range = [near, far];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Geometry;
    use crate::geometry::SphereInstance;

    fn sphere_actor(center: Vec3, radius: f32) -> Actor {
        Actor::new(
            "s",
            Geometry::Spheres(vec![SphereInstance::new(center, radius, [1.0; 3], 0)]),
            1.0,
        )
    }

    #[test]
    fn add_remove_clear() {
        let mut scene = Scene::new();
        let a = scene.add(sphere_actor(Vec3::ZERO, 1.0));
        let b = scene.add(sphere_actor(Vec3::X, 1.0));
        assert_ne!(a, b);
        assert_eq!(scene.actor_count(), 2);
        assert!(scene.remove(a).is_some());
        assert!(scene.remove(a).is_none());
        assert!(scene.get(b).is_some());
        assert_eq!(scene.actors().count(), 1);
        let before = scene.generation();
        scene.clear();
        assert_eq!(scene.actor_count(), 0);
        assert!(scene.generation() > before);
    }

    #[test]
    fn bounds_union_actors() {
        let mut scene = Scene::new();
        assert!(scene.bounds().is_none());
        let _ = scene.add(sphere_actor(Vec3::ZERO, 1.0));
        let _ = scene.add(sphere_actor(Vec3::splat(4.0), 1.0));
        let b = scene.bounds().unwrap();
        assert_eq!(b.min, Vec3::splat(-1.0));
        assert_eq!(b.max, Vec3::splat(5.0));
    }

    #[test]
    fn reset_camera_frames_actors_along_view_direction() {
        let mut scene = Scene::new();
        let _ = scene.add(sphere_actor(Vec3::new(10.0, 0.0, 0.0), 2.0));
        scene.set_camera(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        scene.reset_camera();

        let camera = *scene.camera();
        assert!(camera.focal_point.distance(Vec3::new(10.0, 0.0, 0.0)) < 1e-5);
        // Direction of projection is preserved
        assert!(camera.direction_of_projection().dot(Vec3::NEG_Z) > 0.9999);

        let radius = (Vec3::splat(4.0)).length() * 0.5;
        let expected = radius / (camera.view_angle.to_radians() * 0.5).sin();
        assert!((camera.distance() - expected).abs() < 1e-3);

        let [near, far] = camera.clipping_range;
        assert!(near > 0.0 && near < far);
        assert!(near <= camera.distance() - 2.0);
        assert!(far >= camera.distance() + 2.0);
    }

    #[test]
    fn reset_camera_on_empty_scene_is_noop() {
        let mut scene = Scene::new();
        let before = *scene.camera();
        scene.reset_camera();
        scene.reset_clipping_range();
        assert_eq!(*scene.camera(), before);
    }

    #[test]
    fn get_mut_bumps_generation_only_for_known_actors() {
        let mut scene = Scene::new();
        let id = scene.add(sphere_actor(Vec3::ZERO, 1.0));
        let missing = scene.add(sphere_actor(Vec3::Y, 1.0));
        let _ = scene.remove(missing);

        let before = scene.generation();
        assert!(scene.get_mut(missing).is_none());
        assert_eq!(scene.generation(), before);

        scene.get_mut(id).unwrap().set_opacity(0.25);
        assert!(scene.generation() > before);
        assert_eq!(scene.get(id).unwrap().opacity(), 0.25);
    }

    #[test]
    fn camera_mut_view_angle_drives_reset() {
        let mut scene = Scene::new();
        let _ = scene.add(sphere_actor(Vec3::ZERO, 1.0));
        scene.camera_mut().view_angle = 60.0;
        scene.reset_camera();

        let camera = scene.camera();
        assert_eq!(camera.view_angle, 60.0);
        let radius = Vec3::splat(2.0).length() * 0.5;
        assert!((camera.distance() - radius / 0.5).abs() < 1e-3);
    }
}
