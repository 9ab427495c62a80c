use glam::Vec3;
use crate::api::types::NodeId;
use crate::components::node::Node;
use crate::renderer::camera::Ray;

/// Ray-sphere intersection. Returns the smallest non-negative `t` along
/// the ray, or `None` if the ray misses (or the sphere is entirely behind
/// the origin).
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t0 = -b - sqrt_disc;
    let t1 = -b + sqrt_disc;
    if t0 >= 0.0 {
        Some(t0)
    } else if t1 >= 0.0 {
        // Origin inside the sphere
        Some(t1)
    } else {
        None
    }
}

/// Test a picking ray against every pickable sphere node.
/// Nearest-along-ray wins; ties keep the first node in iteration order.
pub fn pick_nearest<'a>(ray: &Ray, nodes: impl Iterator<Item = &'a Node>) -> Option<NodeId> {
    let mut best: Option<(NodeId, f32)> = None;
    for node in nodes {
        if !node.active || !node.pickable {
            continue;
        }
        let mesh = match &node.mesh {
            Some(m) => m,
            None => continue,
        };
        if let Some(t) = ray_sphere(ray, node.pos, mesh.bounding_radius()) {
            match best {
                Some((_, best_t)) if t >= best_t => {}
                _ => best = Some((node.id, t)),
            }
        }
    }
    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::{MeshColor, MeshComponent};

    fn x_ray() -> Ray {
        Ray {
            origin: Vec3::new(-100.0, 0.0, 0.0),
            dir: Vec3::X,
        }
    }

    fn sphere_node(id: u32, pos: Vec3, radius: f32) -> Node {
        Node::new(NodeId(id))
            .with_pos(pos)
            .with_mesh(MeshComponent::sphere(radius, MeshColor::default()))
            .pickable()
    }

    #[test]
    fn hit_returns_entry_distance() {
        let t = ray_sphere(&x_ray(), Vec3::ZERO, 10.0).unwrap();
        assert!((t - 90.0).abs() < 1e-3);
    }

    #[test]
    fn miss_returns_none() {
        assert!(ray_sphere(&x_ray(), Vec3::new(0.0, 50.0, 0.0), 10.0).is_none());
    }

    #[test]
    fn sphere_behind_origin_is_ignored() {
        assert!(ray_sphere(&x_ray(), Vec3::new(-200.0, 0.0, 0.0), 10.0).is_none());
    }

    #[test]
    fn origin_inside_sphere_hits_exit_point() {
        let ray = Ray { origin: Vec3::ZERO, dir: Vec3::X };
        let t = ray_sphere(&ray, Vec3::ZERO, 5.0).unwrap();
        assert!((t - 5.0).abs() < 1e-3);
    }

    #[test]
    fn nearest_along_ray_wins() {
        let nodes = vec![
            sphere_node(1, Vec3::new(50.0, 0.0, 0.0), 5.0),
            sphere_node(2, Vec3::new(10.0, 0.0, 0.0), 5.0),
        ];
        assert_eq!(pick_nearest(&x_ray(), nodes.iter()), Some(NodeId(2)));
    }

    #[test]
    fn unpickable_nodes_are_invisible_to_the_ray() {
        let mut sun = sphere_node(1, Vec3::new(10.0, 0.0, 0.0), 8.0);
        sun.pickable = false;
        let nodes = vec![sun, sphere_node(2, Vec3::new(50.0, 0.0, 0.0), 5.0)];
        assert_eq!(pick_nearest(&x_ray(), nodes.iter()), Some(NodeId(2)));
    }

    #[test]
    fn empty_space_picks_nothing() {
        let nodes = vec![sphere_node(1, Vec3::new(0.0, 100.0, 0.0), 5.0)];
        assert_eq!(pick_nearest(&x_ray(), nodes.iter()), None);
    }
}
