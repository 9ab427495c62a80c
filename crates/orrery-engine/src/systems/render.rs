use crate::components::mesh::MeshShape;
use crate::components::node::Node;
use crate::renderer::instance::{BodyBuffer, BodyInstance};

/// Build the body instance buffer from a set of scene nodes.
/// Pivots (nodes without a mesh) and inactive nodes produce nothing.
pub fn build_body_buffer<'a>(nodes: impl Iterator<Item = &'a Node>, buffer: &mut BodyBuffer) {
    buffer.clear();

    for node in nodes {
        if !node.active {
            continue;
        }

        let mesh = match &node.mesh {
            Some(m) => m,
            None => continue,
        };

        let (shape, radius, aux, tilt) = match mesh.shape {
            MeshShape::Sphere { radius } => (BodyInstance::SHAPE_SPHERE, radius, 0.0, 0.0),
            MeshShape::Ring { inner, outer, tilt } => (BodyInstance::SHAPE_RING, outer, inner, tilt),
        };

        buffer.push(BodyInstance {
            x: node.pos.x,
            y: node.pos.y,
            z: node.pos.z,
            radius,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            alpha: mesh.alpha,
            spin: node.spin,
            emissive: mesh.emissive,
            shininess: mesh.shininess,
            shape,
            aux,
            tilt,
            ..Default::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::NodeId;
    use crate::components::mesh::{MeshColor, MeshComponent};
    use glam::Vec3;

    #[test]
    fn pivots_emit_no_instances() {
        let nodes = vec![
            Node::new(NodeId(1)), // bare pivot, no mesh
            Node::new(NodeId(2))
                .with_pos(Vec3::new(20.0, 0.0, 0.0))
                .with_mesh(MeshComponent::sphere(1.5, MeshColor::new(1.0, 0.5, 0.0))),
        ];

        let mut buffer = BodyBuffer::new();
        build_body_buffer(nodes.iter(), &mut buffer);

        assert_eq!(buffer.count(), 1);
    }

    #[test]
    fn inactive_nodes_are_skipped() {
        let mut node = Node::new(NodeId(1)).with_mesh(MeshComponent::default());
        node.active = false;

        let nodes = vec![node];
        let mut buffer = BodyBuffer::new();
        build_body_buffer(nodes.iter(), &mut buffer);
        assert_eq!(buffer.count(), 0);
    }

    #[test]
    fn ring_shape_carries_inner_radius_and_tilt() {
        let nodes = vec![Node::new(NodeId(1))
            .with_mesh(MeshComponent::ring(4.7, 7.0, -0.4, MeshColor::default()).with_alpha(0.8))];

        let mut buffer = BodyBuffer::new();
        build_body_buffer(nodes.iter(), &mut buffer);

        assert_eq!(buffer.count(), 1);
        // Read the instance back through the raw pointer, as the host would
        let floats = unsafe { std::slice::from_raw_parts(buffer.as_ptr(), BodyInstance::FLOATS) };
        assert_eq!(floats[11], BodyInstance::SHAPE_RING);
        assert_eq!(floats[3], 7.0); // outer
        assert_eq!(floats[12], 4.7); // inner
        assert_eq!(floats[13], -0.4); // tilt
        assert_eq!(floats[7], 0.8); // alpha
    }
}
