// graph.rs - Retained scene graph
//
// Flat arena of nodes addressed by index. The host mirrors the graph once
// from its JSON description and afterwards only reads per-frame poses.

use glam::Vec3;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Front,
    Back,
    Double,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Geometry {
    Sphere { radius: f32, segments: u32 },
    Ring { inner: f32, outer: f32, segments: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "material", rename_all = "snake_case")]
pub enum Material {
    /// Unlit.
    Basic { color: u32, opacity: f32, side: Side },
    Standard { color: u32, roughness: f32, metalness: f32 },
}

impl Material {
    pub fn basic(color: u32) -> Self {
        Material::Basic { color, opacity: 1.0, side: Side::Front }
    }

    pub fn translucent(color: u32, opacity: f32, side: Side) -> Self {
        Material::Basic { color, opacity, side }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointsMaterial {
    pub size: f32,
    pub opacity: f32,
    pub additive: bool,
    pub depth_write: bool,
    /// Draw each point with the engine's soft sprite texture.
    pub sprite: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Group,
    AmbientLight { color: u32 },
    PointLight { color: u32, intensity: f32, distance: f32 },
    Mesh { geometry: Geometry, material: Material },
    Points {
        /// xyz triples
        positions: Vec<f32>,
        /// rgb triples, 0.0-1.0
        colors: Vec<f32>,
        material: PointsMaterial,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub name: String,
    pub parent: Option<NodeId>,
    pub position: Vec3,
    /// Euler angles, XYZ order, radians.
    pub rotation: Vec3,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct SceneGraph {
    pub background: u32,
    pub fog_density: f32,
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new(background: u32, fog_density: f32) -> Self {
        Self { background, fog_density, nodes: Vec::new() }
    }

    pub fn add(&mut self, parent: Option<NodeId>, name: impl Into<String>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.into(),
            parent,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            kind,
        });
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.parent == Some(id))
            .map(|(i, _)| NodeId(i))
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parents_and_lookup() {
        let mut g = SceneGraph::new(0x050510, 0.0005);
        let sun = g.add(None, "sun", NodeKind::Mesh {
            geometry: Geometry::Sphere { radius: 20.0, segments: 64 },
            material: Material::basic(0xffdd00),
        });
        let glow = g.add(Some(sun), "sun-glow", NodeKind::Group);
        assert_eq!(g.children(sun).collect::<Vec<_>>(), vec![glow]);
        assert_eq!(g.find("sun-glow"), Some(glow));
        assert_eq!(g.find("moon"), None);
    }

    #[test]
    fn json_is_tagged() {
        let mut g = SceneGraph::new(0x050510, 0.0005);
        g.add(None, "ambient", NodeKind::AmbientLight { color: 0x444444 });
        let json = g.to_json().unwrap();
        assert!(json.contains(r#""type":"ambient_light""#));
        assert!(json.contains(r#""background":328976"#));
    }
}
