/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Bodies: max_bodies × 16 floats]
/// [Guides: max_guide_vertices × 8 floats]
/// [Stars: max_stars × 4 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::sim::SimConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_BODIES: usize = 2;
pub const HEADER_BODY_COUNT: usize = 3;
pub const HEADER_MAX_GUIDE_VERTICES: usize = 4;
pub const HEADER_GUIDE_VERTEX_COUNT: usize = 5;
pub const HEADER_MAX_STARS: usize = 6;
pub const HEADER_STAR_COUNT: usize = 7;
pub const HEADER_MAX_EVENTS: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_VIEWPORT_W: usize = 10;
pub const HEADER_VIEWPORT_H: usize = 11;
pub const HEADER_PIXEL_RATIO: usize = 12;
pub const HEADER_PROTOCOL_VERSION: usize = 13;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per body instance (wire format — never changes).
pub const BODY_FLOATS: usize = 16;

/// Floats per guide vertex: x, y, z, pad, r, g, b, a (wire format — never changes).
pub const GUIDE_VERTEX_FLOATS: usize = 8;

/// Floats per star vertex: x, y, z, size (wire format — never changes).
pub const STAR_FLOATS: usize = 4;

/// Floats per UI event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_bodies: usize,
    pub max_guide_vertices: usize,
    pub max_stars: usize,
    pub max_events: usize,

    /// Size of body data section in floats.
    pub body_data_floats: usize,
    /// Size of guide data section in floats.
    pub guide_data_floats: usize,
    /// Size of star data section in floats.
    pub star_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where body data begins.
    pub body_data_offset: usize,
    /// Offset (in floats) where guide data begins.
    pub guide_data_offset: usize,
    /// Offset (in floats) where star data begins.
    pub star_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_bodies: usize,
        max_guide_vertices: usize,
        max_stars: usize,
        max_events: usize,
    ) -> Self {
        let body_data_floats = max_bodies * BODY_FLOATS;
        let guide_data_floats = max_guide_vertices * GUIDE_VERTEX_FLOATS;
        let star_data_floats = max_stars * STAR_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let body_data_offset = HEADER_FLOATS;
        let guide_data_offset = body_data_offset + body_data_floats;
        let star_data_offset = guide_data_offset + guide_data_floats;
        let event_data_offset = star_data_offset + star_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_bodies,
            max_guide_vertices,
            max_stars,
            max_events,
            body_data_floats,
            guide_data_floats,
            star_data_floats,
            event_data_floats,
            body_data_offset,
            guide_data_offset,
            star_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a SimConfig.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(
            config.max_bodies,
            config.max_guide_vertices,
            config.max_stars,
            config.max_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&SimConfig::default());

        assert_eq!(layout.max_bodies, 64);
        assert_eq!(layout.max_guide_vertices, 4096);
        assert_eq!(layout.max_stars, 16384);
        assert_eq!(layout.max_events, 32);

        assert_eq!(layout.body_data_floats, 64 * BODY_FLOATS);
        assert_eq!(layout.guide_data_floats, 4096 * GUIDE_VERTEX_FLOATS);
        assert_eq!(layout.star_data_floats, 16384 * STAR_FLOATS);
        assert_eq!(layout.event_data_floats, 32 * EVENT_FLOATS);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(10, 200, 1000, 8);

        assert_eq!(layout.body_data_offset, HEADER_FLOATS);
        assert_eq!(layout.guide_data_offset, layout.body_data_offset + layout.body_data_floats);
        assert_eq!(layout.star_data_offset, layout.guide_data_offset + layout.guide_data_floats);
        assert_eq!(layout.event_data_offset, layout.star_data_offset + layout.star_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn wire_formats_match_pod_structs() {
        use crate::renderer::instance::BodyInstance;
        use crate::systems::guides::GuideVertex;
        use crate::systems::starfield::StarVertex;
        use crate::api::types::UiEvent;

        assert_eq!(BODY_FLOATS, BodyInstance::FLOATS);
        assert_eq!(GUIDE_VERTEX_FLOATS, GuideVertex::FLOATS);
        assert_eq!(STAR_FLOATS * 4, std::mem::size_of::<StarVertex>());
        assert_eq!(EVENT_FLOATS, UiEvent::FLOATS);
    }
}
