/// Orrery — a central body, eight orbiting bodies on circular paths,
/// a starfield backdrop, and the interaction layer (speed sliders,
/// hover tooltips, pause/resume, themes, camera orbit, panel drag).
///
/// Motion model: a body's pivot angle is always `elapsed × speed`, an
/// absolute assignment rather than a velocity integration. Changing a
/// speed slider therefore re-implies the angular position retroactively.

use glam::Vec3;
use orrery_engine::{
    InputEvent, InputQueue, MeshComponent, MeshColor, Node, NodeId,
    PivotGraph, PivotTransform, PointLight, Rng, Sim, SimClock, SimConfig,
    SimContext, StarfieldConfig, UiEvent, generate_starfield, pick_nearest,
};

use crate::bodies;
use crate::ui::PanelDrag;

// ── Custom event kinds from the host UI ──────────────────────────────

const CUSTOM_SET_SPEED: u32 = 1;
const CUSTOM_TOGGLE_PAUSE: u32 = 2;
const CUSTOM_TOGGLE_THEME: u32 = 3;
const CUSTOM_PANEL_GRAB: u32 = 4;
const CUSTOM_ZOOM: u32 = 5;
/// Viewport resize routed through the event channel (hosts that drive
/// everything through one worker port use this instead of `sim_resize`).
const CUSTOM_RESIZE: u32 = 99;

// ── UI event kinds to the host ───────────────────────────────────────

const EVENT_HOVER: f32 = 1.0;
const EVENT_SIM_TIME: f32 = 2.0;
const EVENT_PANEL_POS: f32 = 3.0;
const EVENT_THEME: f32 = 4.0;

// ── Starfield ────────────────────────────────────────────────────────

const STARFIELD_SEED: u64 = 42;

// ── Themes ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Everything a theme swap touches, applied atomically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: [f32; 3],
    pub ambient_intensity: f32,
    pub guide_color: [f32; 4],
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: hex3(0xF0F2F5),
                ambient_intensity: 0.2,
                guide_color: hex4(0x333333),
            },
            Theme::Dark => Palette {
                background: hex3(0x111118),
                ambient_intensity: 0.1,
                guide_color: hex4(0xCCCCCC),
            },
        }
    }
}

fn hex3(hex: u32) -> [f32; 3] {
    let c = MeshColor::from_hex(hex);
    [c.r, c.g, c.b]
}

fn hex4(hex: u32) -> [f32; 4] {
    let [r, g, b] = hex3(hex);
    [r, g, b, 1.0]
}

// ── Per-body state ───────────────────────────────────────────────────

/// Live state for one orbiting body. The descriptor stays in the
/// registry; only the speed is user-adjustable.
struct BodyState {
    /// Current angular speed in radians per second. Written only by
    /// `SetSpeed` commands from the slider UI.
    speed: f32,
    pivot: NodeId,
    mesh: NodeId,
}

enum DragState {
    Idle,
    /// Pointer drag on the canvas orbits the camera.
    Camera { last: (f32, f32) },
}

// ── Sim struct ───────────────────────────────────────────────────────

pub struct Orrery {
    clock: SimClock,
    paused: bool,
    theme: Theme,
    bodies: Vec<BodyState>,
    sun_id: Option<NodeId>,
    pivots: PivotGraph,
    /// Body index currently under the pointer, if any.
    hovered: Option<usize>,
    /// Last pointer position in client pixels.
    pointer: Option<(f32, f32)>,
    panel: PanelDrag,
    drag: DragState,
}

impl Orrery {
    pub fn new() -> Self {
        Self {
            clock: SimClock::new(),
            paused: false,
            theme: Theme::Light,
            bodies: Vec::new(),
            sun_id: None,
            pivots: PivotGraph::new(),
            hovered: None,
            pointer: None,
            panel: PanelDrag::new(),
            drag: DragState::Idle,
        }
    }

    fn apply_palette(ctx: &mut SimContext, theme: Theme) {
        let palette = theme.palette();
        ctx.lights.set_background(
            palette.background[0],
            palette.background[1],
            palette.background[2],
        );
        ctx.lights.set_ambient_intensity(palette.ambient_intensity);
    }

    fn body_index_of(&self, mesh: NodeId) -> Option<usize> {
        self.bodies.iter().position(|b| b.mesh == mesh)
    }

    /// Name of the hovered body — the tooltip text the host displays.
    pub fn hover_name<'a>(&self, ctx: &'a SimContext) -> Option<&'a str> {
        self.hovered
            .and_then(|i| ctx.registry.get(i))
            .map(|d| d.name.as_str())
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Current pivot rotation angle for a body, in radians.
    pub fn angle(&self, index: usize) -> f32 {
        self.bodies
            .get(index)
            .and_then(|b| self.pivots.angle(b.pivot))
            .unwrap_or(0.0)
    }

    pub fn speed(&self, index: usize) -> f32 {
        self.bodies.get(index).map(|b| b.speed).unwrap_or(0.0)
    }

    // ── Input handling ─────────────────────────────────────────────

    fn handle_input(&mut self, ctx: &mut SimContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerMove { x, y } => {
                    self.pointer = Some((x, y));
                    if self.panel.active() {
                        let _ = self.panel.track(x, y);
                    } else if let DragState::Camera { ref mut last } = self.drag {
                        let (dx, dy) = (x - last.0, y - last.1);
                        ctx.camera.orbit(dx, dy);
                        *last = (x, y);
                    }
                }
                InputEvent::PointerDown { x, y } => {
                    // The panel grab arrives as a custom event before any
                    // move; a plain press on the canvas starts a camera drag.
                    if !self.panel.active() {
                        self.drag = DragState::Camera { last: (x, y) };
                    }
                }
                InputEvent::PointerUp { .. } => {
                    self.drag = DragState::Idle;
                    self.panel.release();
                }
                InputEvent::Custom { kind, a, b, c } => match kind {
                    CUSTOM_SET_SPEED => {
                        // a = body index, b = slider value in [0, 1]
                        if let Some(body) = self.bodies.get_mut(a as usize) {
                            body.speed = b.clamp(0.0, 1.0);
                        }
                    }
                    CUSTOM_TOGGLE_PAUSE => {
                        self.paused = !self.paused;
                    }
                    CUSTOM_TOGGLE_THEME => {
                        self.theme = self.theme.toggled();
                        Self::apply_palette(ctx, self.theme);
                    }
                    CUSTOM_PANEL_GRAB => {
                        // a/b = pointer offset from the panel corner.
                        // Exclusive: a panel drag never orbits the camera.
                        self.panel.grab(a, b);
                        self.drag = DragState::Idle;
                    }
                    CUSTOM_ZOOM => {
                        ctx.camera.zoom(a);
                    }
                    CUSTOM_RESIZE => {
                        ctx.camera.resize(a, b, c);
                    }
                    _ => {}
                },
            }
        }
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

impl Sim for Orrery {
    fn config(&self) -> SimConfig {
        SimConfig {
            max_bodies: 16,
            max_events: 16,
            ..SimConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut SimContext) {
        if ctx.registry.is_empty() {
            ctx.registry = bodies::default_registry();
        }
        let descriptors: Vec<_> = ctx.registry.bodies.clone();

        self.bodies.clear();
        self.pivots.clear();

        // ── Lighting ─────────────────────────────────────────────────
        ctx.lights.clear();
        ctx.lights.add(PointLight::new(
            Vec3::ZERO,
            [1.0, 1.0, 1.0],
            bodies::SUN_LIGHT_INTENSITY,
            bodies::SUN_LIGHT_RADIUS,
        ));
        Self::apply_palette(ctx, self.theme);

        // ── Central body ─────────────────────────────────────────────
        let sun_id = ctx.next_id();
        ctx.scene.spawn(
            Node::new(sun_id).with_tag("sun").with_mesh(
                MeshComponent::sphere(bodies::SUN_RADIUS, MeshColor::from_hex(bodies::SUN_COLOR))
                    .with_emissive(bodies::SUN_EMISSIVE),
            ),
        );
        self.sun_id = Some(sun_id);

        // ── Orbiting bodies ──────────────────────────────────────────
        for descriptor in &descriptors {
            let color = MeshColor::new(
                descriptor.color[0],
                descriptor.color[1],
                descriptor.color[2],
            );

            // Invisible pivot at the origin; the mesh hangs off it at the
            // orbital distance. Only the pivot's angle ever changes.
            let pivot_id = ctx.next_id();
            ctx.scene
                .spawn(Node::new(pivot_id).with_tag(format!("{}-pivot", descriptor.name)));

            let mesh_id = ctx.next_id();
            ctx.scene.spawn(
                Node::new(mesh_id)
                    .with_tag(descriptor.name.clone())
                    .with_mesh(
                        MeshComponent::sphere(descriptor.radius, color)
                            .with_emissive(bodies::BODY_EMISSIVE),
                    )
                    .pickable(),
            );

            self.pivots.register(pivot_id);
            self.pivots.register_with(
                mesh_id,
                PivotTransform::new().with_offset(Vec3::new(descriptor.orbital_distance, 0.0, 0.0)),
            );
            self.pivots.set_parent(mesh_id, Some(pivot_id));

            if descriptor.ringed {
                let ring_id = ctx.next_id();
                ctx.scene.spawn(
                    Node::new(ring_id)
                        .with_tag(format!("{}-ring", descriptor.name))
                        .with_mesh(
                            MeshComponent::ring(
                                descriptor.radius + bodies::RING_INNER_PAD,
                                descriptor.radius + bodies::RING_OUTER_PAD,
                                bodies::RING_TILT,
                                MeshColor::from_hex(bodies::RING_COLOR),
                            )
                            .with_alpha(bodies::RING_ALPHA),
                        ),
                );
                // Zero offset: the ring rides exactly on its body.
                self.pivots.register(ring_id);
                self.pivots.set_parent(ring_id, Some(mesh_id));
            }

            self.bodies.push(BodyState {
                speed: descriptor.base_angular_speed,
                pivot: pivot_id,
                mesh: mesh_id,
            });
        }
        self.pivots.propagate(&mut ctx.scene);

        // ── Starfield ────────────────────────────────────────────────
        let starfield = StarfieldConfig::default();
        ctx.stars = generate_starfield(&starfield, &mut Rng::new(STARFIELD_SEED));

        log::info!(
            "orrery: {} bodies, {} stars",
            self.bodies.len(),
            ctx.stars.len()
        );
    }

    fn update(&mut self, ctx: &mut SimContext, input: &InputQueue, dt: f32) {
        // The clock runs even while paused: angles are an absolute
        // function of elapsed time, so resuming jumps them forward.
        self.clock.advance(dt);

        self.handle_input(ctx, input);

        // ── Advance simulation ───────────────────────────────────────
        if !self.paused {
            let elapsed = self.clock.elapsed();
            for body in &self.bodies {
                self.pivots.set_angle(body.pivot, elapsed * body.speed);
            }
            for body in &self.bodies {
                if let Some(node) = ctx.scene.get_mut(body.mesh) {
                    node.spin += bodies::BODY_SPIN_STEP;
                }
            }
            if let Some(id) = self.sun_id {
                if let Some(node) = ctx.scene.get_mut(id) {
                    node.spin += bodies::SUN_SPIN_STEP;
                }
            }
            self.pivots.propagate(&mut ctx.scene);
        }

        // ── Picking (against current mesh positions) ─────────────────
        self.hovered = self.pointer.and_then(|(px, py)| {
            let ray = ctx.camera.ray_from_screen(px, py);
            pick_nearest(&ray, ctx.scene.iter()).and_then(|id| self.body_index_of(id))
        });

        // ── Guide rings ──────────────────────────────────────────────
        let palette = self.theme.palette();
        for descriptor in ctx.registry.bodies.iter() {
            ctx.guides
                .ring(Vec3::ZERO, descriptor.orbital_distance, palette.guide_color);
        }

        // ── Emit UI events ───────────────────────────────────────────
        let (px, py) = self.pointer.unwrap_or((0.0, 0.0));
        ctx.emit_event(UiEvent {
            kind: EVENT_HOVER,
            a: self.hovered.map(|i| i as f32).unwrap_or(-1.0),
            b: px,
            c: py,
        });

        ctx.emit_event(UiEvent {
            kind: EVENT_SIM_TIME,
            a: self.clock.elapsed(),
            b: if self.paused { 1.0 } else { 0.0 },
            c: 0.0,
        });

        ctx.emit_event(UiEvent {
            kind: EVENT_THEME,
            a: if self.theme == Theme::Dark { 1.0 } else { 0.0 },
            b: 0.0,
            c: 0.0,
        });

        if self.panel.active() {
            if let Some((x, y)) = self.panel.pos {
                ctx.emit_event(UiEvent {
                    kind: EVENT_PANEL_POS,
                    a: x,
                    b: y,
                    c: 0.0,
                });
            }
        }
    }
}
