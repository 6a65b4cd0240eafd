// Particle field tuning constants shared by the simulation and the canvas renderer.

// Population
pub const MAX_PARTICLES: usize = 160;
pub const AREA_PER_PARTICLE: f64 = 60_000.0; // px² of viewport per particle

// Motion
pub const WRAP_MARGIN: f64 = 10.0; // px beyond each edge before wrapping
pub const INITIAL_SPEED_MAX: f64 = 0.15; // per-axis |v| at spawn, px/frame
pub const ATTRACT_RADIUS_SQ: f64 = 120_000.0; // px²
pub const ATTRACT_ACCEL: f64 = 0.0008; // px/frame² toward the pointer

// Appearance
pub const RADIUS_MIN: f64 = 0.8;
pub const RADIUS_MAX: f64 = 3.0;
pub const ALPHA_MIN: f64 = 0.2;
pub const ALPHA_MAX: f64 = 0.8;
pub const PARTICLE_RGB: [u8; 3] = [110, 231, 183]; // mint

// Links between nearby particles
pub const LINK_DIST_SQ: f64 = 12_000.0; // px²
pub const LINK_ALPHA: f64 = 0.06;
pub const LINK_WIDTH: f64 = 1.0;

// Trail overlay, diagonal from top-left to bottom-right
pub const GRADIENT_START: &str = "rgba(7,20,34,0.08)";
pub const GRADIENT_END: &str = "rgba(3,10,18,0.08)";

// Off-screen point meaning "no pointer over the page"
pub const POINTER_SENTINEL: [f64; 2] = [-9999.0, -9999.0];

// Ripple effect
pub const RIPPLE_SCALE: f64 = 1.4; // diameter relative to the larger button side
pub const RIPPLE_LIFETIME_MS: i32 = 600;
pub const RIPPLE_FALLBACK_COLOR: &str = "rgba(255,255,255,0.12)";
