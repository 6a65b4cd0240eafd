use super::constants::*;
use glam::DVec2;
use rand::Rng;

/// Tuning values for the particle field.
///
/// `Default` reproduces the look of the page background.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub max_particles: usize,
    pub area_per_particle: f64,
    pub wrap_margin: f64,
    pub initial_speed_max: f64,
    pub radius_range: (f64, f64),
    pub alpha_range: (f64, f64),
    pub attract_radius_sq: f64,
    pub attract_accel: f64,
    pub link_dist_sq: f64,
    pub link_alpha: f64,
    pub link_width: f64,
    pub color_rgb: [u8; 3],
    pub gradient: (&'static str, &'static str),
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            area_per_particle: AREA_PER_PARTICLE,
            wrap_margin: WRAP_MARGIN,
            initial_speed_max: INITIAL_SPEED_MAX,
            radius_range: (RADIUS_MIN, RADIUS_MAX),
            alpha_range: (ALPHA_MIN, ALPHA_MAX),
            attract_radius_sq: ATTRACT_RADIUS_SQ,
            attract_accel: ATTRACT_ACCEL,
            link_dist_sq: LINK_DIST_SQ,
            link_alpha: LINK_ALPHA,
            link_width: LINK_WIDTH,
            color_rgb: PARTICLE_RGB,
            gradient: (GRADIENT_START, GRADIENT_END),
        }
    }
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Last known pointer position. Sits on an off-screen sentinel while no
/// pointer is over the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub pos: DVec2,
}

impl Pointer {
    pub const SENTINEL: Pointer = Pointer {
        pos: DVec2::new(POINTER_SENTINEL[0], POINTER_SENTINEL[1]),
    };

    pub fn at(x: f64, y: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        *self != Self::SENTINEL
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::SENTINEL
    }
}

/// Straight-alpha RGBA colour as understood by canvas style strings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: [u8; 3],
    pub alpha: f64,
}

impl Rgba {
    pub fn css(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.rgb[0], self.rgb[1], self.rgb[2], self.alpha
        )
    }
}

/// Drawing target for [`ParticleField::render`].
///
/// The web frontend implements this over `CanvasRenderingContext2d`; tests
/// implement it with a recorder.
pub trait Surface {
    fn clear(&mut self, viewport: Viewport);
    /// Fill the whole viewport with a linear gradient from the top-left
    /// corner (`start`) to the bottom-right corner (`end`).
    fn fill_diagonal_gradient(&mut self, viewport: Viewport, start: &str, end: &str);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Rgba, width: f64);
}

/// A single animated dot. Radius and alpha never change after spawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub alpha: f64,
}

impl Particle {
    /// Uniformly random particle inside `viewport`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, config: &FieldConfig) -> Self {
        let speed = config.initial_speed_max;
        let (r_min, r_max) = config.radius_range;
        let (a_min, a_max) = config.alpha_range;
        Self {
            pos: DVec2::new(
                rng.gen::<f64>() * viewport.width,
                rng.gen::<f64>() * viewport.height,
            ),
            vel: DVec2::new(
                (rng.gen::<f64>() - 0.5) * 2.0 * speed,
                (rng.gen::<f64>() - 0.5) * 2.0 * speed,
            ),
            radius: r_min + rng.gen::<f64>() * (r_max - r_min),
            alpha: a_min + rng.gen::<f64>() * (a_max - a_min),
        }
    }

    /// Advance one frame: move, wrap around the viewport, then nudge toward
    /// the pointer when it is close enough. Returns whether the velocity was
    /// nudged.
    pub fn step(&mut self, viewport: Viewport, pointer: Pointer, config: &FieldConfig) -> bool {
        self.pos += self.vel;
        self.pos.x = wrap_axis(self.pos.x, viewport.width, config.wrap_margin);
        self.pos.y = wrap_axis(self.pos.y, viewport.height, config.wrap_margin);

        if !pointer.is_active() {
            return false;
        }
        let to_pointer = pointer.pos - self.pos;
        let d2 = to_pointer.length_squared();
        // d2 == 0 has no direction to pull in
        if d2 >= config.attract_radius_sq || d2 <= 0.0 {
            return false;
        }
        self.vel += to_pointer * (config.attract_accel / d2.sqrt());
        true
    }
}

/// Toroidal wrap on one axis with `margin` px of slack beyond each edge.
#[inline]
pub fn wrap_axis(v: f64, extent: f64, margin: f64) -> f64 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}

/// Number of particles for a viewport of `area` px²: one per
/// `area_per_particle`, capped at `max_particles`. Degenerate areas give 0.
pub fn particle_count(area: f64, config: &FieldConfig) -> usize {
    if area.is_nan() || area <= 0.0 || config.area_per_particle <= 0.0 {
        return 0;
    }
    let n = (area / config.area_per_particle).floor();
    if n >= config.max_particles as f64 {
        config.max_particles
    } else {
        n as usize
    }
}

/// The particle collection plus the viewport it wraps within.
#[derive(Clone, Debug)]
pub struct ParticleField {
    config: FieldConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Seed a field sized to `viewport` (see [`particle_count`]).
    pub fn new<R: Rng + ?Sized>(viewport: Viewport, config: FieldConfig, rng: &mut R) -> Self {
        let n = particle_count(viewport.area(), &config);
        Self::with_count(viewport, config, n, rng)
    }

    /// Seed a field with exactly `n` particles.
    pub fn with_count<R: Rng + ?Sized>(
        viewport: Viewport,
        config: FieldConfig,
        n: usize,
        rng: &mut R,
    ) -> Self {
        let particles = (0..n)
            .map(|_| Particle::spawn(&mut *rng, viewport, &config))
            .collect();
        Self {
            config,
            viewport,
            particles,
        }
    }

    /// Build a field from explicit particles.
    pub fn from_particles(viewport: Viewport, config: FieldConfig, particles: Vec<Particle>) -> Self {
        Self {
            config,
            viewport,
            particles,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Adopt new viewport bounds. The particle set is kept as is; particles
    /// left outside the new bounds wrap back in on their next step.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Step every particle once. Returns how many were nudged by the pointer.
    pub fn step(&mut self, pointer: Pointer) -> usize {
        let viewport = self.viewport;
        let config = &self.config;
        self.particles
            .iter_mut()
            .map(|p| p.step(viewport, pointer, config))
            .filter(|&nudged| nudged)
            .count()
    }

    /// Index pairs `(i, j)` with `i < j` closer than the link distance.
    pub fn links(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                if a.pos.distance_squared(b.pos) < self.config.link_dist_sq {
                    out.push((i, j));
                }
            }
        }
        out
    }

    /// Draw one frame: clear, trail gradient, particles, then links.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let vp = self.viewport;
        surface.clear(vp);
        let (start, end) = self.config.gradient;
        surface.fill_diagonal_gradient(vp, start, end);

        for p in &self.particles {
            surface.fill_circle(
                p.pos,
                p.radius,
                Rgba {
                    rgb: self.config.color_rgb,
                    alpha: p.alpha,
                },
            );
        }

        let link_color = Rgba {
            rgb: self.config.color_rgb,
            alpha: self.config.link_alpha,
        };
        for (i, j) in self.links() {
            surface.stroke_line(
                self.particles[i].pos,
                self.particles[j].pos,
                link_color,
                self.config.link_width,
            );
        }
    }

    /// One animation frame: render the current state, then advance it.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, pointer: Pointer) -> usize {
        self.render(surface);
        self.step(pointer)
    }
}
