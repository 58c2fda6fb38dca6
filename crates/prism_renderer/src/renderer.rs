//! Frame rendering.
//!
//! The image is split into row ranges that are traced in parallel on a
//! dedicated rayon pool. Each worker writes only into its own slice of the
//! pixel buffer, and the frame is returned once every range is done.

use std::time::Instant;

use prism_core::{Color, Scene};
use prism_math::{Camera, CameraBasis};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::RenderError;
use crate::partition::{partition_rows, RowRange};
use crate::settings::RenderSettings;
use crate::tracer::trace;

/// A rendered image, row-major with `(0, 0)` at the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Frame {
    /// Create a frame filled with the background colour.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }
}

/// Renders frames on a fixed-size worker pool.
pub struct FrameRenderer {
    pool: ThreadPool,
    workers: usize,
    update_requested: bool,
}

impl FrameRenderer {
    /// Create a renderer with `worker_count` threads, 0 for one per
    /// hardware thread.
    pub fn new(worker_count: usize) -> Result<Self, RenderError> {
        let workers = if worker_count == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            worker_count
        };

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("prism-worker-{i}"))
            .build()?;

        log::debug!("Frame renderer using {} workers", workers);

        Ok(Self {
            pool,
            workers,
            update_requested: true,
        })
    }

    /// Validate `settings` and size the pool from `worker_count`.
    pub fn from_settings(settings: &RenderSettings) -> Result<Self, RenderError> {
        settings.validate()?;
        Self::new(settings.worker_count)
    }

    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// Ask for a new frame on the next [`render_if_needed`](Self::render_if_needed).
    pub fn request_update(&mut self) {
        self.update_requested = true;
    }

    pub fn update_requested(&self) -> bool {
        self.update_requested
    }

    /// Render only in realtime mode or when an update was requested.
    pub fn render_if_needed(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        settings: &RenderSettings,
        width: u32,
        height: u32,
    ) -> Option<Frame> {
        if !settings.realtime && !self.update_requested {
            log::debug!("No update requested, skipping frame");
            return None;
        }

        self.update_requested = false;
        Some(self.render(scene, camera, settings, width, height))
    }

    /// Render one frame. Blocks until every row range has finished.
    pub fn render(
        &self,
        scene: &Scene,
        camera: &Camera,
        settings: &RenderSettings,
        width: u32,
        height: u32,
    ) -> Frame {
        let settings = settings.sanitized();
        let mut frame = Frame::new(width, height);
        if width == 0 || height == 0 {
            return frame;
        }

        let ranges = partition_rows(height, self.workers);
        let basis = camera.basis();
        let start = Instant::now();

        log::debug!(
            "Rendering {}x{} '{}' in {} row ranges \
             (samples {}, shadows {}/{}, reflection {}, refraction {})",
            width,
            height,
            scene.name,
            ranges.len(),
            settings.samples_per_axis(),
            settings.shadows_enabled,
            settings.soft_shadows_enabled,
            settings.reflection_enabled,
            settings.refraction_enabled
        );

        let mut slices = Vec::with_capacity(ranges.len());
        let mut rest = frame.pixels.as_mut_slice();
        for range in &ranges {
            let len = range.len() as usize * width as usize;
            let (slice, tail) = std::mem::take(&mut rest).split_at_mut(len);
            slices.push((*range, slice));
            rest = tail;
        }

        let settings = &settings;
        let basis = &basis;
        self.pool.scope(|s| {
            for (range, slice) in slices {
                s.spawn(move |_| {
                    render_rows(range, slice, scene, camera, basis, settings, width, height);
                });
            }
        });

        log::info!("Frame {}x{} rendered in {:?}", width, height, start.elapsed());
        frame
    }
}

/// Render a single frame on a temporary pool.
pub fn render_frame(
    scene: &Scene,
    camera: &Camera,
    settings: &RenderSettings,
    width: u32,
    height: u32,
) -> Result<Frame, RenderError> {
    let renderer = FrameRenderer::from_settings(settings)?;
    Ok(renderer.render(scene, camera, settings, width, height))
}

/// Seed for the jitter of one image row.
///
/// Depends only on the frame seed and the row, so the image does not
/// change with the number of workers.
fn row_seed(seed: u64, row: u32) -> u64 {
    seed ^ (row as u64 + 1).wrapping_mul(0x9e37_79b9_7f4a_7c15)
}

#[allow(clippy::too_many_arguments)]
fn render_rows(
    range: RowRange,
    pixels: &mut [Color],
    scene: &Scene,
    camera: &Camera,
    basis: &CameraBasis,
    settings: &RenderSettings,
    width: u32,
    height: u32,
) {
    let row_width = width as usize;
    for (row, y) in pixels.chunks_mut(row_width).zip(range.rows()) {
        let mut rng = StdRng::seed_from_u64(row_seed(settings.seed, y));
        for (x, pixel) in row.iter_mut().enumerate() {
            let x = x as u32;
            *pixel = render_pixel(scene, camera, basis, x, y, settings, width, height, &mut rng);
        }
    }
}

/// Average of an `N x N` grid of rays through the pixel, `N` from
/// [`RenderSettings::samples_per_axis`]. With `N = 1` this is one ray
/// through the pixel centre.
#[allow(clippy::too_many_arguments)]
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    basis: &CameraBasis,
    x: u32,
    y: u32,
    settings: &RenderSettings,
    width: u32,
    height: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let n = settings.samples_per_axis();
    let step = 1.0 / n as f32;

    let mut samples = Vec::with_capacity(n as usize * n as usize);
    for i in 0..n {
        for j in 0..n {
            let px = x as f32 + (j as f32 + 0.5) * step;
            let py = y as f32 + (i as f32 + 0.5) * step;
            let ray = camera.primary_ray(basis, px, py, width, height);
            samples.push(trace(&ray, scene, settings, 0, 0, rng));
        }
    }

    Color::average(&samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Material, Object, PointLight, Sphere};
    use prism_math::Vec3;

    fn sphere_scene() -> Scene {
        let mut scene = Scene::new("sphere");
        scene.add(
            Object::new(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0))
                .with_material(Material::default().with_reflectivity(0.0)),
        );
        scene.add(Object::new(PointLight::new(Vec3::new(2.0, 2.0, 1.0), 50.0)));
        scene
    }

    fn camera() -> Camera {
        Camera::new(Vec3::ZERO, 60.0, 60.0)
    }

    #[test]
    fn test_frame_dimensions() {
        let renderer = FrameRenderer::new(2).unwrap();
        let frame = renderer.render(&sphere_scene(), &camera(), &RenderSettings::default(), 16, 9);

        assert_eq!(frame.pixels.len(), 16 * 9);
        assert_eq!(frame.to_rgba8().len(), 16 * 9 * 4);
    }

    #[test]
    fn test_empty_frame() {
        let renderer = FrameRenderer::new(1).unwrap();
        let frame = renderer.render(&sphere_scene(), &camera(), &RenderSettings::default(), 0, 10);
        assert!(frame.pixels.is_empty());
    }

    #[test]
    fn test_center_hits_sphere_corner_misses() {
        let settings = RenderSettings::default();
        let frame = render_frame(&sphere_scene(), &camera(), &settings, 21, 21).unwrap();

        assert_ne!(frame.get(10, 10), Color::TRANSPARENT);
        assert_eq!(frame.get(0, 0), Color::TRANSPARENT);
    }

    #[test]
    fn test_render_if_needed() {
        let scene = sphere_scene();
        let settings = RenderSettings::default();
        let mut renderer = FrameRenderer::new(1).unwrap();

        assert!(renderer.render_if_needed(&scene, &camera(), &settings, 4, 4).is_some());
        assert!(renderer.render_if_needed(&scene, &camera(), &settings, 4, 4).is_none());

        renderer.request_update();
        assert!(renderer.update_requested());
        assert!(renderer.render_if_needed(&scene, &camera(), &settings, 4, 4).is_some());

        let realtime = RenderSettings {
            realtime: true,
            ..Default::default()
        };
        assert!(renderer.render_if_needed(&scene, &camera(), &realtime, 4, 4).is_some());
        assert!(renderer.render_if_needed(&scene, &camera(), &realtime, 4, 4).is_some());
    }

    #[test]
    fn test_supersampling_softens_edges() {
        let scene = sphere_scene();
        let plain = render_frame(&scene, &camera(), &RenderSettings::default(), 24, 24).unwrap();

        let settings = RenderSettings {
            super_sampling_enabled: true,
            sample_count: 3,
            ..Default::default()
        };
        let smooth = render_frame(&scene, &camera(), &settings, 24, 24).unwrap();

        assert_eq!(smooth.pixels.len(), plain.pixels.len());
        assert_ne!(smooth, plain);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = RenderSettings {
            sample_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            render_frame(&sphere_scene(), &camera(), &settings, 4, 4),
            Err(RenderError::Settings(_))
        ));

        // Built directly, the renderer repairs the value instead
        let renderer = FrameRenderer::new(1).unwrap();
        assert_eq!(renderer.render(&sphere_scene(), &camera(), &settings, 4, 4).pixels.len(), 16);
    }

    #[test]
    fn test_row_seeds_differ() {
        assert_ne!(row_seed(1, 0), row_seed(1, 1));
        assert_ne!(row_seed(1, 0), row_seed(2, 0));
    }
}
