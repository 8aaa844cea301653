//! Shows a scene in a resizable desktop window until it is closed.

use crate::error::Result;
use crate::raster::Framebuffer;
use crate::render::render;
use crate::scene::Scene;
use minifb::{Window, WindowOptions};
use tracing::{debug, info};

/// Frames presented per second while the window is open
pub const TARGET_FPS: usize = 60;

/// Opens a window of the scene's configured size and keeps it painted.
///
/// The scene is rendered again whenever the window reports a new size,
/// every other frame presents the last rendering. Returns once the window is closed.
pub fn show(scene: &Scene, title: &str) -> Result<()> {
    let config = scene.config();
    let mut window = Window::new(
        title,
        config.width as usize,
        config.height as usize,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(TARGET_FPS);

    let mut buffer = Framebuffer::new(0, 0);
    while window.is_open() {
        let (width, height) = window.get_size();
        if width == 0 || height == 0 {
            // Minimized, nothing to present
            window.update();
            continue;
        }
        if (width, height) != (buffer.width(), buffer.height()) {
            buffer.resize(width, height);
            let stats = render(scene, &mut buffer);
            debug!(width, height, points = stats.points, "repainted");
        }
        window.update_with_buffer(buffer.pixels(), buffer.width(), buffer.height())?;
    }
    info!("window closed");
    Ok(())
}
