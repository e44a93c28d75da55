use std::time::Duration;

use crate::gallery::Gallery;
use crate::rendering::Renderer;

/// Runs one frame: advance, then draw if anything changed. Returns whether a
/// frame was drawn.
pub fn update(gallery: &mut Gallery, renderer: &mut impl Renderer, now: Duration) -> bool {
    let needs_render = gallery.update(now);

    if let Some((width, height)) = gallery.take_resize() {
        renderer.resize(width, height);
    }

    gallery.scene.late_update();

    if needs_render {
        renderer.render(&gallery.scene, &gallery.camera);
    }

    needs_render
}
