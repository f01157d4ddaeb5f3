//! Headless driver for the plotter: builds a scene with an animated wave
//! and its Fourier components, replays a synthetic drag-and-zoom gesture,
//! and renders every frame into a recording surface.

use std::time::Duration;

use anyhow::Result;
use tracing::info;

use waveplot::{
    Curve, Event, PlotView, Point, PointerId, RenderList, Scene, Size, Surface, SurfaceSize,
    fourier_components,
};

const FRAMES: u64 = 120;
const FRAME_MILLIS: u64 = 16;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut surface = RenderList::new(SurfaceSize::new(800.0, 600.0));
    let mut scene = Scene::builder()
        .view(PlotView::new(Point::new(2.0, 0.0), Size::new(8.0, 4.0)))
        .surface_size(surface.size())
        .granularity(0.5)
        .build();

    scene.add_curve(
        Curve::animated("wave", |params, t| params.eval(t))
            .with_domain(-4.0, 4.0)
            .with_samples(400),
    )?;
    // Cosine transform component of the current wave, queried per frequency.
    scene.add_curve(
        Curve::animated("spectrum", |params, frequency| {
            fourier_components(|t| params.eval(t), frequency, 20.0, 400).0
        })
        .with_domain(0.5, 4.0)
        .with_samples(120),
    )?;
    scene.add_curve(
        Curve::fixed("envelope", |x| (-x * x / 8.0).exp())
            .with_domain(-4.0, 4.0)
            .with_samples(400),
    )?;

    scene.handle(Event::Resize {
        size: surface.size(),
    });

    for frame in 0..FRAMES {
        // Synthetic 60 Hz clock; a windowed host would pass its own
        // monotonic reading here.
        scene.handle(Event::Tick {
            elapsed: Duration::from_millis(frame * FRAME_MILLIS),
        });
        gesture(&mut scene, frame);
        scene.render(&mut surface);
        let commands = surface.take_commands();
        tracing::debug!(frame, commands = commands.len(), "frame rendered");
    }

    let view = scene.view();
    info!(
        center_x = view.center.x,
        center_y = view.center.y,
        width = view.size.w,
        height = view.size.h,
        "final view"
    );
    Ok(())
}

/// Drag the plot to the right for a second, release, then zoom out.
fn gesture(scene: &mut Scene, frame: u64) {
    let pointer = PointerId(1);
    match frame {
        30 => scene.handle(Event::PointerDown {
            pointer,
            position: Point::new(400.0, 300.0),
        }),
        31..=59 => scene.handle(Event::PointerMove {
            pointer,
            position: Point::new(400.0 + 4.0 * (frame - 30) as f64, 300.0),
        }),
        60 => scene.handle(Event::PointerUp { pointer }),
        70..=75 => scene.handle(Event::Wheel { delta_y: 125.0 }),
        _ => {}
    }
}
