//! Tilt Kernel demo entry point
//!
//! Runs the scene headless with a simulated noisy tilt and logs what a
//! renderer would receive. Pass a tuning JSON path as the first argument to
//! override the defaults. Set `RUST_LOG=debug` to see border hits.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tilt Kernel (native) starting...");

    if let Err(e) = run() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser shell; the library is driven by the host page
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> tilt_kernel::Result<()> {
    use tilt_kernel::platform::{NoisyTilt, SensorSubscription};
    use tilt_kernel::sim::MotionSample;
    use tilt_kernel::{Scene, Tuning};

    const FRAMES: u32 = 600;
    const FRAME_RATE: f64 = 60.0;

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    // iPad landscape in points
    let mut scene = Scene::new(1024.0, 768.0, tuning)?;
    let mut source =
        NoisyTilt::new(MotionSample::new(0.25, 0.35, -0.9), 0.04, 0x5EED).with_dropout(0.05);

    let mut bounces = 0u32;
    {
        let mut sensor = SensorSubscription::new(&mut source);
        for frame in 0..FRAMES {
            // Swing the tilt around every two seconds
            if frame % 120 == 0 && frame > 0 {
                let angle = frame as f32 / 120.0 * 2.1;
                sensor
                    .source_mut()
                    .set_tilt(MotionSample::new(0.4 * angle.cos(), 0.4 * angle.sin(), -0.9));
            }

            let out = scene.tick(&mut sensor, frame as f64 / FRAME_RATE)?;
            if out.player.contact.any() {
                bounces += 1;
            }
            if frame % 60 == 0 {
                log::info!(
                    "frame {:>3}: pos=({:>6.1}, {:>6.1}) vel=({:>6.1}, {:>6.1}) rot={:>6.1}° turret={:>6.1}°",
                    frame,
                    out.player.position.x,
                    out.player.position.y,
                    out.player.velocity.x,
                    out.player.velocity.y,
                    out.player.render_rotation.to_degrees(),
                    out.turret_rotation.to_degrees()
                );
            }
        }
    }

    let player = scene.player();
    log::info!(
        "Done: {} frames, {} border hits, final pos=({:.1}, {:.1}), facing {:.1}°",
        scene.frames(),
        bounces,
        player.position().x,
        player.position().y,
        player.orientation().facing().to_degrees()
    );
    Ok(())
}
