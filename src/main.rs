//! Argand plane entry point
//!
//! Native builds run a headless pass over the engine: resolve the scene for
//! the given controls and print the readout. The browser build's entry
//! point lives in the library (`web::wasm_start`).

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use argand_plane::{Settings, compose, format_number};

    env_logger::init();
    log::info!("Argand plane (native) starting...");

    // argand-plane [settings.json] [theta mantissa exponent zoom]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (mut settings, numbers) = match args.first() {
        Some(first) if first.parse::<f64>().is_err() => (
            Settings::load_from_path(std::path::Path::new(first)),
            &args[1..],
        ),
        _ => (Settings::default(), &args[..]),
    };

    let mut values = numbers.iter().map(|s| s.parse::<f64>());
    let mut next = |name: &str, current: f64| match values.next() {
        Some(Ok(v)) => v,
        Some(Err(e)) => {
            log::warn!("Ignoring {}: {}", name, e);
            current
        }
        None => current,
    };
    settings.theta = next("theta", settings.theta);
    settings.mantissa = next("mantissa", settings.mantissa);
    settings.exponent = next("exponent", settings.exponent);
    settings.zoom = next("zoom", settings.zoom);
    settings.sanitize();

    let Some(view) = settings.view() else {
        log::error!("Invalid view settings");
        std::process::exit(1);
    };

    let scene = compose(&settings.controls(), &settings.toggles(), &view);
    println!("|z| = {}", scene.readout.magnitude);
    println!("θ   = {} rad ({})", scene.readout.theta, scene.readout.degrees);
    println!("z   = {}", scene.readout.rectangular);
    println!(
        "grid: step {} x {} ({} x {} lines)",
        format_number(scene.grid.step_x),
        format_number(scene.grid.step_y),
        scene.grid.xs.len(),
        scene.grid.ys.len()
    );
    println!("{} draw commands", scene.commands.len());
    log::info!("Scene composed at zoom {}", view.zoom());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_start, this is just to satisfy the compiler
}
