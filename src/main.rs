use projplot::Scene;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> projplot::Result<()> {
    // stdout may carry the drawing, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let scene = Scene::rational()?;
    let config = scene.config();
    info!(
        curves = scene.curves().len(),
        width = config.width,
        height = config.height,
        "built scene"
    );
    present(&scene)
}

#[cfg(feature = "window")]
fn present(scene: &Scene) -> projplot::Result<()> {
    projplot::window::show(scene, "Projective plotter")
}

/// Without a window the drawing is written as svg to stdout.
#[cfg(not(feature = "window"))]
fn present(scene: &Scene) -> projplot::Result<()> {
    use projplot::draw::svg::SvgCanvas;
    use projplot::render;
    use projplot::svg::SVG;
    use std::io::Write;

    let config = scene.config();
    let mut svg = SVG::new(config.width, config.height);
    let stats = render(scene, &mut SvgCanvas::from(&mut svg));

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", svg)?;
    stdout.flush()?;
    info!(
        elements = svg.elements.len(),
        points = stats.points,
        segments = stats.segments,
        "wrote svg"
    );
    Ok(())
}
