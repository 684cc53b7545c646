use snapform_core::analytics::Range;
use snapform_render::ChartRenderer;
use std::fs::File;
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut renderer = ChartRenderer::new();
    for range in Range::ALL {
        let png = renderer.render_range(range, 640, 260)?;
        let name = format!("responses_{}.png", range.label().to_lowercase());
        File::create(&name)?.write_all(&png)?;
        info!(file = %name, bytes = png.len(), "chart written");
    }
    Ok(())
}
