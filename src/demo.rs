//! Demonstration scene rendered by the `easel` binary.

use easel::Config;
use easel::draw::{ColorSpec, Point, Polygon, Rectangle, Renderer, Shape, Surface};
use std::f64::consts::PI;

/// Draws the demo scene onto `renderer`, sized to its surface.
pub fn render_scene<S: Surface>(
    renderer: &mut Renderer<S>,
    config: &Config,
) -> Result<(), S::Error> {
    let (width, height) = renderer.surface().size();

    renderer.clear()?;
    renderer.no_stroke();
    renderer.fill(Some(config.canvas.background.clone()));
    renderer.rect(0.0, 0.0, width, height)?;

    // Row of tiles, each turned a little further about its own centre
    renderer.stroke(Some(ColorSpec::Gray(40.0)));
    renderer.stroke_width(2.0);
    let side = width * 0.1;
    let tiles: Vec<Shape> = (0..5)
        .map(|i| {
            let step = i as f64;
            let position = Point::new(width * (0.08 + 0.18 * step), height * 0.1);
            Rectangle::new(position, side, side)
                .with_rotation(step * PI / 10.0)
                .into()
        })
        .collect();
    for (i, tile) in tiles.iter().enumerate() {
        let step = i as f64;
        renderer.fill(Some(ColorSpec::Rgb(60.0 + 40.0 * step, 120.0, 200.0 - 30.0 * step)));
        renderer.draw(tile)?;
    }

    // Five-pointed star, pivoting on its own centre
    let star = Polygon::new(
        Point::new(width * 0.28, height * 0.58),
        star_points(5, width * 0.14, width * 0.06),
    )
    .with_rotation(-PI / 2.0);
    renderer.fill(Some(ColorSpec::from("#f5b700")));
    renderer.draw(&star)?;

    // Open zigzag, outline only regardless of the fill setting
    let amplitude = height * 0.12;
    let run = width * 0.07;
    let zigzag = Polygon::new(
        Point::new(width * 0.5, height * 0.5),
        Point::to_points(&[
            0.0,
            0.0,
            run,
            amplitude,
            run * 2.0,
            0.0,
            run * 3.0,
            amplitude,
            run * 4.0,
            0.0,
        ]),
    )
    .open()
    .with_fill(false);
    renderer.stroke(Some(ColorSpec::Rgb(200.0, 30.0, 60.0)));
    renderer.stroke_width(4.0);
    renderer.draw(&zigzag)?;

    renderer.fill(Some(ColorSpec::Rgb(90.0, 200.0, 120.0)));
    renderer.stroke_width(2.0);
    renderer.ellipse(width * 0.8, height * 0.78, width * 0.08, height * 0.07)?;
    renderer.line(width * 0.05, height * 0.92, width * 0.95, height * 0.92)?;

    renderer.font(&config.font.to_pango_string());
    renderer.no_stroke();
    renderer.fill(Some(config.style.color.clone()));
    renderer.text("easel", width * 0.05, height * 0.88)?;

    Ok(())
}

/// Alternating outer/inner vertices around `(0, 0)`, starting on the +x axis.
fn star_points(tips: usize, outer: f64, inner: f64) -> Vec<Point> {
    let count = tips * 2;
    let coordinates: Vec<f64> = (0..count)
        .flat_map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = i as f64 * PI / tips as f64;
            [radius * angle.cos(), radius * angle.sin()]
        })
        .collect();
    Point::to_points(&coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel::draw::RecordingSurface;
    use easel::draw::recording::Call;

    #[test]
    fn star_alternates_radii() {
        let points = star_points(5, 10.0, 4.0);
        assert_eq!(points.len(), 10);
        assert!((Point::distance(points[0], Point::ORIGIN) - 10.0).abs() < 1e-9);
        assert!((Point::distance(points[1], Point::ORIGIN) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn scene_balances_every_save() {
        let mut renderer = Renderer::new(RecordingSurface::new(400.0, 300.0));
        render_scene(&mut renderer, &Config::default()).unwrap();

        let surface = renderer.surface();
        assert_eq!(surface.depth(), 0);
        let saves = surface.calls().iter().filter(|c| **c == Call::Save).count();
        let restores = surface
            .calls()
            .iter()
            .filter(|c| **c == Call::Restore)
            .count();
        assert_eq!(saves, 7);
        assert_eq!(saves, restores);
        assert!(
            surface
                .calls()
                .iter()
                .any(|c| matches!(c, Call::FillText(text, ..) if text == "easel"))
        );
    }
}
