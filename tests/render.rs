use cairo::{Format, ImageSurface};
use easel::draw::{CairoSurface, ColorSpec, Point, Polygon, Rectangle, Renderer, Surface};
use std::f64::consts::FRAC_PI_4;

fn canvas(width: i32, height: i32) -> (ImageSurface, Renderer<CairoSurface>) {
    let image = ImageSurface::create(Format::ARgb32, width, height).unwrap();
    let surface = CairoSurface::for_image(&image).unwrap();
    (image, Renderer::new(surface))
}

/// Returns the `[b, g, r, a]` bytes of one pixel (premultiplied ARGB32).
fn pixel(image: &mut ImageSurface, x: usize, y: usize) -> [u8; 4] {
    image.flush();
    let stride = image.stride() as usize;
    let data = image.data().expect("image is not shared");
    let offset = y * stride + x * 4;
    [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
}

fn alpha(image: &mut ImageSurface, x: usize, y: usize) -> u8 {
    pixel(image, x, y)[3]
}

fn surface_is_blank(image: &mut ImageSurface) -> bool {
    image.flush();
    image
        .data()
        .map(|data| data.iter().all(|byte| *byte == 0))
        .unwrap_or(false)
}

const OPAQUE_BLUE: [u8; 4] = [255, 0, 0, 255];
const OPAQUE_RED: [u8; 4] = [0, 0, 255, 255];

#[test]
fn stroke_is_painted_over_fill() {
    let (mut image, mut renderer) = canvas(40, 40);
    renderer.fill(Some(ColorSpec::Rgb(255.0, 0.0, 0.0)));
    renderer.stroke(Some(ColorSpec::Rgb(0.0, 0.0, 255.0)));
    renderer.stroke_width(4.0);
    renderer.rect(10.0, 10.0, 20.0, 20.0).unwrap();
    drop(renderer);

    assert_eq!(pixel(&mut image, 10, 20), OPAQUE_BLUE);
    assert_eq!(pixel(&mut image, 20, 20), OPAQUE_RED);
}

#[test]
fn rectangle_is_placed_at_its_position() {
    let (mut image, mut renderer) = canvas(30, 30);
    renderer.no_stroke();
    renderer.fill(Some(ColorSpec::Gray(0.0)));
    renderer
        .draw(&Rectangle::new(Point::ORIGIN, 10.0, 10.0))
        .unwrap();
    drop(renderer);

    assert_eq!(alpha(&mut image, 0, 0), 255);
    assert_eq!(alpha(&mut image, 9, 9), 255);
    assert_eq!(alpha(&mut image, 12, 12), 0);
}

#[test]
fn rectangle_rotates_about_its_centre() {
    let (mut image, mut renderer) = canvas(50, 50);
    renderer.no_stroke();
    let diamond = Rectangle::new(Point::new(20.0, 20.0), 10.0, 10.0).with_rotation(FRAC_PI_4);
    renderer.draw(&diamond).unwrap();
    drop(renderer);

    // Corner of the unrotated box is now outside, the top tip is inside
    assert_eq!(alpha(&mut image, 20, 20), 0);
    assert_eq!(alpha(&mut image, 25, 20), 255);
    assert_eq!(alpha(&mut image, 25, 25), 255);
}

#[test]
fn draw_leaves_cairo_transform_unchanged() {
    let (_image, mut renderer) = canvas(50, 50);
    renderer.translate(3.0, 4.0);
    let before = renderer.surface().transform();

    let tilted = Rectangle::new(Point::new(5.0, 5.0), 10.0, 4.0).with_rotation(1.2);
    let triangle = Polygon::new(
        Point::new(30.0, 30.0),
        Point::to_points(&[0.0, 0.0, 8.0, 0.0, 0.0, 8.0]),
    )
    .with_rotation(0.4);
    for _ in 0..3 {
        renderer.draw(&tilted).unwrap();
        renderer.draw(&triangle).unwrap();
        assert_eq!(renderer.surface().transform(), before);
    }
}

#[test]
fn open_polygon_has_no_closing_edge() {
    let points = Point::to_points(&[10.0, 10.0, 30.0, 10.0, 30.0, 30.0]);

    let (mut image, mut renderer) = canvas(40, 40);
    renderer.no_fill();
    renderer.stroke_width(2.0);
    renderer
        .draw(&Polygon::new(Point::ORIGIN, points.clone()).open())
        .unwrap();
    drop(renderer);
    assert_eq!(alpha(&mut image, 20, 10), 255);
    assert_eq!(alpha(&mut image, 20, 20), 0);

    let (mut image, mut renderer) = canvas(40, 40);
    renderer.no_fill();
    renderer.stroke_width(2.0);
    renderer.draw(&Polygon::new(Point::ORIGIN, points)).unwrap();
    drop(renderer);
    assert!(alpha(&mut image, 20, 20) > 0);
}

#[test]
fn explicit_path_is_painted_without_touching_current_path() {
    let (mut image, mut renderer) = canvas(30, 30);
    renderer.no_stroke();

    let surface = renderer.surface_mut();
    surface.begin_path();
    surface.rect(0.0, 0.0, 5.0, 5.0);
    let square = surface.copy_path().unwrap();
    surface.begin_path();
    surface.move_to(20.0, 20.0);

    renderer.paint(Some(&square)).unwrap();
    assert_eq!(
        renderer.surface().context().current_point().unwrap(),
        (20.0, 20.0)
    );
    drop(renderer);

    assert_eq!(alpha(&mut image, 2, 2), 255);
    assert_eq!(alpha(&mut image, 10, 10), 0);
}

#[test]
fn clear_wipes_pixels_and_transform() {
    let (mut image, mut renderer) = canvas(20, 20);
    renderer.translate(50.0, 50.0);
    renderer.fill(Some(ColorSpec::from("orange")));
    renderer.rect(-50.0, -50.0, 20.0, 20.0).unwrap();

    renderer.clear().unwrap();
    assert_eq!(renderer.surface().transform().x0, 0.0);
    drop(renderer);

    assert!(surface_is_blank(&mut image));
}
