use bitmap_synth::noise::{self, NoiseKind, NoiseRequest};
use bitmap_synth::{
    Color, CoordinateMapper, Error, GradientField, GradientKind, PixelBuffer, Point, RasterDrawer, Size,
};

#[test]
fn fill_then_single_pixel_write() {
    let mut buf = PixelBuffer::new(10, 10).unwrap();
    buf.fill(Color::bgra(10, 20, 30, 255));
    buf.set_pixel(5, 5, Color::bgra(0, 0, 0, 128));

    let bytes = buf.as_bytes();
    assert_eq!(&bytes[220..224], &[0, 0, 0, 128]);
    for (i, px) in bytes.chunks_exact(4).enumerate() {
        if i != 55 {
            assert_eq!(px, &[10, 20, 30, 255], "pixel {i}");
        }
    }
}

#[test]
fn every_kind_produces_a_full_buffer() {
    for kind in [
        NoiseKind::Raw,
        NoiseKind::Uniform,
        NoiseKind::Perlin,
        NoiseKind::Simplex,
        NoiseKind::Gaussian,
        NoiseKind::PlusPattern,
    ] {
        let buf = noise::generate(&NoiseRequest::new(37, 23, kind).alpha(9)).unwrap();
        assert_eq!(buf.as_bytes().len(), 37 * 23 * 4, "{kind:?}");
        if !matches!(kind, NoiseKind::Raw | NoiseKind::PlusPattern) {
            assert!(buf.as_bytes().chunks_exact(4).all(|px| px[3] == 9), "{kind:?}");
        }
    }
}

#[test]
fn plus_pattern_on_25_square() {
    let buf = noise::plus_pattern(25, 25, 200, 5).unwrap();
    assert_eq!(noise::plus_count(25, 25, 5), 25);
    for px in buf.as_bytes().chunks_exact(4) {
        assert!(px == [0, 0, 0, 0] || px == [255, 255, 255, 200], "{px:?}");
    }
}

#[test]
fn gradient_images_depend_only_on_the_field() {
    let field = GradientField::new(GradientKind::Perlin, 2024);
    let a = noise::gradient(120, 80, 255, &field).unwrap();
    let b = noise::gradient(120, 80, 255, &GradientField::new(GradientKind::Perlin, 2024)).unwrap();
    assert_eq!(a, b);

    let other = noise::gradient(120, 80, 255, &GradientField::new(GradientKind::Perlin, 2025)).unwrap();
    assert_ne!(a, other);
}

#[test]
fn mapper_scales_and_guards_zero_display() {
    let m = CoordinateMapper::new(Size::new(100.0, 100.0), Size::new(200.0, 200.0)).unwrap();
    assert_eq!(m.map_point(Point::new(50.0, 50.0)), Point::new(100.0, 100.0));
    assert!(matches!(
        CoordinateMapper::new(Size::new(0.0, 100.0), Size::new(200.0, 200.0)),
        Err(Error::DegenerateDisplay { .. })
    ));
}

#[test]
fn stretched_canvas_stroke() {
    // 560x560 canvas shown at 280x280: every display pixel covers two canvas pixels
    let display = Size::new(280.0, 280.0);
    let mut drawer = RasterDrawer::new(560, 560).unwrap();
    drawer.on_pointer_down(Point::new(10.0, 10.0), display).unwrap();
    drawer.on_pointer_move(Point::new(12.0, 10.0), display).unwrap();
    drawer.on_pointer_up();

    let canvas = drawer.into_canvas();
    for x in 20..=24 {
        assert_eq!(canvas.pixel(x, 20), Some(Color::BLACK));
    }
    assert_eq!(canvas.pixel(25, 20), Some(Color::WHITE));
    assert_eq!(canvas.pixel(19, 20), Some(Color::WHITE));
}

#[test]
fn invalid_sizes_fail_fast() {
    assert!(matches!(PixelBuffer::new(0, 1), Err(Error::InvalidDimension { .. })));
    assert!(matches!(RasterDrawer::new(-4, 4), Err(Error::InvalidDimension { .. })));
    let field = GradientField::new(GradientKind::Simplex, 0);
    assert!(matches!(noise::gradient(4, 0, 255, &field), Err(Error::InvalidDimension { .. })));
}

#[test]
fn extreme_inputs_never_panic() {
    for kind in [GradientKind::Perlin, GradientKind::Simplex] {
        let field = GradientField::new(kind, 1);
        assert!(field.noise(1e19, -1e19).is_finite(), "{kind:?}");
    }

    assert!(matches!(PixelBuffer::new(i64::MAX / 2, 4), Err(Error::InvalidDimension { .. })));

    let display = Size::new(10.0, 10.0);
    let mut drawer = RasterDrawer::new(10, 10).unwrap();
    drawer.on_pointer_down(Point::new(5.0, 5.0), display).unwrap();
    drawer.on_pointer_move(Point::new(3e9, 5.0), display).unwrap();
    let canvas = drawer.into_canvas();
    for x in 5..10 {
        assert_eq!(canvas.pixel(x, 5), Some(Color::BLACK));
    }
    assert_eq!(canvas.pixel(4, 5), Some(Color::WHITE));
}
