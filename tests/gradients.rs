use softcanvas::*;

fn rect(x: f64, y: f64, w: f64, h: f64) -> [Point; 4] {
    [
        Point::from_xy(x, y),
        Point::from_xy(x + w, y),
        Point::from_xy(x + w, y + h),
        Point::from_xy(x, y + h),
    ]
}

fn black_to_white() -> [GradientStop; 2] {
    [
        GradientStop::new(0.0, ColorU8::BLACK),
        GradientStop::new(1.0, ColorU8::WHITE),
    ]
}

#[test]
fn linear_horizontal() {
    let mut backend = SoftwareBackend::new(10, 4).unwrap();
    let gradient = backend.load_linear_gradient(&black_to_white());
    let style = FillStyle {
        shader: Shader::LinearGradient {
            gradient: &gradient,
            start: Point::from_xy(0.0, 0.0),
            end: Point::from_xy(10.0, 0.0),
        },
        blur: 0.0,
    };
    backend.fill(&style, &rect(0.0, 0.0, 10.0, 4.0), Transform::identity(), false);

    let pixmap = backend.pixmap();
    for y in 0..4 {
        assert_eq!(pixmap.pixel(0, y), Some(ColorU8::BLACK));

        let c = pixmap.pixel(5, y).unwrap();
        assert!((i32::from(c.red()) - 127).abs() <= 2);
        assert_eq!(c.red(), c.green());
        assert_eq!(c.alpha(), 255);
    }

    // Monotonic along the axis.
    for x in 1..10 {
        assert!(pixmap.pixel(x, 0).unwrap().red() > pixmap.pixel(x - 1, 0).unwrap().red());
    }
}

#[test]
fn linear_is_clamped() {
    let mut backend = SoftwareBackend::new(10, 1).unwrap();
    let gradient = backend.load_linear_gradient(&black_to_white());
    let style = FillStyle {
        shader: Shader::LinearGradient {
            gradient: &gradient,
            start: Point::from_xy(3.0, 0.0),
            end: Point::from_xy(5.0, 0.0),
        },
        blur: 0.0,
    };
    backend.fill(&style, &rect(0.0, 0.0, 10.0, 1.0), Transform::identity(), false);

    let pixmap = backend.pixmap();
    assert_eq!(pixmap.pixel(1, 0), Some(ColorU8::BLACK));
    assert_eq!(pixmap.pixel(8, 0), Some(ColorU8::WHITE));
}

#[test]
fn deleted_gradient_paints_nothing() {
    let mut backend = SoftwareBackend::new(4, 4).unwrap();
    let mut gradient = backend.load_linear_gradient(&black_to_white());
    gradient.delete();
    let style = FillStyle {
        shader: Shader::LinearGradient {
            gradient: &gradient,
            start: Point::from_xy(0.0, 0.0),
            end: Point::from_xy(4.0, 0.0),
        },
        blur: 0.0,
    };
    backend.fill(&style, &rect(0.0, 0.0, 4.0, 4.0), Transform::identity(), false);

    assert!(backend.pixmap().pixels().iter().all(|c| c.is_transparent()));
}

#[test]
fn replaced_stops() {
    let mut backend = SoftwareBackend::new(4, 1).unwrap();
    let red = ColorU8::from_rgba(255, 0, 0, 255);
    let mut gradient = backend.load_linear_gradient(&black_to_white());
    gradient.replace(&[GradientStop::new(0.0, red), GradientStop::new(1.0, red)]);
    let style = FillStyle {
        shader: Shader::LinearGradient {
            gradient: &gradient,
            start: Point::from_xy(0.0, 0.0),
            end: Point::from_xy(4.0, 0.0),
        },
        blur: 0.0,
    };
    backend.fill(&style, &rect(0.0, 0.0, 4.0, 1.0), Transform::identity(), false);

    assert!(backend.pixmap().pixels().iter().all(|c| *c == red));
}

#[test]
fn radial_concentric() {
    let mut backend = SoftwareBackend::new(11, 11).unwrap();
    let gradient = backend.load_radial_gradient(&black_to_white());
    let center = Point::from_xy(5.0, 5.0);
    let style = FillStyle {
        shader: Shader::RadialGradient {
            gradient: &gradient,
            from: center,
            to: center,
            radius_from: 0.0,
            radius_to: 5.0,
        },
        blur: 0.0,
    };
    backend.fill(&style, &rect(0.0, 0.0, 11.0, 11.0), Transform::identity(), false);

    let pixmap = backend.pixmap();
    assert_eq!(pixmap.pixel(5, 5), Some(ColorU8::BLACK));
    assert_eq!(pixmap.pixel(0, 0), Some(ColorU8::WHITE));

    // Symmetric around the center.
    assert_eq!(pixmap.pixel(3, 5), pixmap.pixel(7, 5));
    assert_eq!(pixmap.pixel(5, 3), pixmap.pixel(5, 7));
    assert_eq!(pixmap.pixel(3, 5), pixmap.pixel(5, 3));

    let c = pixmap.pixel(3, 5).unwrap();
    assert!((i32::from(c.red()) - 102).abs() <= 1);
}
