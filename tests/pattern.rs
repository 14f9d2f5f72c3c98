use softcanvas::*;

fn rect(x: f64, y: f64, w: f64, h: f64) -> [Point; 4] {
    [
        Point::from_xy(x, y),
        Point::from_xy(x + w, y),
        Point::from_xy(x + w, y + h),
        Point::from_xy(x, y + h),
    ]
}

const RED: ColorU8 = ColorU8::from_rgba(255, 0, 0, 255);
const GREEN: ColorU8 = ColorU8::from_rgba(0, 255, 0, 255);
const BLUE: ColorU8 = ColorU8::from_rgba(0, 0, 255, 255);

fn quadrants(backend: &mut SoftwareBackend) -> Image {
    let mut pixmap = Pixmap::new(2, 2).unwrap();
    pixmap.set_pixel(0, 0, RED);
    pixmap.set_pixel(1, 0, GREEN);
    pixmap.set_pixel(0, 1, BLUE);
    pixmap.set_pixel(1, 1, ColorU8::WHITE);
    backend.load_image(ImageSource::Pixmap(&pixmap)).unwrap()
}

#[test]
fn repeat() {
    let mut backend = SoftwareBackend::new(6, 6).unwrap();
    let image = quadrants(&mut backend);
    let pattern = backend.load_image_pattern(ImagePatternData {
        image: &image,
        transform: Transform::identity(),
        repeat: Repeat::Repeat,
    });
    let style = FillStyle {
        shader: Shader::Pattern(&pattern),
        blur: 0.0,
    };
    backend.fill(&style, &rect(0.0, 0.0, 6.0, 6.0), Transform::identity(), false);

    let pixmap = backend.pixmap();
    for y in 0..6 {
        for x in 0..6 {
            let expected = image.mip(0).unwrap().pixel(x % 2, y % 2);
            assert_eq!(pixmap.pixel(x, y), expected);
        }
    }
}

#[test]
fn no_repeat() {
    let mut backend = SoftwareBackend::new(6, 6).unwrap();
    let image = quadrants(&mut backend);
    let pattern = backend.load_image_pattern(ImagePatternData {
        image: &image,
        transform: Transform::from_translate(-2.0, -2.0),
        repeat: Repeat::NoRepeat,
    });
    let style = FillStyle {
        shader: Shader::Pattern(&pattern),
        blur: 0.0,
    };
    backend.fill(&style, &rect(0.0, 0.0, 6.0, 6.0), Transform::identity(), false);

    let pixmap = backend.pixmap();
    assert_eq!(pixmap.pixel(2, 2), Some(RED));
    assert_eq!(pixmap.pixel(3, 2), Some(GREEN));
    assert_eq!(pixmap.pixel(2, 3), Some(BLUE));
    assert_eq!(pixmap.pixel(3, 3), Some(ColorU8::WHITE));
    assert_eq!(pixmap.pixel(0, 0), Some(ColorU8::TRANSPARENT));
    assert_eq!(pixmap.pixel(4, 2), Some(ColorU8::TRANSPARENT));
}

#[test]
fn repeat_x() {
    let mut backend = SoftwareBackend::new(6, 6).unwrap();
    let image = quadrants(&mut backend);
    let pattern = backend.load_image_pattern(ImagePatternData {
        image: &image,
        transform: Transform::identity(),
        repeat: Repeat::RepeatX,
    });
    let style = FillStyle {
        shader: Shader::Pattern(&pattern),
        blur: 0.0,
    };
    backend.fill(&style, &rect(0.0, 0.0, 6.0, 6.0), Transform::identity(), false);

    let pixmap = backend.pixmap();
    assert_eq!(pixmap.pixel(4, 0), Some(RED));
    assert_eq!(pixmap.pixel(5, 1), Some(ColorU8::WHITE));
    assert_eq!(pixmap.pixel(0, 2), Some(ColorU8::TRANSPARENT));
}

#[test]
fn scaled() {
    let mut backend = SoftwareBackend::new(4, 4).unwrap();
    let image = quadrants(&mut backend);
    let pattern = backend.load_image_pattern(ImagePatternData {
        image: &image,
        transform: Transform::from_scale(0.5, 0.5),
        repeat: Repeat::Repeat,
    });
    let style = FillStyle {
        shader: Shader::Pattern(&pattern),
        blur: 0.0,
    };
    backend.fill(&style, &rect(0.0, 0.0, 4.0, 4.0), Transform::identity(), false);

    let pixmap = backend.pixmap();
    assert_eq!(pixmap.pixel(1, 1), Some(RED));
    assert_eq!(pixmap.pixel(2, 0), Some(GREEN));
    assert_eq!(pixmap.pixel(0, 3), Some(BLUE));
}

#[test]
fn transform_maps_canvas_to_image() {
    let mut src = Pixmap::new(2, 1).unwrap();
    src.set_pixel(0, 0, ColorU8::WHITE);
    src.set_pixel(1, 0, RED);

    let mut backend = SoftwareBackend::new(4, 1).unwrap();
    let image = backend.load_image(ImageSource::Pixmap(&src)).unwrap();
    let pattern = backend.load_image_pattern(ImagePatternData {
        image: &image,
        transform: Transform::from_scale(0.5, 1.0),
        repeat: Repeat::NoRepeat,
    });
    let style = FillStyle {
        shader: Shader::Pattern(&pattern),
        blur: 0.0,
    };
    backend.fill(&style, &rect(0.0, 0.0, 4.0, 1.0), Transform::identity(), false);

    assert_eq!(backend.pixmap().pixels(), &[ColorU8::WHITE, ColorU8::WHITE, RED, RED]);
}

#[test]
fn non_invertible_transform() {
    let mut backend = SoftwareBackend::new(4, 4).unwrap();
    let image = quadrants(&mut backend);
    let pattern = backend.load_image_pattern(ImagePatternData {
        image: &image,
        transform: Transform::from_scale(0.0, 1.0),
        repeat: Repeat::Repeat,
    });
    let style = FillStyle {
        shader: Shader::Pattern(&pattern),
        blur: 0.0,
    };
    backend.fill(&style, &rect(0.0, 0.0, 4.0, 4.0), Transform::identity(), false);

    // Every column samples the first image column.
    let pixmap = backend.pixmap();
    for x in 0..4 {
        assert_eq!(pixmap.pixel(x, 0), Some(RED));
        assert_eq!(pixmap.pixel(x, 1), Some(BLUE));
        assert_eq!(pixmap.pixel(x, 2), Some(RED));
    }
}

#[test]
fn deleted_pattern() {
    let mut backend = SoftwareBackend::new(4, 4).unwrap();
    let image = quadrants(&mut backend);
    let mut pattern = backend.load_image_pattern(ImagePatternData {
        image: &image,
        transform: Transform::identity(),
        repeat: Repeat::Repeat,
    });
    pattern.delete();
    let style = FillStyle {
        shader: Shader::Pattern(&pattern),
        blur: 0.0,
    };
    backend.fill(&style, &rect(0.0, 0.0, 4.0, 4.0), Transform::identity(), false);

    assert!(backend.pixmap().pixels().iter().all(|c| c.is_transparent()));
}
