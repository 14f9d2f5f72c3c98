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

#[test]
fn restricts_fill() {
    let mut backend = SoftwareBackend::new(10, 10).unwrap();
    backend.clip(&rect(0.0, 0.0, 5.0, 10.0));
    backend.fill(&FillStyle::solid(RED), &rect(0.0, 0.0, 10.0, 10.0), Transform::identity(), false);

    let pixmap = backend.pixmap();
    assert_eq!(pixmap.pixel(4, 9), Some(RED));
    assert_eq!(pixmap.pixel(5, 0), Some(ColorU8::TRANSPARENT));
}

#[test]
fn restricts_msaa_fill() {
    let mut backend = SoftwareBackend::new(10, 10).unwrap();
    backend.set_msaa(2);
    backend.clip(&rect(0.0, 0.0, 5.0, 10.0));
    let tri = [
        Point::from_xy(0.0, 0.0),
        Point::from_xy(10.0, 0.3),
        Point::from_xy(0.3, 10.0),
    ];
    backend.fill(&FillStyle::solid(RED), &tri, Transform::identity(), false);

    let pixmap = backend.pixmap();
    for y in 0..10 {
        for x in 5..10 {
            assert_eq!(pixmap.pixel(x, y), Some(ColorU8::TRANSPARENT));
        }
    }
}

#[test]
fn intersection_is_commutative() {
    let a = rect(0.0, 0.0, 6.0, 6.0);
    let b = [
        Point::from_xy(2.0, 1.0),
        Point::from_xy(9.0, 3.0),
        Point::from_xy(4.0, 9.0),
    ];

    let mut ab = SoftwareBackend::new(10, 10).unwrap();
    ab.clip(&a);
    ab.clip(&b);

    let mut ba = SoftwareBackend::new(10, 10).unwrap();
    ba.clip(&b);
    ba.clip(&a);

    assert_eq!(ab.clip_mask().as_mask().data(), ba.clip_mask().as_mask().data());
    assert!(ab.clip_mask().is_visible(3, 3));
    assert!(!ab.clip_mask().is_visible(8, 3));
    assert!(!ab.clip_mask().is_visible(0, 5));
}

#[test]
fn disjoint_clips() {
    let mut backend = SoftwareBackend::new(10, 10).unwrap();
    backend.clip(&rect(0.0, 0.0, 3.0, 3.0));
    backend.clip(&rect(5.0, 5.0, 3.0, 3.0));
    backend.fill(&FillStyle::solid(RED), &rect(0.0, 0.0, 10.0, 10.0), Transform::identity(), false);

    assert!(backend.pixmap().pixels().iter().all(|c| c.is_transparent()));
}

#[test]
fn clear_clip() {
    let mut backend = SoftwareBackend::new(10, 10).unwrap();
    backend.clip(&rect(0.0, 0.0, 1.0, 1.0));
    backend.clear_clip();
    backend.fill(&FillStyle::solid(RED), &rect(0.0, 0.0, 10.0, 10.0), Transform::identity(), false);

    assert!(backend.pixmap().pixels().iter().all(|c| *c == RED));
}

#[test]
fn clip_does_not_paint() {
    let mut backend = SoftwareBackend::new(10, 10).unwrap();
    backend.clip(&rect(0.0, 0.0, 5.0, 5.0));

    assert!(backend.pixmap().pixels().iter().all(|c| c.is_transparent()));
}

#[test]
fn restricts_clear() {
    let mut backend = SoftwareBackend::new(10, 10).unwrap();
    backend.fill(&FillStyle::solid(RED), &rect(0.0, 0.0, 10.0, 10.0), Transform::identity(), false);
    backend.clip(&rect(0.0, 0.0, 5.0, 10.0));
    backend.clear(&rect(0.0, 0.0, 10.0, 10.0));

    let pixmap = backend.pixmap();
    assert_eq!(pixmap.pixel(0, 0), Some(ColorU8::TRANSPARENT));
    assert_eq!(pixmap.pixel(9, 9), Some(RED));
}

#[test]
fn put_image_data_ignores_clip() {
    let mut backend = SoftwareBackend::new(4, 4).unwrap();
    backend.clip(&rect(0.0, 0.0, 1.0, 1.0));

    let mut pixmap = Pixmap::new(4, 4).unwrap();
    pixmap.fill(RED);
    backend.put_image_data(&pixmap, 0, 0);

    assert_eq!(backend.pixmap(), &pixmap);
}
