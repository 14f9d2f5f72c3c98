use softcanvas::*;

fn gradient_pixmap(w: u32, h: u32) -> Pixmap {
    let mut pixmap = Pixmap::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            pixmap.set_pixel(x, y, ColorU8::from_rgba(x as u8 * 10, y as u8 * 10, 100, 200));
        }
    }
    pixmap
}

#[test]
fn get_put_is_identity() {
    let mut backend = SoftwareBackend::new(10, 10).unwrap();
    backend.put_image_data(&gradient_pixmap(10, 10), 0, 0);
    let before = backend.pixmap().clone();

    let rect = IntRect::from_xywh(2, 3, 5, 4).unwrap();
    let part = backend.get_image_data(rect).unwrap();
    assert_eq!(part.width(), 5);
    assert_eq!(part.height(), 4);
    assert_eq!(part.pixel(0, 0), before.pixel(2, 3));

    backend.put_image_data(&part, 2, 3);
    assert_eq!(backend.pixmap(), &before);
}

#[test]
fn get_image_data_outside() {
    let backend = SoftwareBackend::new(10, 10).unwrap();
    assert!(backend.get_image_data(IntRect::from_xywh(20, 0, 5, 5).unwrap()).is_none());
    assert!(backend.get_image_data(IntRect::from_xywh(0, -20, 5, 5).unwrap()).is_none());
}

#[test]
fn get_image_data_is_clipped_to_bounds() {
    let mut backend = SoftwareBackend::new(10, 10).unwrap();
    backend.put_image_data(&gradient_pixmap(10, 10), 0, 0);

    let part = backend.get_image_data(IntRect::from_xywh(8, 8, 5, 5).unwrap()).unwrap();
    assert_eq!(part.size().dimensions(), (2, 2));
    assert_eq!(part.pixel(1, 1), backend.pixmap().pixel(9, 9));
}

#[test]
fn put_image_data_partially_outside() {
    let mut backend = SoftwareBackend::new(4, 4).unwrap();
    let src = gradient_pixmap(3, 3);
    backend.put_image_data(&src, -1, 2);

    let pixmap = backend.pixmap();
    assert_eq!(pixmap.pixel(0, 2), src.pixel(1, 0));
    assert_eq!(pixmap.pixel(1, 3), src.pixel(2, 1));
    assert_eq!(pixmap.pixel(0, 0), Some(ColorU8::TRANSPARENT));
}

#[test]
fn put_image_data_replaces_pixels() {
    let mut backend = SoftwareBackend::new(2, 2).unwrap();
    let mut opaque = Pixmap::new(2, 2).unwrap();
    opaque.fill(ColorU8::WHITE);
    backend.put_image_data(&opaque, 0, 0);

    let clear = Pixmap::new(1, 1).unwrap();
    backend.put_image_data(&clear, 1, 1);

    assert_eq!(backend.pixmap().pixel(0, 0), Some(ColorU8::WHITE));
    assert_eq!(backend.pixmap().pixel(1, 1), Some(ColorU8::TRANSPARENT));
}

#[test]
fn from_vec() {
    let size = IntSize::from_wh(2, 1).unwrap();
    let pixmap = Pixmap::from_vec(vec![1, 2, 3, 4, 5, 6, 7, 8], size).unwrap();
    assert_eq!(pixmap.pixel(1, 0), Some(ColorU8::from_rgba(5, 6, 7, 8)));
    assert_eq!(pixmap.data(), &[1, 2, 3, 4, 5, 6, 7, 8]);

    assert!(Pixmap::from_vec(vec![0; 7], size).is_none());
}

#[test]
fn zero_size() {
    assert!(Pixmap::new(0, 1).is_none());
    assert!(SoftwareBackend::new(1, 0).is_none());
}

#[cfg(feature = "png-format")]
#[test]
fn png() {
    let pixmap = gradient_pixmap(5, 3);
    let data = pixmap.encode_png().unwrap();
    assert_eq!(Pixmap::decode_png(&data).unwrap(), pixmap);

    assert!(Pixmap::decode_png(&[1, 2, 3]).is_err());
}
