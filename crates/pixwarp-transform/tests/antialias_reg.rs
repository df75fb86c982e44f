//! Anti-aliasing regression test
//!
//! Tests the 3-tap bilinear sampler:
//!   1. on the sampling grid points it agrees with nearest-neighbor, and
//!      at fraction 0 it blends toward the up-left neighbors
//!   2. alpha fades monotonically toward the outer edge
//!   3. a rotated opaque image gets soft edges but no color bleeding
//!   4. a fully transparent source renders fully transparent

use pixwarp_core::{
    Area, Argb8888, Color16, Color32, OPA_50, OPA_COVER, OPA_TRANSP, PixelFormat, Rgb565A8,
    SourceImage,
};
use pixwarp_test::{RegParams, images};
use pixwarp_transform::{TransformConfig, draw_transformed, sample_bilinear, sample_nearest};

/// `.8` coordinate of a pixel's sampling grid point
fn grid(i: i32) -> i32 {
    i * 256 + 128
}

#[test]
fn antialias_reg() {
    let mut rp = RegParams::new("antialias");

    let (w, h) = (9, 7);
    let data = images::gradient::<Rgb565A8>(w, h);
    let src = SourceImage::<Rgb565A8>::packed(&data, w, h).expect("source");

    // --- Test 1: agreement on grid points away from the last row/column ---
    let coords: Vec<(i32, i32)> = (0..h - 1)
        .flat_map(|y| (0..w - 1).map(move |x| (grid(x), grid(y))))
        .collect();
    let n = coords.len();
    let (mut cn, mut an) = (vec![Color16::default(); n], vec![0u8; n]);
    let (mut cb, mut ab) = (vec![Color16::default(); n], vec![0u8; n]);
    sample_nearest(&src, coords.iter().copied(), &mut cn, &mut an);
    sample_bilinear(&src, coords.iter().copied(), &mut cb, &mut ab);
    rp.compare_bytes(&an, &ab);
    rp.compare_values(1.0, if cn == cb { 1.0 } else { 0.0 }, 0.0);

    // --- Test 1b: literal fraction 0 on both axes ---
    // Both taps lean -1 with weight 254, so an opaque interior stays opaque
    // and the color mixes with the left and upper neighbors.
    let corners: Vec<(i32, i32)> = (1..h - 1)
        .flat_map(|y| (1..w - 1).map(move |x| (x * 256, y * 256)))
        .collect();
    let n = corners.len();
    let (mut cb, mut ab) = (vec![Color16::default(); n], vec![0u8; n]);
    sample_bilinear(&src, corners.iter().copied(), &mut cb, &mut ab);
    rp.compare_bytes(&vec![OPA_COVER; n], &ab);
    let expected: Vec<Color16> = corners
        .iter()
        .map(|&(xs, ys)| {
            let (x, y) = (xs >> 8, ys >> 8);
            let color = |x, y| src.get(x, y).map_or(Color16::default(), |(c, _)| c);
            let base = color(x, y);
            let hor = Rgb565A8::mix(color(x - 1, y), base, 254);
            let ver = Rgb565A8::mix(color(x, y - 1), base, 254);
            Rgb565A8::mix(hor, ver, OPA_50)
        })
        .collect();
    rp.compare_values(1.0, if cb == expected { 1.0 } else { 0.0 }, 0.0);

    // --- Test 2: edge fade ---
    // Right edge: fraction moves from the center of the last column outward
    let right: Vec<(i32, i32)> = [128, 160, 192, 224, 255]
        .iter()
        .map(|&f| ((w - 1) * 256 + f, grid(3)))
        .collect();
    // Top edge: fraction moves from the center of row 0 upward
    let top: Vec<(i32, i32)> = [127, 96, 64, 32, 0]
        .iter()
        .map(|&f| (grid(4), f))
        .collect();
    // Left edge: fraction moves from the center of column 0 outward
    let left: Vec<(i32, i32)> = [127, 96, 64, 32, 0]
        .iter()
        .map(|&f| (f, grid(3)))
        .collect();
    for (name, coords) in [("right", right), ("top", top), ("left", left)] {
        let mut c = vec![Color16::default(); coords.len()];
        let mut a = vec![0u8; coords.len()];
        sample_bilinear(&src, coords.into_iter(), &mut c, &mut a);
        eprintln!("  {name} edge fade: {:?}", a);
        let decreasing = a.windows(2).all(|p| p[0] > p[1]);
        rp.compare_values(1.0, if decreasing { 1.0 } else { 0.0 }, 0.0);
        rp.compare_values(254.0, a[0] as f64, 0.0);
        rp.compare_values(0.0, a[a.len() - 1] as f64, 0.0);
    }

    assert!(rp.cleanup(), "antialias regression test failed");
}

#[test]
fn antialias_rotated_reg() {
    let mut rp = RegParams::new("antialias_rotated");

    let fill = Color32::from_argb(OPA_COVER, 0xC0, 0x40, 0x10);
    let data = images::solid::<Argb8888>(16, 16, fill, OPA_COVER);
    let src = SourceImage::<Argb8888>::packed(&data, 16, 16).expect("source");
    let dest = Area::new(-4, -4, 20, 20).expect("dest");
    let sentinel = Color32(0x1234_5678);

    let render = |antialias: bool| {
        let cfg = TransformConfig::new(src).angle(300).antialias(antialias);
        let mut colors = vec![sentinel; dest.size()];
        let mut alphas = vec![0u8; dest.size()];
        draw_transformed(&dest, &cfg, &mut colors, &mut alphas).expect("draw");
        (colors, alphas)
    };
    let (_, a_near) = render(false);
    let (c_aa, a_aa) = render(true);

    // --- Test 3a: nearest gives hard edges, bilinear soft ones ---
    let partial = |a: &[u8]| a.iter().filter(|&&v| v != OPA_TRANSP && v != OPA_COVER).count();
    rp.compare_values(0.0, partial(&a_near) as f64, 0.0);
    let soft = partial(&a_aa);
    eprintln!("  partially covered pixels with antialiasing: {soft}");
    rp.compare_values(1.0, if soft > 0 { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3b: same coordinates, so coverage only shrinks at the edges ---
    let mut inconsistent = 0;
    for (&n, &b) in a_near.iter().zip(&a_aa) {
        if (n == OPA_TRANSP && b != OPA_TRANSP) || (b == OPA_COVER && n != OPA_COVER) {
            inconsistent += 1;
        }
    }
    rp.compare_values(0.0, inconsistent as f64, 0.0);

    // --- Test 3c: no color bleeding from a uniform source ---
    // Transparent border pixels may still carry the edge pixel's color
    let bled = c_aa
        .iter()
        .zip(&a_aa)
        .filter(|&(&c, &a)| c != fill && (a != OPA_TRANSP || c != sentinel))
        .count();
    rp.compare_values(0.0, bled as f64, 0.0);

    if rp.display() {
        rp.write_png_and_check::<Argb8888>(
            dest.width() as u32,
            dest.height() as u32,
            &c_aa,
            &a_aa,
        )
        .expect("write antialias png");
    }

    assert!(rp.cleanup(), "antialias_rotated regression test failed");
}

#[test]
fn antialias_transparent_reg() {
    let mut rp = RegParams::new("antialias_transparent");

    let data = images::solid::<Rgb565A8>(10, 10, Color16(0xF800), OPA_TRANSP);
    let src = SourceImage::<Rgb565A8>::packed(&data, 10, 10).expect("source");
    let dest = Area::new(0, 0, 10, 10).expect("dest");
    let sentinel = Color16(0x07E0);

    for angle in [0, 150, 900] {
        let cfg = TransformConfig::new(src).angle(angle).antialias(true);
        let mut colors = vec![sentinel; dest.size()];
        let mut alphas = vec![0xAAu8; dest.size()];
        draw_transformed(&dest, &cfg, &mut colors, &mut alphas).expect("draw");

        rp.compare_bytes(&vec![OPA_TRANSP; dest.size()], &alphas);
        // Interior pixels keep the sentinel; border pixels may take the
        // source color, never anything else
        let foreign = colors
            .iter()
            .filter(|&&c| c != sentinel && c != Color16(0xF800))
            .count();
        rp.compare_values(0.0, foreign as f64, 0.0);
        let kept = colors.iter().filter(|&&c| c == sentinel).count();
        rp.compare_values(1.0, if kept > 0 { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "antialias_transparent regression test failed");
}
