#[macro_use]
extern crate criterion;

use criterion::Criterion;
use image::{ImageBuffer, Pixel, RgbImage};
use seamgrid::SeamGrid;

fn picture(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let r = ((x * 37 + y * 17) % 256) as u8;
        let g = ((x * 11 + y * 71) % 256) as u8;
        *Pixel::from_slice(&[r, g, ((x + y) % 256) as u8])
    })
}

// One find+remove pair per iteration.  Removal repairs O(height)
// energies, so doubling the grid edge should roughly double removal
// cost rather than quadruple it; the search itself stays O(w*h).
fn bench_carve(c: &mut Criterion) {
    for &size in &[64u32, 128] {
        let grid = SeamGrid::new(&picture(size, size)).unwrap();
        c.bench_function(&format!("find+remove {}x{}", size, size), move |b| {
            b.iter(|| {
                let mut carved = grid.clone();
                let seam = carved.find_vertical_seam();
                carved.remove_vertical_seam(&seam).unwrap();
            })
        });
    }
}

criterion_group!(benches, bench_carve);
criterion_main!(benches);
