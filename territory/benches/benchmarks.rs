use territory::{chain, mountain_chain_count, total_valley_area, Coord, Territory};

fn main() {
    divan::main();
}

/// Largest addressable grid (26x99) with a deterministic scatter of ridges.
fn full_grid() -> Territory {
    let cols = (0..26)
        .map(|col| {
            (1..=99)
                .map(|row| u8::from((col * 7 + row * 3) % 5 == 0))
                .collect()
        })
        .collect();
    Territory::new(cols).unwrap()
}

#[divan::bench]
fn bench_chain_of_free_region() {
    let t = full_grid();
    chain(divan::black_box(&t), Coord::new(0, 1)).unwrap();
}

#[divan::bench]
fn bench_mountain_chain_count() {
    let t = full_grid();
    divan::black_box(mountain_chain_count(divan::black_box(&t)));
}

#[divan::bench]
fn bench_total_valley_area() {
    let t = full_grid();
    divan::black_box(total_valley_area(divan::black_box(&t)).unwrap());
}
