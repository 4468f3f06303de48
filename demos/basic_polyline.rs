use polyline_dedup::{
    core::math::Vector2,
    pline,
    polyline::{split_all, Polyline},
};

fn main() {
    polyline_creation();
    segment_pairs();
    splitting();
}

fn polyline_creation() {
    let empty = Polyline::<f64>::new();
    assert!(empty.is_empty(), "Empty polyline should have no points");

    let mut pl = Polyline::with_capacity(2);
    pl.add(0.0, 0.0);
    pl.add_point(Vector2::new(10.0, 0.0));
    assert_eq!(pl.vertex_count(), 2);

    // same polyline with the macro
    let from_macro = pline![(0.0, 0.0), (10.0, 0.0)];
    assert_eq!(pl, from_macro);

    let extents = pl.extents().expect("non-empty polyline has extents");
    println!(
        "extents: ({}, {}) -> ({}, {})",
        extents.min_x, extents.min_y, extents.max_x, extents.max_y
    );

    let rev = pl.reversed();
    assert_eq!(rev[0], Vector2::new(10.0, 0.0));
    println!("reversed: {:?}", rev.points());
}

fn segment_pairs() {
    let pl = pline![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    // points are consumed two at a time, one pair per segment
    let pairs = pl.segment_pairs().expect("even point count");
    for (i, pair) in pairs.enumerate() {
        println!("pair {i}: {:?} -> {:?}", pair.start, pair.end);
    }

    let odd = pline![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
    assert!(odd.segment_pairs().is_none(), "Odd point count has no pairs");
}

fn splitting() {
    let path = pline![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
    let segments = path.split_segments();
    assert_eq!(segments.len(), 2);

    let other = pline![(5.0, 5.0), (6.0, 6.0)];
    let all = split_all([&path, &other]);
    assert_eq!(all.len(), 3);
    for s in &all {
        println!("segment: {:?}", s.points());
    }
}
