use polyline_dedup::{
    dedup::{dedup, ShapeError, DEFAULT_TOLERANCE},
    pline,
    polyline::split_all,
};

fn main() {
    env_logger::init();

    let paths = vec![
        pline![(0.0, 0.0), (1.0, 0.0)],
        pline![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)],
    ];

    // paths must be split into segments first
    if let Err(e) = dedup(&paths, DEFAULT_TOLERANCE) {
        let kind = match e {
            ShapeError::OddPointCount { .. } => "odd point count",
            ShapeError::PointCountMismatch { .. } => "point count mismatch",
        };
        println!("rejected polyline {} ({kind}): {e}", e.index());
    }

    let segments = split_all(&paths);
    let unique = dedup(&segments, DEFAULT_TOLERANCE).expect("segments all have two points");
    assert_eq!(unique.len(), 2);
    println!("{} segments after dedup", unique.len());
}
