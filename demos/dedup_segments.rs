use log::info;
use polyline_dedup::{
    dedup::{dedup_polylines, DedupOptions, DedupStrategy, LogProgress},
    pline,
    polyline::split_all,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // a plotter drawing: a square outline, the same square traced in the other direction with a
    // small offset, and one diagonal
    let drawing = vec![
        pline![(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0), (0.0, 0.0)],
        pline![
            (0.0, 0.0),
            (0.0, 100.001),
            (100.0, 100.0),
            (100.001, 0.0),
            (0.0, 0.0)
        ],
        pline![(0.0, 0.0), (100.0, 100.0)],
    ];

    let segments = split_all(&drawing);
    info!("{} paths split into {} segments", drawing.len(), segments.len());

    let progress = LogProgress::new(25);
    for strategy in [DedupStrategy::PairwiseScan, DedupStrategy::SpatialIndex] {
        let options = DedupOptions {
            strategy,
            progress: Some(&progress),
            ..DedupOptions::with_tolerance(0.01)
        };

        match dedup_polylines(&segments, &options) {
            Ok(unique) => {
                info!("{strategy:?}: {} unique segments", unique.len());
                for s in &unique {
                    println!("{:?}", s.points());
                }
            }
            Err(e) => log::error!("{e}"),
        }
    }
}
