/// Macro used for implementing pline macros. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a polyline with the points given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use polyline_dedup::pline;
/// # use polyline_dedup::polyline::*;
/// # use polyline_dedup::core::math::*;
/// let polyline = pline![(0.0, 1.0), (2.0, 0.0)];
/// assert_eq!(polyline.vertex_count(), 2);
/// assert_eq!(polyline[0], vec2(0.0, 1.0));
/// assert_eq!(polyline[1], vec2(2.0, 0.0));
/// ```
#[macro_export]
macro_rules! pline {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut pl = $crate::polyline::Polyline::with_capacity(size);
            $(
                pl.add($x.0, $x.1);
            )*
            pl
        }
    };
}
