//! Unit tests for am-route.

#[cfg(test)]
mod route {
    use am_core::Coordinate;

    use crate::Route;

    fn kofu() -> Route {
        Route::new(vec![
            Coordinate::new(35.667, 138.569),
            Coordinate::new(35.6682, 138.5699),
            Coordinate::new(35.66839907, 138.56980151),
        ])
    }

    #[test]
    fn accessors() {
        let r = kofu();
        assert_eq!(r.len(), 3);
        assert!(!r.is_empty());
        assert_eq!(r.origin(), Some(Coordinate::new(35.667, 138.569)));
        assert_eq!(r.destination(), Some(Coordinate::new(35.66839907, 138.56980151)));
        assert_eq!(r.get(1), Some(Coordinate::new(35.6682, 138.5699)));
        assert_eq!(r.get(3), None);
    }

    #[test]
    fn empty_route() {
        let r = Route::empty();
        assert!(r.is_empty());
        assert_eq!(r.origin(), None);
        assert_eq!(r.bounds(), None);
        assert_eq!(r.length_m(), 0.0);
    }

    #[test]
    fn length_sums_segments() {
        let r = kofu();
        let expected = r.points()[0].distance_m(r.points()[1])
            + r.points()[1].distance_m(r.points()[2]);
        assert!((r.length_m() - expected).abs() < 1e-9);
        assert!(r.length_m() > 100.0);
    }

    #[test]
    fn bounds_cover_all_points() {
        let (sw, ne) = kofu().bounds().unwrap();
        assert_eq!(sw, Coordinate::new(35.667, 138.569));
        assert_eq!(ne, Coordinate::new(35.66839907, 138.5699));
    }
}

#[cfg(test)]
mod provider {
    use am_core::Coordinate;

    use crate::{Route, RouteError, RouteProvider, StaticRouteProvider};

    const A: Coordinate = Coordinate::new(35.0, 138.0);
    const B: Coordinate = Coordinate::new(35.1, 138.1);

    #[test]
    fn static_returns_its_route() {
        let route = Route::new(vec![A, B]);
        let p = StaticRouteProvider::new(route.clone());
        assert_eq!(p.fetch_route(A, B).unwrap(), route);
    }

    #[test]
    fn static_empty_is_no_route() {
        let p = StaticRouteProvider::new(Route::empty());
        let err = p.fetch_route(A, B).unwrap_err();
        assert!(matches!(err, RouteError::NoRoute { from, to } if from == A && to == B));
    }
}

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use am_core::Coordinate;

    use crate::{CsvRouteProvider, RouteError, RouteProvider, load_route_reader};

    const CSV: &str = "\
lat,lon\n\
35.667,138.569\n\
35.6682,138.5699\n\
35.66839907,138.56980151\n\
";

    #[test]
    fn reads_points_in_order() {
        let route = load_route_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(route.len(), 3);
        assert_eq!(route.get(0), Some(Coordinate::new(35.667, 138.569)));
        assert_eq!(route.get(2), Some(Coordinate::new(35.66839907, 138.56980151)));
    }

    #[test]
    fn header_only_is_empty() {
        let route = load_route_reader(Cursor::new("lat,lon\n")).unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let err = load_route_reader(Cursor::new("lat,lon\n35.0,abc\n")).unwrap_err();
        assert!(matches!(err, RouteError::Parse(_)));
    }

    #[test]
    fn out_of_range_row_is_parse_error() {
        let err = load_route_reader(Cursor::new("lat,lon\n95.0,138.0\n")).unwrap_err();
        assert!(matches!(err, RouteError::Parse(msg) if msg.contains("row 1")));
    }

    #[test]
    fn csv_provider_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        file.flush().unwrap();

        let provider = CsvRouteProvider::new(file.path());
        let from = Coordinate::new(35.667, 138.569);
        let to = Coordinate::new(35.66839907, 138.56980151);
        assert_eq!(provider.fetch_route(from, to).unwrap().len(), 3);
    }

    #[test]
    fn csv_provider_empty_file_is_no_route() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"lat,lon\n").unwrap();
        file.flush().unwrap();

        let provider = CsvRouteProvider::new(file.path());
        let p = Coordinate::new(35.0, 138.0);
        assert!(matches!(provider.fetch_route(p, p), Err(RouteError::NoRoute { .. })));
    }

    #[test]
    fn csv_provider_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = CsvRouteProvider::new(dir.path().join("missing.csv"));
        let p = Coordinate::new(35.0, 138.0);
        assert!(matches!(provider.fetch_route(p, p), Err(RouteError::Io(_))));
    }
}
