use quant_points::*;
use quant_points::consts::*;

#[test]
fn triangle_perimeter_includes_the_closing_edge() {
    let triangle = vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(0.0, 1.0)];
    let expected = 2.0 + f64::sqrt(2.0);

    assert!(f64::abs(path_length(&triangle)-expected) < SMALL_DISTANCE);
    assert!(f64::abs(path_length_fold(&triangle)-expected) < SMALL_DISTANCE);
}

#[test]
fn unit_square_has_perimeter_four() {
    let square = vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 1.0), Coord2(0.0, 1.0)];

    assert!(path_length(&square) == 4.0);
    assert!(path_length_fold(&square) == 4.0);
}

#[test]
fn empty_path_has_length_zero() {
    let no_points: Vec<Coord3> = vec![];

    assert!(path_length(&no_points) == 0.0);
    assert!(path_length_fold(&no_points) == 0.0);
}

#[test]
fn single_point_path_has_length_zero() {
    let one_point = vec![Coord2(0.25, 0.75)];

    assert!(path_length(&one_point) == 0.0);
    assert!(path_length_fold(&one_point) == 0.0);
}

#[test]
fn both_strategies_agree_on_random_paths() {
    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        let points: Vec<Coord3> = random_points(&mut rng, 50);

        assert!(path_length(&points) == path_length_fold(&points));
    }
}

#[test]
fn rotating_the_path_does_not_change_its_length() {
    let mut points = vec![Coord2(0.1, 0.9), Coord2(0.4, 0.2), Coord2(0.8, 0.8), Coord2(0.5, 0.5)];
    let expected   = path_length(&points);

    for _ in 0..points.len() {
        let front = points.remove(0);
        points.push(front);

        assert!(f64::abs(path_length(&points)-expected) < SMALL_DISTANCE);
    }
}
