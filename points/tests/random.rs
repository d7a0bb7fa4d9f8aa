use quant_points::*;

#[test]
fn components_are_in_the_unit_range() {
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let point: Coord3 = random_point(&mut rng);

        for index in 0..Coord3::len() {
            assert!(point.get(index) >= 0.0);
            assert!(point.get(index) < 1.0);
        }
    }
}

#[test]
fn generates_the_requested_number_of_points() {
    let mut rng = rand::thread_rng();

    let none: Vec<Coord2>   = random_points(&mut rng, 0);
    let some: Vec<Coord2>   = random_points(&mut rng, 42);

    assert!(none.is_empty());
    assert!(some.len() == 42);
}

#[test]
fn random_points_are_never_nan() {
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let point: Coord4 = random_point(&mut rng);

        assert!(!point.is_nan());
    }
}

#[test]
fn random_cloud_deduplicates_to_occupied_cells() {
    let mut rng = rand::thread_rng();

    let cloud: Vec<Coord4>  = random_points(&mut rng, 1000);
    let set                 = cloud.iter().copied().collect::<PointSet<_>>();

    assert!(set.len() > 0);
    assert!(set.len() <= cloud.len());

    for point in cloud.iter() {
        assert!(set.contains(point));
    }
}

#[test]
fn both_path_strategies_agree_on_a_random_cloud() {
    let mut rng = rand::thread_rng();

    let cloud: Vec<Coord2> = random_points(&mut rng, 250);

    assert!(path_length(&cloud) == path_length_fold(&cloud));
}
