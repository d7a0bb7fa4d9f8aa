use quant_points::*;

use std::cmp::Ordering;

#[test]
fn quantize_keeps_one_decimal_digit() {
    assert!(quantize(&Coord2(0.15, 0.72)) == Coord2(0.1, 0.7));
    assert!(quantize(&Coord3(1.234, 5.678, 9.0)) == Coord3(1.2, 5.6, 9.0));
}

#[test]
fn quantize_truncates_towards_zero() {
    assert!(quantize(&Coord2(-0.15, -1.26)) == Coord2(-0.1, -1.2));
}

#[test]
fn quantize_leaves_grid_points_alone() {
    assert!(quantize(&Coord2(0.4, 0.0)) == Coord2(0.4, 0.0));
}

#[test]
fn orders_points_by_their_first_differing_cell() {
    assert!(quantized_cmp(&Coord2(0.15, 0.72), &Coord2(0.43, 0.09)) == Ordering::Less);
    assert!(quantized_cmp(&Coord2(0.43, 0.09), &Coord2(0.15, 0.72)) == Ordering::Greater);
}

#[test]
fn falls_back_to_later_components_on_ties() {
    assert!(quantized_cmp(&Coord2(0.27, 0.57), &Coord2(0.21, 0.63)) == Ordering::Less);
}

#[test]
fn points_in_the_same_cell_compare_equal() {
    assert!(quantized_cmp(&Coord2(0.34, 0.72), &Coord2(0.36, 0.73)) == Ordering::Equal);
}

#[test]
fn first_component_outweighs_the_rest() {
    assert!(quantized_cmp(&Coord2(0.9, 0.0), &Coord2(0.0, 0.9)) == Ordering::Greater);
}

#[test]
fn negative_and_positive_zero_share_a_cell() {
    assert!(quantized_cmp(&Coord2(-0.05, 0.5), &Coord2(0.05, 0.5)) == Ordering::Equal);
}

#[test]
fn quantized_wrapper_follows_the_quantized_order() {
    assert!(Quantized(Coord2(0.34, 0.72)) == Quantized(Coord2(0.36, 0.73)));
    assert!(Quantized(Coord2(0.15, 0.72)) < Quantized(Coord2(0.43, 0.09)));
    assert!(Quantized(Coord2(0.43, 0.09)) > Quantized(Coord2(0.15, 0.72)));
}

#[test]
fn quantized_order_agrees_in_four_dimensions() {
    let p1 = Coord4(0.11, 0.22, 0.33, 0.44);
    let p2 = Coord4(0.11, 0.22, 0.33, 0.48);

    assert!(quantized_cmp(&p1, &p2) == Ordering::Equal);
    assert!(quantized_cmp(&p1, &Coord4(0.11, 0.22, 0.33, 0.54)) == Ordering::Less);
}
