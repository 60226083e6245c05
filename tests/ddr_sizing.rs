//! DDR 정격 산정 경계값 테스트.
use electrical_quote_toolbox::panel::{
    ddr_rating_for, derate, size_ddr, CircuitBreaker, PanelRow,
};
use electrical_quote_toolbox::units::{BreakerRating, DdrRating};
use rstest::rstest;
use rust_decimal_macros::dec;

fn row(entries: &[(BreakerRating, u32)]) -> PanelRow {
    PanelRow {
        number: 1,
        breakers: entries
            .iter()
            .enumerate()
            .map(|(i, &(rating, quantity))| CircuitBreaker {
                id: format!("cb-{i}"),
                rating,
                quantity,
                reference: String::new(),
                label: String::new(),
                price: dec!(0),
            })
            .collect(),
    }
}

#[rstest]
#[case(0, 0)]
#[case(10, 7)]
#[case(35, 25)]
#[case(36, 26)]
#[case(57, 40)]
#[case(58, 41)]
#[case(68, 48)]
#[case(96, 68)]
#[case(128, 90)]
fn derating_rounds_up(#[case] total: u32, #[case] adjusted: u32) {
    assert_eq!(derate(total), adjusted);
}

#[rstest]
#[case(0, DdrRating::A25)]
#[case(25, DdrRating::A25)]
#[case(26, DdrRating::A40)]
#[case(40, DdrRating::A40)]
#[case(41, DdrRating::A63)]
#[case(500, DdrRating::A63)]
fn tier_boundaries(#[case] adjusted: u32, #[case] expected: DdrRating) {
    assert_eq!(ddr_rating_for(adjusted), expected);
}

#[rstest]
#[case(&[(BreakerRating::A25, 1), (BreakerRating::A10, 1)], 35, DdrRating::A25)]
#[case(&[(BreakerRating::A20, 1), (BreakerRating::A16, 1)], 36, DdrRating::A40)]
#[case(&[(BreakerRating::A25, 1), (BreakerRating::A32, 1)], 57, DdrRating::A40)]
#[case(&[(BreakerRating::A32, 1), (BreakerRating::A16, 1), (BreakerRating::A10, 1)], 58, DdrRating::A63)]
fn row_boundaries(
    #[case] entries: &[(BreakerRating, u32)],
    #[case] total: u32,
    #[case] expected: DdrRating,
) {
    let sizing = size_ddr(&row(entries));
    assert_eq!(sizing.total_rating, total);
    assert_eq!(sizing.rating, expected);
}

#[test]
fn quantity_multiplies_rating() {
    let sizing = size_ddr(&row(&[(BreakerRating::A16, 3)]));
    assert_eq!(sizing.total_rating, 48);
    assert_eq!(sizing.adjusted_rating, 34);
    assert_eq!(sizing.rating, DdrRating::A40);
}

#[test]
fn sizing_is_monotonic() {
    let mut previous = DdrRating::A25.amps();
    for total in 0..=300 {
        let amps = ddr_rating_for(derate(total)).amps();
        assert!(amps >= previous, "total={total} gave {amps}A after {previous}A");
        previous = amps;
    }
}

#[test]
fn derate_does_not_overflow() {
    assert_eq!(derate(u32::MAX), u32::try_from((u64::from(u32::MAX) * 70).div_ceil(100)).unwrap());
}
