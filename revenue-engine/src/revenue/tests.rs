use super::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::reservation::{Amount, DesignationShare, OptionShare, ReservationRevenueInput};

fn assert_component_sums(result: &shared::reservation::ReservationRevenueResult) {
    assert_eq!(
        result.course_store_share + result.course_cast_share,
        result.base_price
    );
    assert_eq!(
        result.option_store_share + result.option_cast_share,
        result.options_total
    );
    assert_eq!(
        result.designation_store_share + result.designation_cast_share,
        result.designation_amount
    );
}

#[test]
fn test_default_course_split_follows_welfare() {
    let result = calculate_reservation_revenue(&ReservationRevenueInput::new(10000));

    assert_eq!(result.welfare_rate, Decimal::TEN);
    assert_eq!(result.welfare_expense, 1000);
    assert_eq!(result.course_store_share, 1000);
    assert_eq!(result.course_cast_share, 9000);
    assert_eq!(result.total, 10000);
    assert_eq!(result.store_revenue, 1000);
    assert_eq!(result.staff_revenue, 9000);
    assert!(result.is_conserved());
}

#[test]
fn test_end_to_end_reservation() {
    let input = ReservationRevenueInput::new(14000)
        .with_option(
            OptionShare::new(2000)
                .with_store_share(1200)
                .with_cast_share(800),
        )
        .with_designation(
            DesignationShare::new(2000)
                .with_store_share(1200)
                .with_cast_share(800),
        )
        .with_transportation_fee(1000)
        .with_discount(3000)
        .with_welfare_rate(10);

    let result = calculate_reservation_revenue(&input);

    assert_eq!(result.welfare_expense, 1400);
    assert_eq!(result.course_store_share, 1400);
    assert_eq!(result.course_cast_share, 12600);
    assert_eq!(result.options_total, 2000);
    assert_eq!(result.option_store_share, 1200);
    assert_eq!(result.option_cast_share, 800);
    assert_eq!(result.designation_amount, 2000);
    assert_eq!(result.designation_store_share, 1200);
    assert_eq!(result.designation_cast_share, 800);
    assert_eq!(result.transportation_fee, 1000);
    assert_eq!(result.discount_amount, 3000);
    // 14000 + 2000 + 2000 + 1000 - 3000
    assert_eq!(result.total, 16000);
    // 1400 + 1200 + 1200 + 1000 - 3000, above the 1400 floor
    assert_eq!(result.store_revenue, 1800);
    assert_eq!(result.staff_revenue, 14200);
    assert!(result.is_conserved());
}

#[test]
fn test_same_reservation_from_form_strings() {
    let json = r#"{
        "basePrice": "14000",
        "options": [{ "price": "2000", "storeShare": "1200", "castShare": "800" }],
        "designation": { "amount": 2000, "storeShare": 1200, "castShare": "800" },
        "transportationFee": "1000",
        "discountAmount": "3000",
        "welfareRate": "10"
    }"#;
    let input: ReservationRevenueInput = serde_json::from_str(json).unwrap();
    let result = calculate_reservation_revenue(&input);

    assert_eq!(result.total, 16000);
    assert_eq!(result.store_revenue, 1800);
    assert_eq!(result.staff_revenue, 14200);
}

#[test]
fn test_option_store_share_over_price_is_clamped() {
    let input = ReservationRevenueInput::new(0)
        .with_option(OptionShare::new(1000).with_store_share(5000));
    let result = calculate_reservation_revenue(&input);

    assert_eq!(result.option_store_share, 1000);
    assert_eq!(result.option_cast_share, 0);
}

#[test]
fn test_options_default_to_sixty_forty() {
    let input = ReservationRevenueInput::new(10000)
        .with_option(OptionShare::new(2000))
        .with_option(OptionShare::new(999));
    let result = calculate_reservation_revenue(&input);

    assert_eq!(result.options_total, 2999);
    // 1200 + 599
    assert_eq!(result.option_store_share, 1799);
    // 800 + 400
    assert_eq!(result.option_cast_share, 1200);
    assert_eq!(result.store_revenue, 1000 + 1799);
    assert_eq!(result.staff_revenue, 9000 + 1200);
}

#[test]
fn test_option_order_does_not_matter() {
    let a = OptionShare::new(3000).with_cast_share(1000);
    let b = OptionShare::new(1500);
    let c = OptionShare::new(800).with_store_share(100).with_cast_share(100);

    let forward = ReservationRevenueInput::new(8000)
        .with_option(a.clone())
        .with_option(b.clone())
        .with_option(c.clone());
    let reversed = ReservationRevenueInput::new(8000)
        .with_option(c)
        .with_option(b)
        .with_option(a);

    assert_eq!(
        calculate_reservation_revenue(&forward),
        calculate_reservation_revenue(&reversed)
    );
}

#[test]
fn test_designation_without_shares_uses_default_ratio() {
    let input = ReservationRevenueInput::new(0).with_designation(DesignationShare::new(3000));
    let result = calculate_reservation_revenue(&input);

    assert_eq!(result.designation_amount, 3000);
    assert_eq!(result.designation_store_share, 1800);
    assert_eq!(result.designation_cast_share, 1200);
}

#[test]
fn test_designation_cast_only() {
    let input = ReservationRevenueInput::new(0)
        .with_designation(DesignationShare::new(3000).with_cast_share(3000));
    let result = calculate_reservation_revenue(&input);

    assert_eq!(result.designation_store_share, 0);
    assert_eq!(result.designation_cast_share, 3000);
}

#[test]
fn test_discount_larger_than_charges() {
    let input = ReservationRevenueInput::new(10000).with_discount(20000);
    let result = calculate_reservation_revenue(&input);

    assert_eq!(result.total, 0);
    assert_eq!(result.welfare_expense, 1000);
    assert!(result.store_revenue >= result.welfare_expense);
    assert_eq!(result.store_revenue, 1000);
    // staff revenue ignores the discount
    assert_eq!(result.staff_revenue, 9000);
}

#[test]
fn test_welfare_floor_breaks_conservation() {
    // store before floor = 1000 - 500 = 500 < welfare 1000
    let input = ReservationRevenueInput::new(10000).with_discount(500);
    let result = calculate_reservation_revenue(&input);

    assert_eq!(result.total, 9500);
    assert_eq!(result.store_revenue, 1000);
    assert_eq!(result.staff_revenue, 9000);
    // store + staff exceeds the discounted total by the floored amount
    assert_eq!(result.allocation_gap(), -500);
    assert!(!result.is_conserved());
}

#[test]
fn test_fees_accrue_to_store_only() {
    let input = ReservationRevenueInput::new(10000)
        .with_transportation_fee(1500)
        .with_additional_fee("700");
    let result = calculate_reservation_revenue(&input);

    assert_eq!(result.total, 12200);
    assert_eq!(result.store_revenue, 1000 + 1500 + 700);
    assert_eq!(result.staff_revenue, 9000);
    assert_eq!(result.additional_fee, 700);
}

#[test]
fn test_zero_welfare_rate() {
    let input = ReservationRevenueInput::new(10000).with_welfare_rate(0);
    let result = calculate_reservation_revenue(&input);

    assert_eq!(result.welfare_expense, 0);
    assert_eq!(result.course_store_share, 0);
    assert_eq!(result.course_cast_share, 10000);
    assert_eq!(result.store_revenue, 0);
}

#[test]
fn test_welfare_rate_above_hundred_is_clamped() {
    let input = ReservationRevenueInput::new(10000).with_welfare_rate(150);
    let result = calculate_reservation_revenue(&input);

    assert_eq!(result.welfare_rate, Decimal::ONE_HUNDRED);
    assert_eq!(result.welfare_expense, 10000);
    assert_eq!(result.course_store_share, 10000);
    assert_eq!(result.course_cast_share, 0);
}

#[test]
fn test_fractional_welfare_rate() {
    // 7.5% of 9999 = 749.925 → 750
    let input = ReservationRevenueInput::new(9999).with_welfare_rate("7.5");
    let result = calculate_reservation_revenue(&input);

    assert_eq!(result.welfare_expense, 750);
    assert_eq!(result.course_cast_share, 9249);
}

#[test]
fn test_course_override() {
    let input = ReservationRevenueInput::new(10000)
        .with_course_shares(Some(Amount::from(4000)), None);
    let result = calculate_reservation_revenue(&input);

    assert_eq!(result.welfare_expense, 1000);
    assert_eq!(result.course_store_share, 4000);
    assert_eq!(result.course_cast_share, 6000);
    assert_eq!(result.store_revenue, 4000);
}

#[test]
fn test_course_override_below_welfare_is_floored_in_store_revenue() {
    let input = ReservationRevenueInput::new(10000)
        .with_course_shares(None, Some(Amount::from(10000)));
    let result = calculate_reservation_revenue(&input);

    assert_eq!(result.course_store_share, 0);
    assert_eq!(result.store_revenue, 1000);
    assert_eq!(result.staff_revenue, 10000);
}

#[test]
fn test_custom_policy() {
    let policy = RevenuePolicy::new(Decimal::from(20), Decimal::from(50)).unwrap();
    let allocator = RevenueAllocator::new(policy);
    let input = ReservationRevenueInput::new(10000).with_option(OptionShare::new(3000));

    let result = allocator.calculate(&input);

    assert_eq!(result.welfare_expense, 2000);
    assert_eq!(result.course_store_share, 2000);
    assert_eq!(result.option_store_share, 1500);
    assert_eq!(result.option_cast_share, 1500);

    // explicit rate on the input still wins over the policy default
    let result = allocator.calculate(&input.with_welfare_rate(5));
    assert_eq!(result.welfare_expense, 500);
}

#[test]
fn test_empty_draft_is_all_zero() {
    let result = calculate_reservation_revenue(&ReservationRevenueInput::default());

    assert_eq!(result.total, 0);
    assert_eq!(result.store_revenue, 0);
    assert_eq!(result.staff_revenue, 0);
    assert_eq!(result.welfare_rate, Decimal::TEN);
    assert!(result.is_conserved());
}

#[test]
fn test_garbage_fields_degrade_to_zero() {
    let json = r#"{
        "basePrice": "not a price",
        "options": [{ "price": true }, { "price": { "amount": 1 } }],
        "designation": { "amount": [] },
        "discountAmount": "lots",
        "welfareRate": "ten"
    }"#;
    let input: ReservationRevenueInput = serde_json::from_str(json).unwrap();
    let result = calculate_reservation_revenue(&input);

    assert_eq!(
        result,
        calculate_reservation_revenue(&ReservationRevenueInput::default())
    );
    assert_eq!(result.welfare_rate, Decimal::TEN);
}

#[test]
fn test_output_is_deterministic() {
    let input = ReservationRevenueInput::new("12345.5")
        .with_option(OptionShare::new(777))
        .with_designation(DesignationShare::new(1111).with_store_share(600))
        .with_additional_fee(250)
        .with_welfare_rate("8.25");

    let first = serde_json::to_string(&calculate_reservation_revenue(&input)).unwrap();
    let second = serde_json::to_string(&calculate_reservation_revenue(&input)).unwrap();
    assert_eq!(first, second);
}

fn arb_amount() -> impl Strategy<Value = i64> {
    0i64..5_000_000
}

fn arb_option() -> impl Strategy<Value = OptionShare> {
    (
        arb_amount(),
        proptest::option::of(arb_amount()),
        proptest::option::of(arb_amount()),
    )
        .prop_map(|(price, store, cast)| OptionShare {
            price: Amount::from(price),
            store_share: store.map(Amount::from),
            cast_share: cast.map(Amount::from),
        })
}

fn arb_input() -> impl Strategy<Value = ReservationRevenueInput> {
    (
        arb_amount(),
        proptest::collection::vec(arb_option(), 0..6),
        proptest::option::of(arb_option()),
        arb_amount(),
        arb_amount(),
        arb_amount(),
        proptest::option::of(0i64..=120),
    )
        .prop_map(
            |(base, options, designation, transport, additional, discount, rate)| {
                ReservationRevenueInput {
                    base_price: Amount::from(base),
                    options,
                    designation: designation.map(|d| DesignationShare {
                        amount: d.price,
                        store_share: d.store_share,
                        cast_share: d.cast_share,
                    }),
                    transportation_fee: Some(Amount::from(transport)),
                    additional_fee: Some(Amount::from(additional)),
                    discount_amount: Some(Amount::from(discount)),
                    welfare_rate: rate.map(Amount::from),
                    ..Default::default()
                }
            },
        )
}

proptest! {
    #[test]
    fn prop_component_shares_sum_to_price(input in arb_input()) {
        let result = calculate_reservation_revenue(&input);
        assert_component_sums(&result);
    }

    #[test]
    fn prop_result_invariants(input in arb_input()) {
        let result = calculate_reservation_revenue(&input);

        prop_assert!(result.total >= 0);
        prop_assert!(result.welfare_expense >= 0);
        prop_assert!(result.welfare_expense <= result.base_price);
        prop_assert!(result.store_revenue >= result.welfare_expense);
        prop_assert!(result.staff_revenue >= 0);
        prop_assert!(result.welfare_rate >= Decimal::ZERO);
        prop_assert!(result.welfare_rate <= Decimal::ONE_HUNDRED);
        // the only deviation from conservation is store revenue lifted above the split
        prop_assert!(result.allocation_gap() <= 0);
    }

    #[test]
    fn prop_discount_beyond_charges_zeroes_total(
        input in arb_input(),
        extra in 0i64..1_000_000,
    ) {
        let charges = calculate_reservation_revenue(
            &ReservationRevenueInput { discount_amount: None, ..input.clone() },
        )
        .total;
        let input = input.with_discount(charges + extra);

        let result = calculate_reservation_revenue(&input);
        prop_assert_eq!(result.total, 0);
        prop_assert!(result.store_revenue >= result.welfare_expense);
    }

    #[test]
    fn prop_deterministic(input in arb_input()) {
        let first = serde_json::to_vec(&calculate_reservation_revenue(&input)).unwrap();
        let second = serde_json::to_vec(&calculate_reservation_revenue(&input)).unwrap();
        prop_assert_eq!(first, second);
    }
}
