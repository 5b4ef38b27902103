use deposit_predictor::profile::RAW_FEATURES as KNOWN;
use deposit_predictor::{CustomerProfile, FeatureSchema};
use proptest::prelude::*;

fn profile() -> impl Strategy<Value = CustomerProfile> {
    (
        18u32..=100,
        -1.0e6f64..1.0e6,
        any::<bool>(),
        any::<bool>(),
        1u32..50,
        0u32..50,
    )
        .prop_map(|(age, balance, housing, loan, campaign, previous)| CustomerProfile {
            age,
            balance,
            housing,
            loan,
            campaign,
            previous,
        })
}

fn schema() -> impl Strategy<Value = Vec<String>> {
    let name = prop_oneof![
        prop::sample::select(KNOWN.to_vec()).prop_map(str::to_string),
        "[a-z]{1,8}_[a-z]{1,8}",
    ];
    prop::collection::vec(name, 0..16)
}

proptest! {
    #[test]
    fn row_keys_equal_schema(names in schema(), p in profile()) {
        let schema = FeatureSchema::new(names.clone());
        let row = schema.vectorize(&p);
        let keys: Vec<_> = row.iter().map(|(k, _)| k.to_string()).collect();
        prop_assert_eq!(keys, names);
    }

    #[test]
    fn flags_encode_yes_as_one(names in schema(), p in profile()) {
        let schema = FeatureSchema::new(names);
        let row = schema.vectorize(&p);
        for (name, value) in row.iter() {
            match name {
                "housing_yes" => prop_assert_eq!(value, if p.housing { 1.0 } else { 0.0 }),
                "loan_yes" => prop_assert_eq!(value, if p.loan { 1.0 } else { 0.0 }),
                _ => {}
            }
        }
    }

    #[test]
    fn unknown_columns_are_zero(names in schema(), p in profile()) {
        let schema = FeatureSchema::new(names);
        let row = schema.vectorize(&p);
        for (name, value) in row.iter() {
            if !KNOWN.contains(&name) {
                prop_assert_eq!(value, 0.0);
            }
        }
    }
}
