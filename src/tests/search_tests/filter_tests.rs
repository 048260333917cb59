// src/tests/search_tests/filter_tests.rs

use crate::errors::SearchError;
use crate::search::SearchFilter;

#[test]
fn model_without_make_is_rejected() {
    let err = SearchFilter::builder().model("optima").build().unwrap_err();
    assert!(matches!(err, SearchError::Configuration(_)));

    let err = SearchFilter::builder()
        .model("f-150")
        .max_price(30000)
        .city("bellefonte")
        .state("pa")
        .postal_code("16823")
        .build()
        .unwrap_err();
    assert!(matches!(err, SearchError::Configuration(_)));
}

#[test]
fn partial_location_is_rejected() {
    let partials = [
        SearchFilter::builder().city("bellefonte"),
        SearchFilter::builder().state("pa"),
        SearchFilter::builder().postal_code("16823"),
        SearchFilter::builder().city("bellefonte").state("pa"),
        SearchFilter::builder().city("bellefonte").postal_code("16823"),
        SearchFilter::builder().state("pa").postal_code("16823"),
    ];

    for builder in partials {
        let err = builder.make("ford").build().unwrap_err();
        assert!(matches!(err, SearchError::Configuration(_)), "got {err:?}");
    }
}

#[test]
fn full_or_absent_location_is_accepted() {
    let none = SearchFilter::builder().make("ford").build().unwrap();
    assert!(none.location().is_none());

    let all = SearchFilter::builder()
        .city("bellefonte")
        .state("pa")
        .postal_code("16823")
        .build()
        .unwrap();
    let location = all.location().unwrap();
    assert_eq!(location.segment(), "bellefonte-pa-16823");
}

#[test]
fn path_segments_follow_fixed_order() {
    let filter = SearchFilter::builder()
        .category("all-cars")
        .max_price(25000)
        .make("ford")
        .model("focus")
        .city("bellefonte")
        .state("pa")
        .postal_code("16823")
        .build()
        .unwrap();

    assert_eq!(
        filter.path_segments(),
        vec![
            "all-cars",
            "cars-under-25000",
            "ford",
            "focus",
            "bellefonte-pa-16823"
        ]
    );
}

#[test]
fn empty_filter_has_empty_path_and_query() {
    let filter = SearchFilter::builder().build().unwrap();
    assert!(filter.path_segments().is_empty());
    assert!(filter.query_params().is_empty());
}

#[test]
fn query_params_only_carry_request_fields() {
    let filter = SearchFilter::builder()
        .make("kia")
        .model("optima")
        .city("bellefonte")
        .state("pa")
        .postal_code("16823")
        .category("certified-cars")
        .start_year(2013)
        .end_year(2018)
        .max_price(20000)
        .max_mileage(60000)
        .search_radius(50)
        .transmission_codes("AUT")
        .build()
        .unwrap();

    let params = filter.query_params();
    let keys: Vec<&str> = params.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "endYear",
            "maxMileage",
            "maxPrice",
            "requestID",
            "searchRadius",
            "startYear",
            "transmissionCodes",
        ]
    );
    assert_eq!(params["maxPrice"], "20000");
    assert_eq!(params["transmissionCodes"], "AUT");
    assert_eq!(params["requestID"], "certified-cars");
}

#[test]
fn numeric_fields_stay_settable() {
    let mut filter = SearchFilter::builder().make("ford").build().unwrap();
    filter.max_price = Some(18000);
    filter.max_mileage = Some(40000);

    assert_eq!(filter.path_segments(), vec!["cars-under-18000", "ford"]);
    assert_eq!(filter.query_params()["maxMileage"], "40000");
}
