//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::intersection_test;
pub use self::intersection_test_support_map_support_map::{
    intersection_test_support_map_support_map,
    intersection_test_support_map_support_map_with_params,
};

mod intersection_test_support_map_support_map;
