mod data_store;
mod error_assert;
mod log_util;
mod rng;

pub use data_store::{
    TestDataStore,
    static_local_data_store,
    test_data_dir,
    test_sets_dir,
};
pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use log_util::setup_test_environment;
pub use rng::ControlledRandomNumberGenerator;
