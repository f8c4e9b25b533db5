pub mod future_ext_tests;
