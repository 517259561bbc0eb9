mod fuel_tests;
mod shape_tests;
mod unclosed_tests;
mod unexpected_tests;
