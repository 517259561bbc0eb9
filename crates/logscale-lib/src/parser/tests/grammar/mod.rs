mod blocks_tests;
mod calls_tests;
mod expressions_tests;
mod filters_tests;
mod trivia_tests;
