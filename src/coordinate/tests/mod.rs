mod bounds_tests;
mod input_tests;
mod sexagesimal_tests;
