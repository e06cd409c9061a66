mod bearing_tests;
mod destination_tests;
