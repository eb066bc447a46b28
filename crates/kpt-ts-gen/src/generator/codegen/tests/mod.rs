mod support;
mod type_tests;
