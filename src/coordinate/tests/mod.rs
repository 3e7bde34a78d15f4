mod point_tests;
mod projector_tests;
