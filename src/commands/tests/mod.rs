mod command_tests;
