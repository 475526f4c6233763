mod worksheet_tests;
