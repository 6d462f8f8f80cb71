mod rescale_tests;
