mod extractor_tests;
