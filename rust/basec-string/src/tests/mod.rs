mod string_list_tests;
