mod test_utils;
mod assembler_tests;
mod settings_tests;
