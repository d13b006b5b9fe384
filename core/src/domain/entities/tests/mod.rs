mod area_selection_tests;
mod credentials_tests;
mod password_reset_tests;
