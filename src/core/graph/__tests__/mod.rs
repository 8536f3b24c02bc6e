mod structural_test;
mod loader_test;
