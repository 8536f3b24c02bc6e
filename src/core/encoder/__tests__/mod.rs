mod gat_test;
