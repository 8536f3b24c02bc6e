mod partition_test;
