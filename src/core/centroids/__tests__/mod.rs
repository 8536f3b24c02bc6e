mod registry_test;
mod weighted_betweenness_test;
mod algo_test;
