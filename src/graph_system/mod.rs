pub mod value_graph;
