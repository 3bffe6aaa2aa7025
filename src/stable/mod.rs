// Quadratic reference sort, built on the sortedness and swap primitives.
pub mod bubblesort;

// Top-down recursive merge sort with a per-merge scratch buffer.
pub mod mergesort;
