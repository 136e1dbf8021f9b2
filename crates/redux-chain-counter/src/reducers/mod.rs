pub mod counter_reducer;
