pub mod in_memory;
pub mod sample_data;
