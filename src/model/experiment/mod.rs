pub mod experiment_record;
pub mod labeled_record;
pub mod source_collection;
