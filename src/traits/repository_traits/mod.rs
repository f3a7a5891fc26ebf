pub mod experiment_repository;
