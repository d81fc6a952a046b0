// Application layer - Use cases
pub mod dashboard_service;
pub mod mock_data;
pub mod section_assembler;
pub mod sheet_records;
pub mod sheet_repository;
